//! Zoon elements for hyperwalk scenes.
//!
//! Everything here is a pure function of scene data plus a navigate handler;
//! the handler is how a pressed title or menu item reaches the content view.

use std::rc::Rc;

use hyperwalk_scene::{Card, ErrorNotice, ListItem, MenuItem, SceneNode, Section, Title};
use zoon::*;

/// Called with the location of a pressed link.
pub type NavigateHandler = Rc<dyn Fn(String)>;

fn class<T: RawEl>(raw_el: T, name: &str) -> T {
    raw_el.attr("class", name)
}

pub fn render_node(node: &SceneNode, on_navigate: &NavigateHandler) -> RawElOrText {
    match node {
        SceneNode::Card(card) => render_card(card, on_navigate),
        SceneNode::List { items } => render_list(items, on_navigate),
        SceneNode::Text { text } => El::with_tag(Tag::Custom("span"))
            .child(Text::new(text.clone()))
            .unify(),
        SceneNode::Error(notice) => render_error(notice),
    }
}

pub fn render_nodes(nodes: &[SceneNode], on_navigate: &NavigateHandler) -> Vec<RawElOrText> {
    nodes
        .iter()
        .map(|node| render_node(node, on_navigate))
        .collect()
}

fn render_card(card: &Card, on_navigate: &NavigateHandler) -> RawElOrText {
    Column::new()
        .update_raw_el(|raw_el| class(raw_el, "card"))
        .item(
            El::new()
                .update_raw_el(|raw_el| class(raw_el, "card-header"))
                .child(render_title(&card.title, on_navigate)),
        )
        .item(
            Column::new()
                .update_raw_el(|raw_el| class(raw_el, "card-block"))
                .items(
                    card.sections
                        .iter()
                        .map(|section| render_section(section, on_navigate)),
                ),
        )
        .unify()
}

fn render_title(title: &Title, on_navigate: &NavigateHandler) -> RawElOrText {
    let text = title.text.clone().unwrap_or_default();
    match &title.location {
        Some(location) => {
            let location = location.clone();
            let on_navigate = on_navigate.clone();
            Button::new()
                .update_raw_el(|raw_el| class(raw_el, "card-link"))
                .s(Font::new().weight(FontWeight::SemiBold))
                .label(text)
                .on_press(move || on_navigate(location.clone()))
                .unify()
        }
        None => Text::new(text).unify(),
    }
}

fn render_section(section: &Section, on_navigate: &NavigateHandler) -> RawElOrText {
    Row::new()
        .update_raw_el(|raw_el| class(raw_el, "row"))
        .s(Gap::both(8))
        .item(
            El::new()
                .update_raw_el(|raw_el| class(raw_el, "col-md-2"))
                .child(Text::new(section.label.clone())),
        )
        .item(
            Column::new()
                .update_raw_el(|raw_el| class(raw_el, "col-md-10"))
                .items(render_nodes(&section.children, on_navigate)),
        )
        .unify()
}

fn render_list(items: &[ListItem], on_navigate: &NavigateHandler) -> RawElOrText {
    Column::with_tag(Tag::Custom("ul"))
        .update_raw_el(|raw_el| {
            class(raw_el, "list-group").style("list-style-type", "none")
        })
        .items(items.iter().map(|item| {
            Column::with_tag(Tag::Custom("li"))
                .items(render_nodes(&item.children, on_navigate))
        }))
        .unify()
}

fn render_error(notice: &ErrorNotice) -> RawElOrText {
    El::new()
        .update_raw_el(|raw_el| class(raw_el, "alert alert-danger"))
        .s(Font::new().color(hsluv!(0, 70, 60)))
        .child(format!(
            "Failed to load {}: {}",
            notice.location, notice.message
        ))
        .unify()
}

/// Content pane that follows `nodes`.
pub fn scene_pane(nodes: MutableVec<SceneNode>, on_navigate: NavigateHandler) -> impl Element {
    Column::new()
        .update_raw_el(|raw_el| raw_el.attr("id", "content"))
        .s(Gap::new().y(12))
        .items_signal_vec(
            nodes
                .signal_vec_cloned()
                .map(move |node| render_node(&node, &on_navigate)),
        )
}

/// Menu bar that follows `items`, with `error` shown in place of the items
/// when the entry point could not be loaded.
pub fn menu_bar(
    items: MutableVec<MenuItem>,
    error: Mutable<Option<String>>,
    on_navigate: NavigateHandler,
) -> impl Element {
    Row::with_tag(Tag::Custom("ul"))
        .update_raw_el(|raw_el| {
            raw_el
                .attr("id", "menu")
                .attr("class", "nav navbar-nav")
                .style("list-style-type", "none")
        })
        .s(Gap::new().x(16))
        .items_signal_vec(items.signal_vec_cloned().map(move |item| {
            let on_navigate = on_navigate.clone();
            let location = item.location.clone();
            El::with_tag(Tag::Custom("li"))
                .update_raw_el(|raw_el| class(raw_el, "nav-item"))
                .child(
                    Button::new()
                        .update_raw_el(|raw_el| class(raw_el, "nav-link"))
                        .label(item.title)
                        .on_press(move || on_navigate(location.clone())),
                )
        }))
        .item_signal(error.signal_cloned().map(|error| {
            error.map(|message| {
                El::with_tag(Tag::Custom("li"))
                    .update_raw_el(|raw_el| class(raw_el, "nav-item text-danger"))
                    .child(format!("Menu unavailable: {message}"))
            })
        }))
}
