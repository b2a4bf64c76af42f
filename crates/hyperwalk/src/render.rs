//! Render rules: content value -> scene nodes.
//!
//! - Record: a card titled by `label`/`name`, linked by `url`, with one
//!   labeled section per non-reserved, non-empty field.
//! - Sequence: a list with one item per element.
//! - Scalar: a text leaf; `null` renders nothing.
//!
//! Rendering is total and synchronous. Input from the wire is a tree, so the
//! recursion ends with the input.

use hyperwalk_scene::{Card, ListItem, SceneNode, Section, Title};

use crate::content::{ContentValue, Record};

/// Append the rendering of `value` under `target`.
pub fn render(target: &mut Vec<SceneNode>, value: &ContentValue) {
    match value {
        ContentValue::Record(record) => target.push(SceneNode::Card(render_card(record))),
        ContentValue::Sequence(items) => target.push(SceneNode::List {
            items: items
                .iter()
                .map(|item| ListItem {
                    children: render_value(item),
                })
                .collect(),
        }),
        ContentValue::Scalar(scalar) => {
            if let Some(text) = scalar.to_text() {
                target.push(SceneNode::text(text));
            }
        }
    }
}

/// Rendering of `value` as a fresh forest.
pub fn render_value(value: &ContentValue) -> Vec<SceneNode> {
    let mut nodes = Vec::new();
    render(&mut nodes, value);
    nodes
}

fn render_card(record: &Record) -> Card {
    Card {
        title: Title {
            text: record.title_text(),
            location: record.location().map(str::to_string),
        },
        sections: record
            .content_fields()
            .map(|(label, value)| Section {
                label: label.to_string(),
                children: render_value(value),
            })
            .collect(),
    }
}
