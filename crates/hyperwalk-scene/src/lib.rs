//! Scene tree for rendered API content.
//!
//! A scene is plain data: cards, lists, text leaves and error notices.
//! The content renderer in `hyperwalk` produces it, `hyperwalk-renderer-zoon`
//! turns it into DOM elements and the CLI prints it as an outline.

use serde::{Deserialize, Serialize};

pub mod outline;

pub use outline::{outline, outline_menu};

/// One node of a rendered tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneNode {
    /// A record: header with an optional link, body with labeled sections.
    Card(Card),
    /// A sequence: one item per element, in order.
    List { items: Vec<ListItem> },
    /// A scalar leaf.
    Text { text: String },
    /// A location that could not be loaded.
    Error(ErrorNotice),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: Title,
    pub sections: Vec<Section>,
}

/// Card header.
///
/// The header exists even without text so that a record carrying only a `url`
/// can still be followed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub text: Option<String>,
    /// Location loaded when the title is activated.
    pub location: Option<String>,
}

/// A labeled row inside a card body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub label: String,
    pub children: Vec<SceneNode>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub children: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorNotice {
    pub location: String,
    pub message: String,
}

/// Navigation menu entry as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub title: String,
    pub location: String,
}

impl SceneNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn as_card(&self) -> Option<&Card> {
        match self {
            Self::Card(card) => Some(card),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ListItem]> {
        match self {
            Self::List { items } => Some(items),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Number of nodes in this subtree, counting sections and list items.
    pub fn node_count(&self) -> usize {
        1 + match self {
            Self::Card(card) => card
                .sections
                .iter()
                .map(|section| 1 + count_nodes(&section.children))
                .sum(),
            Self::List { items } => items
                .iter()
                .map(|item| 1 + count_nodes(&item.children))
                .sum(),
            Self::Text { .. } | Self::Error(_) => 0,
        }
    }

    /// Followable locations in document order (depth-first, pre-order).
    pub fn links(&self) -> Vec<&str> {
        let mut links = Vec::new();
        self.collect_links(&mut links);
        links
    }

    fn collect_links<'a>(&'a self, links: &mut Vec<&'a str>) {
        match self {
            Self::Card(card) => {
                if let Some(location) = card.title.location.as_deref() {
                    links.push(location);
                }
                for section in &card.sections {
                    for child in &section.children {
                        child.collect_links(links);
                    }
                }
            }
            Self::List { items } => {
                for item in items {
                    for child in &item.children {
                        child.collect_links(links);
                    }
                }
            }
            Self::Text { .. } | Self::Error(_) => {}
        }
    }
}

impl Card {
    pub fn section(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.label == label)
    }

    pub fn section_labels(&self) -> Vec<&str> {
        self.sections
            .iter()
            .map(|section| section.label.as_str())
            .collect()
    }
}

/// Total node count of a forest.
pub fn count_nodes(nodes: &[SceneNode]) -> usize {
    nodes.iter().map(SceneNode::node_count).sum()
}

/// Followable locations of a forest in document order.
pub fn links(nodes: &[SceneNode]) -> Vec<&str> {
    nodes.iter().flat_map(SceneNode::links).collect()
}
