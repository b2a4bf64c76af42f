//! Plain-text outline of a scene, used by the CLI and in tests.
//!
//! ```text
//! [cluster-a] -> /api/cluster/11
//!   hosts:
//!     - [host01] -> /api/host/1
//!         label: web
//! ```

use super::{MenuItem, SceneNode};

const INDENT: &str = "  ";

/// Render a forest as an indented outline, one line per visible element.
pub fn outline(nodes: &[SceneNode]) -> String {
    let mut out = String::new();
    for line in forest_lines(nodes) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Render menu items as `Title -> location` lines.
pub fn outline_menu(items: &[MenuItem]) -> String {
    items
        .iter()
        .map(|item| format!("{} -> {}\n", item.title, item.location))
        .collect()
}

fn forest_lines(nodes: &[SceneNode]) -> Vec<String> {
    nodes.iter().flat_map(node_lines).collect()
}

fn node_lines(node: &SceneNode) -> Vec<String> {
    match node {
        SceneNode::Text { text } => vec![text.clone()],
        SceneNode::Error(notice) => {
            vec![format!("! failed to load {}: {}", notice.location, notice.message)]
        }
        SceneNode::Card(card) => {
            let mut header = format!("[{}]", card.title.text.as_deref().unwrap_or_default());
            if let Some(location) = &card.title.location {
                header.push_str(" -> ");
                header.push_str(location);
            }
            let mut lines = vec![header];
            for section in &card.sections {
                let children = forest_lines(&section.children);
                let inline = matches!(section.children.as_slice(), [SceneNode::Text { .. }])
                    && children.len() == 1;
                if inline {
                    lines.push(format!("{INDENT}{}: {}", section.label, children[0]));
                } else {
                    lines.push(format!("{INDENT}{}:", section.label));
                    lines.extend(
                        children
                            .into_iter()
                            .map(|line| format!("{INDENT}{INDENT}{line}")),
                    );
                }
            }
            lines
        }
        SceneNode::List { items } => {
            let mut lines = Vec::new();
            for item in items {
                let mut item_lines = forest_lines(&item.children).into_iter();
                match item_lines.next() {
                    Some(first) => lines.push(format!("- {first}")),
                    None => lines.push("-".to_string()),
                }
                lines.extend(item_lines.map(|line| format!("{INDENT}{line}")));
            }
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, ErrorNotice, ListItem, Section, Title};

    #[test]
    fn nested_card_outline() {
        let host = SceneNode::Card(Card {
            title: Title {
                text: Some("host01".to_string()),
                location: Some("/api/host/1".to_string()),
            },
            sections: vec![Section {
                label: "label".to_string(),
                children: vec![SceneNode::text("web")],
            }],
        });
        let cluster = SceneNode::Card(Card {
            title: Title {
                text: Some("cluster-a".to_string()),
                location: None,
            },
            sections: vec![Section {
                label: "hosts".to_string(),
                children: vec![SceneNode::List {
                    items: vec![ListItem { children: vec![host] }],
                }],
            }],
        });

        assert_eq!(
            outline(&[cluster]),
            "[cluster-a]\n  hosts:\n    - [host01] -> /api/host/1\n        label: web\n"
        );
    }

    #[test]
    fn empty_title_and_empty_item() {
        let nodes = [
            SceneNode::Card(Card::default()),
            SceneNode::List {
                items: vec![ListItem::default()],
            },
        ];
        assert_eq!(outline(&nodes), "[]\n-\n");
    }

    #[test]
    fn error_and_menu_lines() {
        let error = SceneNode::Error(ErrorNotice {
            location: "/api/host/9".to_string(),
            message: "HTTP 404".to_string(),
        });
        assert_eq!(outline(&[error]), "! failed to load /api/host/9: HTTP 404\n");

        let items = [
            MenuItem { title: "Clusters".to_string(), location: "/api/cluster".to_string() },
            MenuItem { title: "Hosts".to_string(), location: "/api/host".to_string() },
        ];
        assert_eq!(outline_menu(&items), "Clusters -> /api/cluster\nHosts -> /api/host\n");
    }
}
