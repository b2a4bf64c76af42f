//! Top-level navigation built from the API entry point.

use hyperwalk_scene::MenuItem;
use serde_json::Value as JsonValue;

use crate::fetch::{FetchError, Fetcher};
use crate::mount::MenuMount;
use crate::view::{ContentView, LoadOutcome};

#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("entry point {location} did not return an object of locations")]
    NotAnObject { location: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub name: String,
    pub location: String,
}

impl MenuEntry {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn to_item(&self) -> MenuItem {
        MenuItem {
            title: capitalize(&self.name),
            location: self.location.clone(),
        }
    }
}

/// Upper-case the first character, leave the rest alone.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Read the entry-point body: an object of display name to location.
///
/// Members whose value is not a string are skipped.
pub fn entries_from_json(location: &str, body: JsonValue) -> Result<Vec<MenuEntry>, MenuError> {
    let JsonValue::Object(members) = body else {
        return Err(MenuError::NotAnObject {
            location: location.to_string(),
        });
    };
    let entries = members
        .into_iter()
        .filter_map(|(name, value)| match value {
            JsonValue::String(target) => Some(MenuEntry::new(name, target)),
            other => {
                tracing::warn!("skipping menu entry `{name}`: expected a location, got {other}");
                None
            }
        })
        .collect();
    Ok(entries)
}

pub struct NavigationMenu {
    view: ContentView,
    mount: Box<dyn MenuMount>,
    fetcher: Box<dyn Fetcher>,
    entry_point: String,
}

impl NavigationMenu {
    pub fn new(
        view: ContentView,
        mount: impl MenuMount + 'static,
        fetcher: impl Fetcher + 'static,
        entry_point: impl Into<String>,
    ) -> Self {
        Self {
            view,
            mount: Box::new(mount),
            fetcher: Box::new(fetcher),
            entry_point: entry_point.into(),
        }
    }

    /// Fetch the entry point once and populate the menu.
    ///
    /// On failure the menu mount shows the error and stays empty; there is no
    /// retry.
    pub async fn init(&self) -> Result<(), MenuError> {
        let result = match self.fetcher.fetch(&self.entry_point).await {
            Ok(body) => entries_from_json(&self.entry_point, body),
            Err(error) => Err(error.into()),
        };
        match result {
            Ok(entries) => {
                tracing::debug!("menu has {} entries", entries.len());
                self.set_menu(&entries);
                Ok(())
            }
            Err(error) => {
                tracing::error!("navigation menu unavailable: {error}");
                self.mount.show_error(error.to_string());
                Err(error)
            }
        }
    }

    /// Replace the menu items, one per entry in delivered order.
    pub fn set_menu(&self, entries: &[MenuEntry]) {
        self.mount
            .set_items(entries.iter().map(MenuEntry::to_item).collect());
    }

    pub fn items(&self) -> Vec<MenuItem> {
        self.mount.items()
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    pub fn view(&self) -> &ContentView {
        &self.view
    }

    /// What a menu item does when pressed.
    pub async fn activate(&self, location: impl Into<String>) -> LoadOutcome {
        self.view.load(location).await
    }
}
