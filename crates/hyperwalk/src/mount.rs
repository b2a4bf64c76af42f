//! Mount points: where a view attaches its rendered tree.

use std::cell::RefCell;
use std::rc::Rc;

use hyperwalk_scene::{MenuItem, SceneNode};

/// A UI container exclusively owned by one view.
///
/// Methods take `&self`; implementations use interior mutability because the
/// mount is shared between the view and the event handlers it spawns.
pub trait Mount {
    /// Remove everything attached. Must be a no-op on an empty mount.
    fn clear(&self);

    /// Attach nodes after whatever is already there.
    fn append(&self, nodes: Vec<SceneNode>);

    /// Copy of the attached tree.
    fn nodes(&self) -> Vec<SceneNode>;
}

/// Container for navigation menu items.
pub trait MenuMount {
    /// Replace all items.
    fn set_items(&self, items: Vec<MenuItem>);

    /// Show that the menu could not be loaded.
    fn show_error(&self, message: String);

    fn items(&self) -> Vec<MenuItem>;
}

/// In-memory mount used by the CLI and by tests.
#[derive(Clone, Default)]
pub struct MemoryMount {
    nodes: Rc<RefCell<Vec<SceneNode>>>,
}

impl MemoryMount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }
}

impl Mount for MemoryMount {
    fn clear(&self) {
        self.nodes.borrow_mut().clear();
    }

    fn append(&self, nodes: Vec<SceneNode>) {
        self.nodes.borrow_mut().extend(nodes);
    }

    fn nodes(&self) -> Vec<SceneNode> {
        self.nodes.borrow().clone()
    }
}

#[derive(Clone, Default)]
pub struct MemoryMenuMount {
    items: Rc<RefCell<Vec<MenuItem>>>,
    error: Rc<RefCell<Option<String>>>,
}

impl MemoryMenuMount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }
}

impl MenuMount for MemoryMenuMount {
    fn set_items(&self, items: Vec<MenuItem>) {
        *self.error.borrow_mut() = None;
        *self.items.borrow_mut() = items;
    }

    fn show_error(&self, message: String) {
        *self.error.borrow_mut() = Some(message);
    }

    fn items(&self) -> Vec<MenuItem> {
        self.items.borrow().clone()
    }
}
