use hyperwalk_scene::{MenuItem, SceneNode};
use zoon::{Mutable, MutableVec};

use crate::mount::{MenuMount, Mount};

/// Mount backed by a `MutableVec` that a zoon scene pane renders.
#[derive(Clone, Default)]
pub struct SceneMount {
    nodes: MutableVec<SceneNode>,
}

impl SceneMount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for `hyperwalk_renderer_zoon::scene_pane`.
    pub fn nodes_vec(&self) -> MutableVec<SceneNode> {
        self.nodes.clone()
    }
}

impl Mount for SceneMount {
    fn clear(&self) {
        self.nodes.lock_mut().clear();
    }

    fn append(&self, nodes: Vec<SceneNode>) {
        let mut lock = self.nodes.lock_mut();
        for node in nodes {
            lock.push_cloned(node);
        }
    }

    fn nodes(&self) -> Vec<SceneNode> {
        self.nodes.lock_ref().to_vec()
    }
}

#[derive(Clone, Default)]
pub struct MenuItems {
    items: MutableVec<MenuItem>,
    error: Mutable<Option<String>>,
}

impl MenuItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items_vec(&self) -> MutableVec<MenuItem> {
        self.items.clone()
    }

    pub fn error(&self) -> Mutable<Option<String>> {
        self.error.clone()
    }
}

impl MenuMount for MenuItems {
    fn set_items(&self, items: Vec<MenuItem>) {
        self.error.set(None);
        self.items.lock_mut().replace_cloned(items);
    }

    fn show_error(&self, message: String) {
        self.error.set(Some(message));
    }

    fn items(&self) -> Vec<MenuItem> {
        self.items.lock_ref().to_vec()
    }
}
