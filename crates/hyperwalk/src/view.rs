//! ContentView: one mount, one rendered tree, one navigation primitive.
//!
//! `load` clears the mount, pushes the location to history, fetches it and
//! renders the response. Every load takes the next generation number before
//! fetching; a response is rendered only while its generation is still the
//! latest, so overlapping loads always end with the most recent navigation on
//! screen.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use hyperwalk_scene::{ErrorNotice, SceneNode};

use crate::content::ContentValue;
use crate::fetch::Fetcher;
use crate::history::{DEFAULT_ADDRESS_PREFIX, History, address_for};
use crate::mount::Mount;
use crate::render::render_value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered,
    /// The fetch failed; an error notice is on the mount.
    Failed,
    /// A newer load started before this one finished; nothing was rendered.
    Superseded,
}

#[derive(Clone)]
pub struct ContentView {
    inner: Rc<ViewInner>,
}

struct ViewInner {
    mount: Box<dyn Mount>,
    fetcher: Box<dyn Fetcher>,
    history: Box<dyn History>,
    address_prefix: String,
    generation: Cell<u64>,
    current_location: RefCell<Option<String>>,
}

impl ContentView {
    /// Bind a view to its mount. History addresses use the `#` prefix.
    pub fn new(
        mount: impl Mount + 'static,
        fetcher: impl Fetcher + 'static,
        history: impl History + 'static,
    ) -> Self {
        Self::with_address_prefix(DEFAULT_ADDRESS_PREFIX, mount, fetcher, history)
    }

    pub fn with_address_prefix(
        address_prefix: impl Into<String>,
        mount: impl Mount + 'static,
        fetcher: impl Fetcher + 'static,
        history: impl History + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(ViewInner {
                mount: Box::new(mount),
                fetcher: Box::new(fetcher),
                history: Box::new(history),
                address_prefix: address_prefix.into(),
                generation: Cell::new(0),
                current_location: RefCell::new(None),
            }),
        }
    }

    /// Render `value` onto the mount, after anything already attached.
    pub fn render(&self, value: &ContentValue) {
        self.inner.mount.append(render_value(value));
    }

    pub fn clear(&self) {
        self.inner.mount.clear();
    }

    /// Navigate to `location`, recording it in history.
    pub async fn load(&self, location: impl Into<String>) -> LoadOutcome {
        self.navigate(location.into(), true).await
    }

    /// Navigate to `location` without touching history.
    ///
    /// Used for back/forward and for the location already in the address bar
    /// at startup.
    pub async fn restore(&self, location: impl Into<String>) -> LoadOutcome {
        self.navigate(location.into(), false).await
    }

    /// Back to the initial blank state: empties the mount, forgets the
    /// current location and supersedes any load still in flight.
    ///
    /// Used when history returns to an address that names no location.
    pub fn reset(&self) {
        self.inner.generation.set(self.inner.generation.get() + 1);
        *self.inner.current_location.borrow_mut() = None;
        self.clear();
    }

    /// Location of the most recent load or restore.
    pub fn current_location(&self) -> Option<String> {
        self.inner.current_location.borrow().clone()
    }

    pub fn generation(&self) -> u64 {
        self.inner.generation.get()
    }

    pub fn address_prefix(&self) -> &str {
        &self.inner.address_prefix
    }

    /// Copy of the tree currently on the mount.
    pub fn nodes(&self) -> Vec<SceneNode> {
        self.inner.mount.nodes()
    }

    async fn navigate(&self, location: String, push_history: bool) -> LoadOutcome {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        *self.inner.current_location.borrow_mut() = Some(location.clone());

        self.clear();
        if push_history {
            self.inner
                .history
                .push(&address_for(&self.inner.address_prefix, &location));
        }

        let response = self.inner.fetcher.fetch(&location).await;

        if self.inner.generation.get() != generation {
            tracing::debug!("dropping stale response for {location} (generation {generation})");
            return LoadOutcome::Superseded;
        }

        match response {
            Ok(body) => {
                tracing::debug!("loaded {location}: {body}");
                self.render(&ContentValue::from(body).unwrap_envelope());
                LoadOutcome::Rendered
            }
            Err(error) => {
                tracing::warn!("{error}");
                self.inner.mount.append(vec![SceneNode::Error(ErrorNotice {
                    message: error.reason(),
                    location,
                })]);
                LoadOutcome::Failed
            }
        }
    }
}
