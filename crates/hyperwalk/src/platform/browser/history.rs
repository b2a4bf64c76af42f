use zoon::{Closure, JsCast, JsValue, Task, history, window};

use crate::history::{History, location_from_address};
use crate::view::ContentView;

/// `history.pushState` with the address as the new URL fragment.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl BrowserHistory {
    pub fn new() -> Self {
        Self
    }
}

impl History for BrowserHistory {
    fn push(&self, address: &str) {
        if let Err(error) = history().push_state_with_url(&JsValue::NULL, "", Some(address)) {
            tracing::error!("pushState({address}) failed: {error:?}");
        }
    }
}

/// Current `location.hash`, empty when unavailable.
pub fn current_address() -> String {
    window().location().hash().unwrap_or_default()
}

/// Restores the view on back/forward until dropped.
pub struct PopstateListener {
    closure: Closure<dyn Fn()>,
}

impl PopstateListener {
    pub fn attach(view: &ContentView) -> Result<Self, JsValue> {
        let closure: Closure<dyn Fn()> = Closure::new({
            let view = view.clone();
            move || {
                let address = current_address();
                let Some(location) = location_from_address(view.address_prefix(), &address)
                else {
                    tracing::debug!("popstate to {address:?} carries no location");
                    view.reset();
                    return;
                };
                let view = view.clone();
                let location = location.to_string();
                Task::start(async move {
                    view.restore(location).await;
                });
            }
        });
        window()
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        Ok(Self { closure })
    }
}

impl Drop for PopstateListener {
    fn drop(&mut self) {
        let _ = window().remove_event_listener_with_callback(
            "popstate",
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
