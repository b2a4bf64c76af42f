//! Browser platform: zoon mounts, web fetch, `pushState` history and
//! back/forward handling.

mod fetch;
mod history;
mod logger;
mod mount;

pub use fetch::BrowserFetcher;
pub use history::{BrowserHistory, PopstateListener, current_address};
pub use logger::init_logger;
pub use mount::{MenuItems, SceneMount};

use std::rc::Rc;

use hyperwalk_renderer_zoon::NavigateHandler;
use zoon::Task;

use crate::history::location_from_address;
use crate::view::ContentView;

/// Handler for pressed links: starts a load on `view`.
pub fn navigate_handler(view: &ContentView) -> NavigateHandler {
    let view = view.clone();
    Rc::new(move |location: String| {
        let view = view.clone();
        Task::start(async move {
            view.load(location).await;
        });
    })
}

/// Load the location already in the address bar, if any, without pushing a
/// new history entry.
pub fn restore_from_address(view: &ContentView) {
    let address = current_address();
    let Some(location) = location_from_address(view.address_prefix(), &address) else {
        return;
    };
    tracing::info!("restoring {location} from the address bar");
    let view = view.clone();
    let location = location.to_string();
    Task::start(async move {
        view.restore(location).await;
    });
}
