//! Schema-agnostic renderer and navigator for hyperlinked JSON APIs.
//!
//! A [`ContentView`] turns any JSON document into a tree of cards, lists and
//! text leaves, and follows the links that records carry in their `url`
//! field. A [`NavigationMenu`] lists the top-level collections advertised by
//! the API entry point.

pub mod config;
pub mod content;
pub mod fetch;
pub mod history;
pub mod menu;
pub mod mount;
pub mod platform;
pub mod render;
pub mod testing;
pub mod view;

pub use config::{ConfigError, ViewerConfig};
pub use content::{ContentValue, Record, Scalar};
pub use fetch::{FetchError, Fetcher, StaticFetcher};
pub use history::{History, MemoryHistory};
pub use menu::{MenuEntry, MenuError, NavigationMenu};
pub use mount::{MemoryMenuMount, MemoryMount, MenuMount, Mount};
pub use view::{ContentView, LoadOutcome};

pub use hyperwalk_scene as scene;
pub use tracing;

#[cfg(feature = "browser")]
pub use hyperwalk_renderer_zoon as renderer;
#[cfg(feature = "browser")]
pub use zoon;
