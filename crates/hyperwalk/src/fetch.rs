//! Fetching resources by location.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures_util::FutureExt;
use futures_util::future::{self, LocalBoxFuture};
use serde_json::Value as JsonValue;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request to {location} failed: {message}")]
    Transport { location: String, message: String },
    #[error("{location} answered HTTP {status}")]
    Status { location: String, status: u16 },
    #[error("{location} did not return JSON: {message}")]
    Decode { location: String, message: String },
}

impl FetchError {
    /// What went wrong, without the location.
    pub fn reason(&self) -> String {
        match self {
            Self::Transport { message, .. } => message.clone(),
            Self::Status { status, .. } => format!("HTTP {status}"),
            Self::Decode { message, .. } => format!("invalid JSON: {message}"),
        }
    }

    pub fn location(&self) -> &str {
        match self {
            Self::Transport { location, .. }
            | Self::Status { location, .. }
            | Self::Decode { location, .. } => location,
        }
    }
}

/// Asynchronous `GET <location>` returning a decoded JSON body.
///
/// Futures are `!Send`: everything runs on the UI event loop.
pub trait Fetcher {
    fn fetch(&self, location: &str) -> LocalBoxFuture<'static, Result<JsonValue, FetchError>>;
}

/// Fixed responses keyed by location; unknown locations answer HTTP 404.
#[derive(Clone, Default)]
pub struct StaticFetcher {
    responses: Rc<RefCell<HashMap<String, Result<JsonValue, FetchError>>>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, location: impl Into<String>, body: JsonValue) -> Self {
        self.responses.borrow_mut().insert(location.into(), Ok(body));
        self
    }

    pub fn with_error(self, location: impl Into<String>, error: FetchError) -> Self {
        self.responses.borrow_mut().insert(location.into(), Err(error));
        self
    }

    /// Locations requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, location: &str) -> LocalBoxFuture<'static, Result<JsonValue, FetchError>> {
        self.requests.borrow_mut().push(location.to_string());
        let response = self
            .responses
            .borrow()
            .get(location)
            .cloned()
            .unwrap_or_else(|| {
                Err(FetchError::Status {
                    location: location.to_string(),
                    status: 404,
                })
            });
        future::ready(response).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn static_fetcher_answers_known_locations() {
        let fetcher = StaticFetcher::new().with_json("/api/", json!({"hosts": "/api/host"}));
        assert_eq!(fetcher.fetch("/api/").await, Ok(json!({"hosts": "/api/host"})));

        let missing = fetcher.fetch("/api/nope").await.unwrap_err();
        assert_eq!(missing.location(), "/api/nope");
        assert_eq!(missing.to_string(), "/api/nope answered HTTP 404");
        assert_eq!(missing.reason(), "HTTP 404");

        assert_eq!(fetcher.requests(), vec!["/api/", "/api/nope"]);
    }
}
