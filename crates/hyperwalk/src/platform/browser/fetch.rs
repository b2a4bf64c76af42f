use futures_util::FutureExt;
use futures_util::future::LocalBoxFuture;
use serde_json::Value as JsonValue;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::fetch::{FetchError, Fetcher};

/// `GET` through the page's `fetch`, resolved against the page origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFetcher;

impl BrowserFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl Fetcher for BrowserFetcher {
    fn fetch(&self, location: &str) -> LocalBoxFuture<'static, Result<JsonValue, FetchError>> {
        let location = location.to_string();
        async move { get_json(&location).await }.boxed_local()
    }
}

async fn get_json(location: &str) -> Result<JsonValue, FetchError> {
    let transport = |error: JsValue| FetchError::Transport {
        location: location.to_string(),
        message: format!("{error:?}"),
    };

    let headers = Headers::new().map_err(transport)?;
    headers
        .set("Accept", "application/json")
        .map_err(transport)?;
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_headers(&headers);
    let request = Request::new_with_str_and_init(location, &init).map_err(transport)?;

    let window = web_sys::window().ok_or_else(|| FetchError::Transport {
        location: location.to_string(),
        message: "no window".to_string(),
    })?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;

    if !response.ok() {
        return Err(FetchError::Status {
            location: location.to_string(),
            status: response.status(),
        });
    }

    // Parsed from text so that object members keep their delivered order.
    let body = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?
        .as_string()
        .unwrap_or_default();
    serde_json::from_str(&body).map_err(|error| FetchError::Decode {
        location: location.to_string(),
        message: error.to_string(),
    })
}
