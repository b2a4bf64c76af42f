//! Native platform: HTTP fetching through reqwest.

use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::LocalBoxFuture;
use reqwest::{Client, header};
use serde_json::Value as JsonValue;

use crate::fetch::{FetchError, Fetcher};

pub use reqwest::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolves locations against a base URL, so both absolute URLs and
/// server-relative paths such as `/api/host/1` work.
#[derive(Clone, Debug)]
pub struct ReqwestFetcher {
    client: Client,
    base: Url,
}

impl ReqwestFetcher {
    pub fn new(base: Url, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hyperwalk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn resolve(&self, location: &str) -> Result<Url, FetchError> {
        self.base.join(location).map_err(|error| FetchError::Transport {
            location: location.to_string(),
            message: format!("invalid location: {error}"),
        })
    }
}

impl Fetcher for ReqwestFetcher {
    fn fetch(&self, location: &str) -> LocalBoxFuture<'static, Result<JsonValue, FetchError>> {
        let client = self.client.clone();
        let location = location.to_string();
        let url = self.resolve(&location);
        async move {
            let url = url?;
            tracing::debug!("GET {url}");
            let transport = |error: reqwest::Error| FetchError::Transport {
                location: location.clone(),
                message: error.to_string(),
            };
            let response = client
                .get(url)
                .header(header::ACCEPT, "application/json")
                .send()
                .await
                .map_err(transport)?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    location,
                    status: status.as_u16(),
                });
            }
            let body = response.text().await.map_err(transport)?;
            serde_json::from_str(&body).map_err(|error| FetchError::Decode {
                location,
                message: error.to_string(),
            })
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Answer a single request with `status` and `body`, returning the base URL.
    async fn serve_once(status: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0_u8; 1024];
            let _ = socket.read(&mut request).await.unwrap();
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        Url::parse(&format!("http://{address}/api/")).unwrap()
    }

    #[tokio::test]
    async fn body_is_parsed_in_delivered_order() {
        let base = serve_once("200 OK", r#"{"zeta": 1, "alpha": {"name": "a"}}"#).await;
        let fetcher = ReqwestFetcher::new(base, DEFAULT_TIMEOUT).unwrap();

        let body = fetcher.fetch("/api/cluster/1").await.unwrap();
        let names: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let base = serve_once("200 OK", "<html></html>").await;
        let fetcher = ReqwestFetcher::new(base, DEFAULT_TIMEOUT).unwrap();

        let error = fetcher.fetch("/api/").await.unwrap_err();
        assert!(matches!(error, FetchError::Decode { ref location, .. } if location == "/api/"));
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let base = serve_once("503 Service Unavailable", "{}").await;
        let fetcher = ReqwestFetcher::new(base, DEFAULT_TIMEOUT).unwrap();

        let error = fetcher.fetch("/api/").await.unwrap_err();
        assert_eq!(error.reason(), "HTTP 503");
    }

    fn fetcher(base: &str) -> ReqwestFetcher {
        ReqwestFetcher::new(Url::parse(base).unwrap(), DEFAULT_TIMEOUT).unwrap()
    }

    #[test]
    fn server_relative_locations_replace_the_path() {
        let fetcher = fetcher("http://localhost:8000/api/");
        assert_eq!(
            fetcher.resolve("/api/host/1").unwrap().as_str(),
            "http://localhost:8000/api/host/1"
        );
        assert_eq!(
            fetcher.resolve("clusters").unwrap().as_str(),
            "http://localhost:8000/api/clusters"
        );
    }

    #[test]
    fn absolute_locations_are_kept() {
        let fetcher = fetcher("http://localhost:8000/api/");
        assert_eq!(
            fetcher.resolve("https://example.org/api/cluster/2/").unwrap().as_str(),
            "https://example.org/api/cluster/2/"
        );
    }
}
