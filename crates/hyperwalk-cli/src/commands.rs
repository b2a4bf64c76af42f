pub mod menu;
pub mod show;
pub mod walk;

use anyhow::{Context, Result};
use hyperwalk::platform::cli::{ReqwestFetcher, Url};
use hyperwalk::scene::{SceneNode, outline};
use hyperwalk::{ContentView, LoadOutcome, MemoryHistory, MemoryMount};
use serde::Serialize;

use crate::config::CliConfig;

/// Everything a command needs to talk to the API and print results.
pub struct Session {
    pub fetcher: ReqwestFetcher,
    pub entry_point: String,
    pub address_prefix: String,
    pub json: bool,
}

impl Session {
    pub fn new(config: &CliConfig, json: bool) -> Result<Self> {
        let base = Url::parse(&config.viewer.api_root)
            .with_context(|| format!("api_root `{}` is not an absolute URL", config.viewer.api_root))?;
        let fetcher =
            ReqwestFetcher::new(base, config.timeout()).context("building the HTTP client")?;
        Ok(Self {
            fetcher,
            entry_point: config.viewer.api_root.clone(),
            address_prefix: config.viewer.address_prefix.clone(),
            json,
        })
    }

    /// A fresh content view over in-memory mount and history.
    pub fn view(&self) -> Page {
        let mount = MemoryMount::new();
        let history = MemoryHistory::new();
        let view = ContentView::with_address_prefix(
            self.address_prefix.clone(),
            mount.clone(),
            self.fetcher.clone(),
            history.clone(),
        );
        Page {
            view,
            mount,
            history,
        }
    }
}

pub struct Page {
    pub view: ContentView,
    pub mount: MemoryMount,
    pub history: MemoryHistory,
}

#[derive(Serialize)]
struct Loaded<'a> {
    location: &'a str,
    outcome: &'static str,
    nodes: &'a [SceneNode],
}

fn outcome_name(outcome: LoadOutcome) -> &'static str {
    match outcome {
        LoadOutcome::Rendered => "rendered",
        LoadOutcome::Failed => "failed",
        LoadOutcome::Superseded => "superseded",
    }
}

/// Text printed for one loaded location.
pub fn format_loaded(
    location: &str,
    outcome: LoadOutcome,
    nodes: &[SceneNode],
    json: bool,
) -> Result<String> {
    if json {
        let loaded = Loaded {
            location,
            outcome: outcome_name(outcome),
            nodes,
        };
        return Ok(serde_json::to_string_pretty(&loaded)?);
    }
    Ok(format!("== {location} ==\n{}", outline(nodes)))
}
