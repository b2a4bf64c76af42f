//! Depth-first walk over drill-down links.

use std::collections::HashSet;

use anyhow::Result;
use hyperwalk::{LoadOutcome, Mount};
use hyperwalk::scene::{SceneNode, links};

use super::{Page, Session, format_loaded};

pub async fn run(session: &Session, location: &str, follow: usize) -> Result<()> {
    let page = session.view();
    let visited = walk(&page, location, follow, |location, outcome, nodes| {
        println!("{}", format_loaded(location, outcome, nodes, session.json)?);
        Ok(())
    })
    .await?;

    log::info!("visited {} locations", visited.len());
    if !session.json {
        println!("history:");
        for address in page.history.entries() {
            println!("  {address}");
        }
    }
    Ok(())
}

/// Load `start`, then up to `follow` further links, each taken from the most
/// recently loaded page first. Returns the visited locations in load order.
pub async fn walk(
    page: &Page,
    start: &str,
    follow: usize,
    mut on_page: impl FnMut(&str, LoadOutcome, &[SceneNode]) -> Result<()>,
) -> Result<Vec<String>> {
    let mut pending = vec![start.to_string()];
    let mut seen = HashSet::new();
    let mut visited = Vec::new();

    while let Some(location) = pending.pop() {
        if visited.len() > follow {
            break;
        }
        if !seen.insert(location.clone()) {
            continue;
        }
        let outcome = page.view.load(location.as_str()).await;
        let nodes = page.mount.nodes();
        on_page(&location, outcome, &nodes)?;
        pending.extend(links(&nodes).into_iter().rev().map(str::to_string));
        visited.push(location);
    }
    Ok(visited)
}

#[cfg(test)]
mod tests {
    use hyperwalk::{ContentView, MemoryHistory, MemoryMount, StaticFetcher};
    use serde_json::json;

    use super::*;

    fn page(fetcher: StaticFetcher) -> Page {
        let mount = MemoryMount::new();
        let history = MemoryHistory::new();
        Page {
            view: ContentView::new(mount.clone(), fetcher, history.clone()),
            mount,
            history,
        }
    }

    fn cluster_api() -> StaticFetcher {
        StaticFetcher::new()
            .with_json(
                "/api/cluster/1",
                json!({
                    "name": "cluster-a",
                    "hosts": [
                        {"name": "host01", "url": "/api/host/1"},
                        {"name": "host02", "url": "/api/host/2"}
                    ]
                }),
            )
            .with_json(
                "/api/host/1",
                json!({"name": "host01", "cluster": {"name": "cluster-a", "url": "/api/cluster/1"}, "nic": {"url": "/api/nic/7"}}),
            )
            .with_json("/api/nic/7", json!({"name": "eth0"}))
            .with_json("/api/host/2", json!({"name": "host02"}))
    }

    #[tokio::test]
    async fn follows_links_depth_first_without_revisiting() {
        let page = page(cluster_api());
        let mut printed = Vec::new();

        let visited = walk(&page, "/api/cluster/1", 10, |location, outcome, _| {
            printed.push((location.to_string(), outcome));
            Ok(())
        })
        .await
        .unwrap();

        assert_eq!(
            visited,
            vec!["/api/cluster/1", "/api/host/1", "/api/nic/7", "/api/host/2"]
        );
        assert!(printed.iter().all(|(_, outcome)| *outcome == LoadOutcome::Rendered));
        assert_eq!(
            page.history.entries(),
            vec!["#/api/cluster/1", "#/api/host/1", "#/api/nic/7", "#/api/host/2"]
        );
    }

    #[tokio::test]
    async fn stops_after_follow_limit() {
        let page = page(cluster_api());
        let visited = walk(&page, "/api/cluster/1", 1, |_, _, _| Ok(())).await.unwrap();
        assert_eq!(visited, vec!["/api/cluster/1", "/api/host/1"]);
    }

    #[tokio::test]
    async fn failed_pages_are_reported_and_end_the_branch() {
        let page = page(StaticFetcher::new().with_json(
            "/api/",
            json!([{"name": "gone", "url": "/api/missing"}]),
        ));
        let mut outcomes = Vec::new();
        walk(&page, "/api/", 5, |location, outcome, _| {
            outcomes.push((location.to_string(), outcome));
            Ok(())
        })
        .await
        .unwrap();
        assert_eq!(
            outcomes,
            vec![
                ("/api/".to_string(), LoadOutcome::Rendered),
                ("/api/missing".to_string(), LoadOutcome::Failed),
            ]
        );
    }
}
