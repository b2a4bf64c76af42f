//! Menu bootstrap and drill-down navigation against an in-memory API.

use std::pin::pin;

use futures_util::poll;
use hyperwalk::scene::{SceneNode, links, outline};
use hyperwalk::testing::GatedFetcher;
use hyperwalk::{
    ContentView, FetchError, LoadOutcome, MemoryHistory, MemoryMenuMount, MemoryMount, Mount,
    NavigationMenu, StaticFetcher,
};
use serde_json::json;

fn inventory() -> StaticFetcher {
    StaticFetcher::new()
        .with_json(
            "/api/",
            json!({"clusters": "/api/clusters", "hosts": "/api/hosts"}),
        )
        .with_json(
            "/api/clusters",
            json!({
                "count": 1,
                "next": null,
                "results": [
                    {"id": 11, "name": "cluster-a", "url": "/api/clusters/11", "hosts": []}
                ]
            }),
        )
        .with_json(
            "/api/clusters/11",
            json!({
                "id": 11,
                "name": "cluster-a",
                "url": "/api/clusters/11",
                "hosts": [
                    {"id": 1, "name": "host01", "url": "/api/hosts/1", "label": "web-1"}
                ]
            }),
        )
        .with_json(
            "/api/hosts/1",
            json!({"id": 1, "name": "host01", "ip": "10.0.0.1", "enabled": false, "tags": []}),
        )
}

#[tokio::test]
async fn menu_then_drill_down() {
    let fetcher = inventory();
    let content = MemoryMount::new();
    let history = MemoryHistory::new();
    let view = ContentView::new(content.clone(), fetcher.clone(), history.clone());
    let items = MemoryMenuMount::new();
    let menu = NavigationMenu::new(view.clone(), items.clone(), fetcher.clone(), "/api/");

    menu.init().await.unwrap();
    let titles: Vec<_> = menu.items().into_iter().map(|item| item.title).collect();
    assert_eq!(titles, vec!["Clusters", "Hosts"]);

    assert_eq!(menu.activate("/api/clusters").await, LoadOutcome::Rendered);
    assert_eq!(links(&content.nodes()), vec!["/api/clusters/11"]);

    assert_eq!(view.load("/api/clusters/11").await, LoadOutcome::Rendered);
    assert_eq!(
        outline(&content.nodes()),
        "[cluster-a] -> /api/clusters/11\n  hosts:\n    - [web-1] -> /api/hosts/1\n"
    );

    assert_eq!(view.load("/api/hosts/1").await, LoadOutcome::Rendered);
    assert_eq!(
        outline(&content.nodes()),
        "[host01]\n  ip: 10.0.0.1\n  enabled: false\n"
    );

    assert_eq!(
        history.entries(),
        vec!["#/api/clusters", "#/api/clusters/11", "#/api/hosts/1"]
    );
    assert_eq!(
        fetcher.requests(),
        vec!["/api/", "/api/clusters", "/api/clusters/11", "/api/hosts/1"]
    );
}

#[tokio::test]
async fn back_navigation_refetches_without_new_history() {
    let fetcher = inventory();
    let content = MemoryMount::new();
    let history = MemoryHistory::new();
    let view = ContentView::new(content.clone(), fetcher.clone(), history.clone());

    view.load("/api/clusters/11").await;
    view.load("/api/hosts/1").await;
    assert_eq!(view.restore("/api/clusters/11").await, LoadOutcome::Rendered);

    assert_eq!(history.entries().len(), 2);
    assert_eq!(view.current_location().as_deref(), Some("/api/clusters/11"));
    assert_eq!(fetcher.requests().len(), 3);
    assert!(content.nodes()[0].as_card().is_some());
}

#[tokio::test]
async fn menu_click_during_slow_load_wins() {
    let fetcher = GatedFetcher::new();
    let content = MemoryMount::new();
    let view = ContentView::new(content.clone(), fetcher.clone(), MemoryHistory::new());

    let mut slow = pin!(view.load("/api/clusters"));
    assert!(poll!(slow.as_mut()).is_pending());
    let mut fast = pin!(view.load("/api/hosts"));
    assert!(poll!(fast.as_mut()).is_pending());
    assert_eq!(fetcher.waiting("/api/clusters"), 1);

    assert!(fetcher.resolve("/api/hosts", json!({"results": ["host01"]})));
    assert_eq!(fast.await, LoadOutcome::Rendered);

    assert!(fetcher.fail(
        "/api/clusters",
        FetchError::Status {
            location: "/api/clusters".to_string(),
            status: 500,
        },
    ));
    assert_eq!(slow.await, LoadOutcome::Superseded);

    assert_eq!(outline(&content.nodes()), "- host01\n");
}

#[tokio::test]
async fn unreachable_entry_point_leaves_content_usable() {
    let fetcher = StaticFetcher::new()
        .with_error(
            "/api/",
            FetchError::Transport {
                location: "/api/".to_string(),
                message: "connection reset".to_string(),
            },
        )
        .with_json("/api/hosts", json!([]));
    let content = MemoryMount::new();
    let view = ContentView::new(content.clone(), fetcher.clone(), MemoryHistory::new());
    let items = MemoryMenuMount::new();
    let menu = NavigationMenu::new(view.clone(), items.clone(), fetcher, "/api/");

    assert!(menu.init().await.is_err());
    assert_eq!(
        items.error().as_deref(),
        Some("request to /api/ failed: connection reset")
    );

    assert_eq!(view.load("/api/hosts").await, LoadOutcome::Rendered);
    assert_eq!(content.nodes(), vec![SceneNode::List { items: vec![] }]);
}
