use anyhow::{Context, Result};
use hyperwalk::scene::outline_menu;
use hyperwalk::{MemoryMenuMount, MenuMount, NavigationMenu};

use super::Session;

pub async fn run(session: &Session) -> Result<()> {
    let page = session.view();
    let items = MemoryMenuMount::new();
    let menu = NavigationMenu::new(
        page.view,
        items.clone(),
        session.fetcher.clone(),
        session.entry_point.clone(),
    );
    menu.init()
        .await
        .with_context(|| format!("reading the menu from {}", session.entry_point))?;

    if session.json {
        println!("{}", serde_json::to_string_pretty(&items.items())?);
    } else {
        print!("{}", outline_menu(&items.items()));
    }
    Ok(())
}
