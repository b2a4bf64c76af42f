use anyhow::{Result, bail};
use hyperwalk::{LoadOutcome, Mount};

use super::{Session, format_loaded};

pub async fn run(session: &Session, location: &str) -> Result<()> {
    let page = session.view();
    let outcome = page.view.load(location).await;
    println!(
        "{}",
        format_loaded(location, outcome, &page.mount.nodes(), session.json)?
    );
    if outcome == LoadOutcome::Failed {
        bail!("could not load {location}");
    }
    Ok(())
}
