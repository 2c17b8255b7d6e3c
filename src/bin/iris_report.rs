use anyhow::{Context, Result};
use blooming_insights::{load_dataset, report};

/// Print the console report without opening the gallery window.
fn main() -> Result<()> {
    env_logger::init();

    let dataset = load_dataset().context("loading bundled Iris dataset")?;
    print!("{}", report::render(&dataset)?);
    Ok(())
}
