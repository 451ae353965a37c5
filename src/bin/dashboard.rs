// Prints the text dashboard for the published datasets over their full date range.
// Set RUST_LOG (e.g. debug) to change the log level; it defaults to info.
use bikeshare::{render, BikeShare, BikeShareError};
use log::warn;

#[tokio::main]
async fn main() -> Result<(), BikeShareError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let bike_share = BikeShare::new();
    let datasets = bike_share.datasets().await?;

    let Some(criteria) = datasets.default_criteria()? else {
        warn!("The daily dataset has no rows, nothing to report");
        return Ok(());
    };

    let snapshot = datasets.filter(&criteria)?.snapshot()?;
    println!("{}", render(&snapshot));
    Ok(())
}
