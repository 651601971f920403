//! Prints the currently trending beers.
//!
//! Usage: `UNTAPPD_API_KEY=... cargo run -p trending-demo`

use untappd_client::{GeoFilter, TrendingAge, TrendingKind, UntappdClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("UNTAPPD_API_KEY")
        .map_err(|_| anyhow::anyhow!("set UNTAPPD_API_KEY to your Untappd API key"))?;

    let client = UntappdClient::builder(api_key).build()?;
    let trending = client
        .public_trending(
            TrendingKind::All,
            None,
            TrendingAge::Daily,
            GeoFilter::default(),
        )
        .await?;

    let beers = trending.value()["results"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    for entry in beers {
        if let Some(name) = entry["beer_name"].as_str() {
            println!("{name}");
        }
    }

    Ok(())
}
