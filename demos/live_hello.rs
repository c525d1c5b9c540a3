//! Live Hey.Cafe example
//!
//! Pings the production API and, when `HEYCAFE_API_KEY` is set, fetches the
//! authenticated account's feed.
//!
//! Run with: cargo run --example live_hello

use anyhow::Context;
use heycafe::resources::FeedOptions;
use heycafe::{ClientConfig, HeyCafe};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Hey.Cafe Live Example");
    println!("=====================\n");

    let mut config = ClientConfig::default();
    if let Ok(key) = std::env::var("HEYCAFE_API_KEY") {
        config = config.with_api_key(key);
    }
    let hey = HeyCafe::new(config);

    let hello = hey.system().hello().await.context("system hello")?;
    println!("hello: {}", hello);

    if !hey.client().has_api_key() {
        println!("\nSet HEYCAFE_API_KEY to fetch your feed.");
        return Ok(());
    }

    let feed = hey
        .feed()
        .conversations(FeedOptions {
            count: Some(5),
            ..Default::default()
        })
        .await
        .context("feed conversations")?;
    println!("\nfeed:\n{:#}", feed);

    Ok(())
}
