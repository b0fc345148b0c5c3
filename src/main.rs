use anyhow::{bail, Context, Result};
use reelscout_lib::{shared::utils::init_logger, MetadataClient};
use serde_json::json;

const USAGE: &str = "usage: reelscout <search|details|similar> <query|path|id> [country]";

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, target, country) = match args.as_slice() {
        [command, target] => (command.as_str(), target.as_str(), ""),
        [command, target, country] => (command.as_str(), target.as_str(), country.as_str()),
        _ => bail!(USAGE),
    };

    let client = MetadataClient::from_env().context("Failed to configure metadata client")?;

    let output = match command {
        "search" => json!(client.search(target, country).await),
        "details" => {
            let detail = client.get_streaming_details(target, country).await;
            json!({
                "offersByType": detail.grouped_offers(),
                "detail": detail,
            })
        }
        "similar" => json!(client.get_similar_titles(target, country).await),
        other => bail!("unknown command '{}'\n{}", other, USAGE),
    };

    client.shutdown();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
