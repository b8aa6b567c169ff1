//! Search Glyph tokens with the async `RadiantClient`.
//!
//! Run:
//! `cargo run --example async_token_search -- <query>`
//!
//! Optional env vars:
//! - `RADIANT_BASE_URL` (defaults to `http://localhost:3080/api`)
//! - `RADIANT_SEARCH_LIMIT` (defaults to `10`)

use radiant_client::RadiantClient;
use radiant_client::params::TokenSearch;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let query = std::env::args().nth(1).unwrap_or_else(|| "rxd".to_owned());
    let limit = std::env::var("RADIANT_SEARCH_LIMIT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(10);

    let client = match std::env::var("RADIANT_BASE_URL") {
        Ok(url) => RadiantClient::new(url)?,
        Err(_) => RadiantClient::from_default_server()?,
    };

    let results = client
        .search_tokens(&TokenSearch::new(query).limit(limit))
        .await?;

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
