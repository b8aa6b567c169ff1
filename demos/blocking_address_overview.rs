//! Balance, UTXOs and held tokens for one address.
//!
//! Run:
//! `cargo run --example blocking_address_overview -- <address>`
//!
//! Optional env vars:
//! - `RADIANT_BASE_URL` (defaults to `http://localhost:3080/api`)
//! - `RADIANT_ACCESS_TOKEN` (sent as a bearer token when set)

use radiant_client::params::DEFAULT_PAGE_LIMIT;
use radiant_client::{BlockingRadiantClient, ClientConfig, ClientError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(address) = std::env::args().nth(1) else {
        eprintln!("usage: blocking_address_overview <address>");
        std::process::exit(2);
    };

    let mut config = match std::env::var("RADIANT_BASE_URL") {
        Ok(url) => ClientConfig::new(url),
        Err(_) => ClientConfig::default(),
    };
    if let Ok(token) = std::env::var("RADIANT_ACCESS_TOKEN") {
        config = config.with_bearer_token(token);
    }
    let client = BlockingRadiantClient::with_config(&config)?;

    let balance = match client.get_balance(&address) {
        Ok(balance) => balance,
        Err(ClientError::Api { status, detail }) => {
            eprintln!("lookup failed ({status}): {detail}");
            std::process::exit(1);
        }
        Err(other) => return Err(other.into()),
    };
    println!("balance: {balance}");
    println!("utxos:   {}", client.get_utxos(&address)?);
    println!("tokens:  {}", client.list_tokens(&address, DEFAULT_PAGE_LIMIT)?);
    Ok(())
}
