//! Print blockchain status with the blocking client.
//!
//! Run:
//! `cargo run --example blocking_chain_info`
//!
//! Optional env vars:
//! - `RADIANT_BASE_URL` (defaults to `http://localhost:3080/api`)

use radiant_client::BlockingRadiantClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = match std::env::var("RADIANT_BASE_URL") {
        Ok(url) => BlockingRadiantClient::new(url)?,
        Err(_) => BlockingRadiantClient::from_default_server()?,
    };

    let info = client.get_chain_info()?;
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
