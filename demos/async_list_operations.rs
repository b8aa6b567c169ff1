//! List the endpoint catalog and call one operation by id.
//!
//! Run:
//! `cargo run --example async_list_operations`

use radiant_client::RadiantClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    for op in RadiantClient::operations() {
        println!("{} {} {}", op.operation_id, op.method, op.path_template);
    }

    let client = RadiantClient::from_default_server()?;
    let stats = client.call_operation("getWaveStats", &[], &[], None).await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
