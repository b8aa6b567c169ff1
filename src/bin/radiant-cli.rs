use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use radiant_client::params::{
    DEFAULT_DMINT_FORMAT, DEFAULT_FEE_BLOCKS, DEFAULT_MIN_BALANCE, DEFAULT_PAGE_LIMIT,
};
use radiant_client::{ClientConfig, ClientError, DEFAULT_BASE_URL, RadiantClient};
use reqwest::Method;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "radiant-cli",
    version,
    about = "Small async CLI for querying the Radiant blockchain API",
    after_help = "Exit status: 0 on success, 3 when the API answers with an error status, \
                  4 on timeout, 1 on any other failure."
)]
struct Cli {
    /// Base URL for the API.
    #[arg(long, env = "RADIANT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "RADIANT_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Access token sent as `Authorization: Bearer <token>`.
    #[arg(long, env = "RADIANT_ACCESS_TOKEN")]
    access_token: Option<String>,

    /// Extra header in form name=value. Repeat as needed.
    #[arg(long = "header", value_name = "NAME=VALUE")]
    header: Vec<String>,

    /// Emit compact JSON instead of pretty-printed output.
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List catalog operation ids.
    Operations {
        /// Filter operations by substring match on operation id (case-insensitive).
        #[arg(long)]
        filter: Option<String>,
    },
    /// Call an endpoint by operation id.
    Call(CallArgs),
    /// Send a raw HTTP request using method + path.
    Request(RequestArgs),
    /// Show blockchain status.
    Chain,
    /// Show the balance of an address.
    Balance {
        address: String,
    },
    /// Show a Glyph token by reference.
    Token {
        /// Token reference (`txid_vout`).
        token_ref: String,
    },
    /// Show Glyph tokens held by an address.
    Tokens {
        address: String,

        /// Maximum number of tokens listed.
        #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u32,
    },
    /// Estimate the fee rate for a confirmation target.
    Fee {
        /// Confirmation target in blocks.
        #[arg(long, default_value_t = DEFAULT_FEE_BLOCKS)]
        blocks: u32,
    },
    /// List active dMint contracts.
    Dmint {
        /// Output format requested from the server.
        #[arg(long, default_value = DEFAULT_DMINT_FORMAT)]
        format: String,
    },
    /// Check whether an address holds enough of a token to pass a gate.
    Access {
        address: String,

        /// Token reference (`txid_vout`).
        token_ref: String,

        /// Minimum balance required.
        #[arg(long, default_value_t = DEFAULT_MIN_BALANCE)]
        min_balance: u64,
    },
    /// Check the API's backend health.
    Health,
}

#[derive(Debug, Args)]
struct CallArgs {
    /// Operation id (for example: getBalance).
    operation_id: String,

    /// Path parameter in form key=value. Repeat as needed.
    #[arg(long = "path-param", value_name = "KEY=VALUE")]
    path_param: Vec<String>,

    /// Query parameter in form key=value. Repeat as needed.
    #[arg(long = "query", value_name = "KEY=VALUE")]
    query: Vec<String>,

    #[command(flatten)]
    body: BodyInput,
}

#[derive(Debug, Args)]
struct RequestArgs {
    /// HTTP method (GET, POST, ...).
    method: String,

    /// Request path relative to the base URL (for example: /wave/stats).
    path: String,

    /// Query parameter in form key=value. Repeat as needed.
    #[arg(long = "query", value_name = "KEY=VALUE")]
    query: Vec<String>,

    #[command(flatten)]
    body: BodyInput,
}

#[derive(Debug, Args)]
struct BodyInput {
    /// JSON request body literal.
    #[arg(long, conflicts_with = "body_file")]
    body_json: Option<String>,

    /// Path to a file containing a JSON request body.
    #[arg(long, value_name = "PATH", conflicts_with = "body_json")]
    body_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error);
            ExitCode::from(exit_code(&error))
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    // `operations` is metadata-only; it does not require constructing an HTTP client.
    if let Command::Operations { filter } = &cli.command {
        print_operations(filter.as_deref());
        return Ok(());
    }

    let config = build_config(cli).context("invalid client configuration")?;
    let client = RadiantClient::with_config(&config)
        .with_context(|| format!("failed to create client with base URL '{}'", cli.base_url))?;

    let output = match &cli.command {
        Command::Operations { .. } => unreachable!("handled above"),
        Command::Call(args) => call_operation(&client, args)
            .await
            .with_context(|| format!("operation call failed: '{}'", args.operation_id))?,
        Command::Request(args) => send_request(&client, args)
            .await
            .with_context(|| format!("request failed: {} {}", args.method, args.path))?,
        Command::Chain => client
            .get_chain_info()
            .await
            .context("failed to fetch chain info")?,
        Command::Balance { address } => client
            .get_balance(address)
            .await
            .with_context(|| format!("failed to fetch balance of '{address}'"))?,
        Command::Token { token_ref } => client
            .get_token(token_ref)
            .await
            .with_context(|| format!("failed to fetch token '{token_ref}'"))?,
        Command::Tokens { address, limit } => client
            .list_tokens(address, *limit)
            .await
            .with_context(|| format!("failed to list tokens of '{address}'"))?,
        Command::Fee { blocks } => client
            .estimate_fee(*blocks)
            .await
            .with_context(|| format!("failed to estimate fee for {blocks} blocks"))?,
        Command::Dmint { format } => client
            .get_dmint_contracts(format)
            .await
            .context("failed to list dMint contracts")?,
        Command::Access {
            address,
            token_ref,
            min_balance,
        } => client
            .check_token_access(address, token_ref, *min_balance)
            .await
            .with_context(|| format!("failed to check access of '{address}' to '{token_ref}'"))?,
        Command::Health => client.get_health().await.context("health check failed")?,
    };

    print_json(&output, cli.compact).context("failed to print JSON output")?;
    Ok(())
}

/// Prints a failure to stderr, with the server's status and detail on their own
/// lines when the API rejected the request.
fn report(error: &anyhow::Error) {
    eprintln!("error: {error:#}");
    if let Some(ClientError::Api { status, detail }) = error.downcast_ref::<ClientError>() {
        eprintln!("  status: {status}");
        eprintln!("  detail: {detail}");
    }
}

fn exit_code(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<ClientError>() {
        Some(ClientError::Api { .. }) => 3,
        Some(client_error) if client_error.is_timeout() => 4,
        _ => 1,
    }
}

fn build_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = ClientConfig::new(cli.base_url.clone())
        .with_timeout(Duration::from_secs(cli.timeout_secs));

    for (name, value) in parse_pairs(&cli.header, "--header")? {
        config = config.with_header(name, value);
    }

    if let Some(token) = &cli.access_token {
        config = config.with_bearer_token(token);
    }

    Ok(config)
}

/// Prints the operation catalog.
///
/// When `filter` is provided, only operation ids containing that substring are shown.
fn print_operations(filter: Option<&str>) {
    let filter = filter.map(str::to_ascii_lowercase);

    let operations: Vec<_> = RadiantClient::operations()
        .iter()
        .filter(|operation| {
            filter
                .as_ref()
                .is_none_or(|needle| operation.operation_id.to_ascii_lowercase().contains(needle))
        })
        .collect();

    let (operation_id_width, method_width) =
        operations
            .iter()
            .fold((0usize, 0usize), |(id_max, method_max), operation| {
                (
                    id_max.max(operation.operation_id.len()),
                    method_max.max(operation.method.len()),
                )
            });

    for operation in operations {
        println!(
            "{:<operation_id_width$}  {:<method_width$}  {}",
            operation.operation_id, operation.method, operation.path_template
        );
    }
}

async fn call_operation(client: &RadiantClient, args: &CallArgs) -> Result<Value> {
    // Owned pairs first, then borrowed as `&str` for the client call.
    let path_params = parse_pairs(&args.path_param, "--path-param")
        .context("failed to parse --path-param arguments")?;
    let query = parse_pairs(&args.query, "--query").context("failed to parse --query arguments")?;
    let body = parse_body(&args.body).context("failed to parse request body input")?;

    let borrowed_path: Vec<(&str, &str)> = path_params
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    let borrowed_query: Vec<(&str, &str)> = query
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    let value = client
        .call_operation(&args.operation_id, &borrowed_path, &borrowed_query, body)
        .await
        .with_context(|| format!("operation '{}' returned an error", args.operation_id))?;
    Ok(value)
}

async fn send_request(client: &RadiantClient, args: &RequestArgs) -> Result<Value> {
    // Validate method eagerly so CLI errors are explicit before any network call.
    let method = Method::from_str(&args.method.to_ascii_uppercase())
        .with_context(|| format!("invalid HTTP method '{}'", args.method))?;
    let query = parse_pairs(&args.query, "--query").context("failed to parse --query arguments")?;
    let body = parse_body(&args.body).context("failed to parse request body input")?;

    let value = client
        .request(method, &args.path, &query, body)
        .await
        .with_context(|| format!("HTTP request failed for path '{}'", args.path))?;
    Ok(value)
}

/// Parses repeated `key=value` arguments into owned key/value pairs.
fn parse_pairs(values: &[String], flag_name: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::with_capacity(values.len());
    for item in values {
        let Some((key, value)) = item.split_once('=') else {
            bail!("invalid {flag_name} value '{item}': expected key=value");
        };
        if key.is_empty() {
            bail!("invalid {flag_name} value '{item}': empty key");
        }
        pairs.push((key.to_owned(), value.to_owned()));
    }
    Ok(pairs)
}

/// Parses an optional JSON body from inline text or a file path.
fn parse_body(body: &BodyInput) -> Result<Option<Value>> {
    match (&body.body_json, &body.body_file) {
        (Some(raw), None) => serde_json::from_str(raw)
            .context("failed to parse JSON from --body-json")
            .map(Some),
        (None, Some(path)) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read --body-file '{}'", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| {
                    format!("failed to parse JSON in --body-file '{}'", path.display())
                })
                .map(Some)
        }
        (None, None) => Ok(None),
        (Some(_), Some(_)) => bail!("use only one of --body-json or --body-file"),
    }
}

fn print_json(value: &Value, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("failed to render JSON")?;
    println!("{rendered}");
    Ok(())
}
