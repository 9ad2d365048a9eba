use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use economic_client::catalog::{self, COLLECTIONS};
use economic_client::{
    ApiClient, ApiFamily, Credential, DEFAULT_PAGE_SIZE, DEFAULT_SKIP_PAGES, GRANT_TOKEN_ENV, Page,
    RequestBody, SECRET_TOKEN_ENV,
};
use reqwest::Method;
use serde_json::Value;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(
    name = "economic-cli",
    version,
    about = "Small async CLI for querying the e-conomic APIs"
)]
struct Cli {
    /// Application secret token (`X-AppSecretToken`).
    #[arg(long, env = SECRET_TOKEN_ENV, hide_env_values = true)]
    secret_token: Option<String>,

    /// Agreement grant token (`X-AgreementGrantToken`).
    #[arg(long, env = GRANT_TOKEN_ENV, hide_env_values = true)]
    grant_token: Option<String>,

    /// Send requests to this URL instead of the family's fixed base URL.
    #[arg(long, env = "ECONOMIC_BASE_URL")]
    base_url: Option<String>,

    /// Emit compact JSON instead of pretty-printed output.
    #[arg(long)]
    compact: bool,

    /// Log each request and response status to stderr.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the collections `list` understands.
    Collections {
        /// Filter by substring match on the collection name.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Fetch one page of a named collection.
    List(ListArgs),
    /// Send a raw HTTP request to either API family.
    Request(RequestArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Collection name, see `collections`.
    name: String,

    #[arg(long, default_value_t = DEFAULT_SKIP_PAGES)]
    skip_pages: u32,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u32,

    /// Open API version to use instead of the collection's default.
    #[arg(long)]
    version: Option<String>,
}

#[derive(Debug, Args)]
struct RequestArgs {
    /// API family: `rest` or `open`.
    family: ApiFamily,

    /// HTTP method (GET, POST, PUT, PATCH, DELETE).
    method: String,

    /// Path relative to the family root, query string included
    /// (for example: /customers?pagesize=10 or api/v22.0.0/projects).
    path: String,

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
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    // `collections` reads the static catalog only.
    if let Command::Collections { filter } = &cli.command {
        print_collections(filter.as_deref());
        return Ok(());
    }

    let credential = credential(&cli);
    let output = match &cli.command {
        Command::Collections { .. } => unreachable!("handled above"),
        Command::List(args) => list_collection(&cli, &credential, args)
            .await
            .with_context(|| format!("listing '{}' failed", args.name))?,
        Command::Request(args) => send_request(&cli, &credential, args)
            .await
            .with_context(|| format!("request failed: {} {}", args.method, args.path))?,
    };

    print_json(&output, cli.compact).context("failed to print JSON output")?;
    Ok(())
}

fn credential(cli: &Cli) -> Credential {
    let mut credential = Credential::default();
    if let Some(token) = &cli.secret_token {
        credential = credential.with_secret_token(token.clone());
    }
    if let Some(token) = &cli.grant_token {
        credential = credential.with_grant_token(token.clone());
    }
    credential
}

fn client(cli: &Cli, credential: &Credential, family: ApiFamily) -> Result<ApiClient> {
    let client = ApiClient::new(family, credential).context("failed to create client")?;
    match &cli.base_url {
        Some(url) => client
            .with_base_url(url)
            .with_context(|| format!("invalid base URL '{url}'")),
        None => Ok(client),
    }
}

fn print_collections(filter: Option<&str>) {
    let filter = filter.map(str::to_ascii_lowercase);

    let collections: Vec<_> = COLLECTIONS
        .iter()
        .filter(|collection| {
            filter
                .as_ref()
                .is_none_or(|needle| collection.name.contains(needle.as_str()))
        })
        .collect();

    let name_width = collections
        .iter()
        .map(|collection| collection.name.len())
        .max()
        .unwrap_or_default();

    for collection in collections {
        println!(
            "{:<name_width$}  {:<4}  {}",
            collection.name,
            collection.family,
            collection.paged_path(Page::default(), None)
        );
    }
}

async fn list_collection(cli: &Cli, credential: &Credential, args: &ListArgs) -> Result<Value> {
    let Some(collection) = catalog::find(&args.name) else {
        bail!("unknown collection '{}', run `collections` to see the options", args.name);
    };

    let path = collection.paged_path(
        Page::new(args.skip_pages, args.page_size),
        args.version.as_deref(),
    );
    let response = client(cli, credential, collection.family)?
        .get::<Value>(path.clone())
        .await
        .with_context(|| format!("GET {path} returned an error"))?;
    Ok(response.data)
}

async fn send_request(cli: &Cli, credential: &Credential, args: &RequestArgs) -> Result<Value> {
    // Validate method eagerly so CLI errors are explicit before any network call.
    let method = Method::from_str(&args.method.to_ascii_uppercase())
        .with_context(|| format!("invalid HTTP method '{}'", args.method))?;
    let body = parse_body(&args.body)
        .context("failed to parse request body input")?
        .map(RequestBody::Json);

    let response = client(cli, credential, args.family)?
        .request::<Value>(method, args.path.clone(), body)
        .await
        .with_context(|| format!("HTTP request failed for path '{}'", args.path))?;
    Ok(response.data)
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
