use clap::{Parser, Subcommand};
use roblox_api_args::json::{ResultOptions, create_result};
use roblox_api_args::{AllowListConfig, EndpointCatalog, Result, cdn, parse_arguments};

use anyhow::{Context, anyhow, bail};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roblox-api-args")]
#[command(about = "Validate Roblox API call arguments and shape JSON responses", long_about = None)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate argument tokens against an endpoint and print them as JSON.
    Parse {
        #[arg(long)]
        endpoints: String,

        #[arg(long)]
        endpoint: String,

        #[arg(long)]
        allow_list: Option<String>,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },

    /// Print a JSON document, optionally narrowed to one `->` path.
    Extract {
        #[arg(long)]
        input: String,

        #[arg(long)]
        key: Option<String>,

        #[arg(long)]
        pretty: bool,
    },

    /// Print whether a URL points at the Roblox CDN.
    CheckUrl { url: String },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Parse {
            endpoints,
            endpoint,
            allow_list,
            tokens,
        } => {
            // 1) Load endpoint definitions + allow-list once.
            let catalog = EndpointCatalog::from_path(&endpoints)?;
            let spec = catalog
                .get(&endpoint)
                .ok_or_else(|| anyhow!("endpoint {} not found in {}", endpoint, endpoints))?;
            let config = match &allow_list {
                Some(path) => AllowListConfig::from_path(path)?,
                None => AllowListConfig::default(),
            };

            // 2) Validate.
            debug!(endpoint = %endpoint, tokens = tokens.len(), "parsing arguments");
            let parsed = match parse_arguments(spec, &tokens, &config) {
                Ok(parsed) => parsed,
                Err(e) => bail!("{} [{}: {}]", e, e.message_key(), e.params().join(", ")),
            };

            println!("{}", serde_json::to_string(&parsed)?);
        }
        Commands::Extract { input, key, pretty } => {
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("read json file {}", input))?;
            let value: serde_json::Value =
                serde_json::from_str(&text).with_context(|| format!("parse json file {}", input))?;

            let options = ResultOptions {
                pretty,
                json_key: key,
            };
            info!(input = %input, json_key = ?options.json_key, "extracting");
            println!("{}", create_result(&value, &options)?);
        }
        Commands::CheckUrl { url } => {
            println!("{}", cdn::is_roblox_cdn_url(&url));
        }
    }

    Ok(())
}
