//! Command-line front end for the Textpresso query reformatter.
//!
//! This is the presentation boundary: it collects the free-text query, the
//! two credentials, and the envelope options, rejects blank input before
//! invoking the core, and renders the result (or a readable failure) to the
//! terminal.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use textpresso_reformat::{Config, QueryReformatter, ReformatOptions, config::api};

#[derive(Parser, Debug)]
#[command(name = "textpresso-reformat")]
#[command(about = "Reformat a free-text plant genetics question into a Textpresso search request")]
#[command(version)]
struct Cli {
    /// Free-text query (e.g. "maize plant height")
    query: String,

    /// Textpresso access token, copied into the request envelope
    #[arg(long, env = "TEXTPRESSO_TOKEN", hide_env_values = true)]
    textpresso_token: String,

    /// API key for the model endpoint
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    model_key: String,

    /// Return the fulltext and abstract of matched documents
    #[arg(long)]
    include_fulltext: bool,

    /// Return the text of all sentences (restricted tokens only)
    #[arg(long)]
    include_all_sentences: bool,

    /// Return the text of each matched sentence (sentence searches only)
    #[arg(long)]
    include_match_sentences: bool,

    /// Number of results to request
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(i64).range(1..=200))]
    count: i64,

    /// Model identifier sent to the chat endpoint
    #[arg(long, default_value = api::DEFAULT_MODEL)]
    model: String,

    /// Base URL of the OpenAI-compatible chat endpoint
    #[arg(long, env = "MODEL_API_URL", default_value = api::BASE_URL)]
    api_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    if cli.query.trim().is_empty() {
        anyhow::bail!("please enter a query");
    }
    if cli.model_key.trim().is_empty() {
        anyhow::bail!("please provide a model API key");
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        model = %cli.model,
        count = cli.count,
        "reformatting query"
    );

    let reformatter = QueryReformatter::new(Config::new(cli.api_url, cli.model));

    let options = ReformatOptions {
        include_fulltext: cli.include_fulltext,
        include_all_sentences: cli.include_all_sentences,
        include_match_sentences: cli.include_match_sentences,
        count: cli.count,
    };

    match reformatter
        .reformat(&cli.query, &cli.textpresso_token, &cli.model_key, &options)
        .await
    {
        Ok(request) => {
            println!("{}", serde_json::to_string_pretty(&request)?);
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "reformat failed");
            Err(anyhow::anyhow!(err.to_user_message()))
        }
    }
}
