//! linux.do Collector CLI
//!
//! Local execution entry point for collection runs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use collector::{
    error::Result, models::Config, pipeline, services::ForumClient, storage::LocalStorage,
    utils::daily,
};

/// collector - linux.do Discourse data collection tool
#[derive(Parser, Debug)]
#[command(
    name = "collector",
    version,
    about = "Collects topics and site metadata from the linux.do Discourse forum"
)]

struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Output directory (overrides `[output] dir` from the config)
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full collection pipeline
    Collect,

    /// Probe the known API endpoints and report reachability
    Probe,

    /// Fetch one topic's detail and write it to a file
    Topic {
        /// Topic identifier
        id: u64,
    },

    /// Run one search and write the raw payload to a file
    Search {
        /// Search query
        query: String,

        /// Zero-based result page
        #[arg(long, default_value_t = 0)]
        page: u32,
    },

    /// Create the next numbered scratch file for today
    Scratch {
        /// File extension for the scratch file
        #[arg(long, default_value = "md")]
        ext: String,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    if let Some(dir) = cli.output {
        config.output.dir = dir;
    }

    match cli.command {
        Command::Collect => {
            config.validate()?;
            let client = ForumClient::new(&config.client)?;
            let storage = LocalStorage::new(&config.output.dir);
            pipeline::run_collector(&config, &client, &storage).await?;
        }

        Command::Probe => {
            config.validate()?;
            let client = ForumClient::new(&config.client)?;
            let available = client.explore_available_apis().await;
            log::info!("{} endpoints available:", available.len());
            for endpoint in &available {
                log::info!("    {endpoint}");
            }
        }

        Command::Topic { id } => {
            config.validate()?;
            let client = ForumClient::new(&config.client)?;
            let storage = LocalStorage::new(&config.output.dir);

            let detail = client.get_topic_posts(id).await?;
            let name = format!("linux_do_topic_{id}.json");
            storage.write_json(&name, &detail).await?;
            log::info!("Saved {name}");
        }

        Command::Search { query, page } => {
            config.validate()?;
            let client = ForumClient::new(&config.client)?;
            let storage = LocalStorage::new(&config.output.dir);

            let results = client.search_topics(&query, page).await?;
            storage
                .write_json(pipeline::SEARCH_RESULTS_FILE, &results)
                .await?;
            log::info!("Saved {}", pipeline::SEARCH_RESULTS_FILE);
        }

        Command::Scratch { ext } => {
            let dir = PathBuf::from(&config.output.dir);
            let today = chrono::Local::now().date_naive();
            let path = daily::create_daily_file(&dir, today, &ext)?;
            log::info!("Created {}", path.display());
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("Config OK");
            log::info!("    base_url: {}", config.client.base_url);
            log::info!("    user_agent: {}", config.client.user_agent);
            log::info!("    timeout_secs: {}", config.client.timeout_secs);
            log::info!("    output dir: {}", config.output.dir);
        }
    }

    Ok(())
}
