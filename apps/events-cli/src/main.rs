//! Events CLI
//!
//! Browse and submit events against a running events API.

use clap::{Parser, Subcommand};
use core_config::FromEnv;
use core_config::tracing::{init_cli_tracing, install_color_eyre};
use events_client::{
    CATEGORY_SUGGESTIONS, ClientConfig, ClientError, EventSubmission, EventsClient, ImageFile,
    group_by_location,
};
use eyre::{Result, WrapErr};
use std::path::PathBuf;
use tracing::{debug, warn};

mod output;

#[derive(Parser)]
#[command(name = "events-cli")]
#[command(about = "Browse and create events on the events board")]
struct Cli {
    /// Base URL of the events API (overrides EVENTS_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log HTTP traffic to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all events
    List {
        /// Group events under their location
        #[arg(short, long)]
        group_by_location: bool,

        /// Print raw JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show one event by id
    Show {
        id: String,

        /// Print raw JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Create a new event
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// Event date, e.g. 2025-06-01
        #[arg(long)]
        date: String,

        /// Start time, e.g. 19:30
        #[arg(long)]
        time: String,

        #[arg(long)]
        location: String,

        /// One of the suggested categories (see `categories`) or any other label
        #[arg(long)]
        category: String,

        /// Maximum number of participants
        #[arg(long)]
        total_participants: i64,

        /// Picture to upload with the event
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Print the suggested categories
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_cli_tracing(cli.verbose);

    if let Commands::Categories = cli.command {
        for category in CATEGORY_SUGGESTIONS {
            println!("{category}");
        }
        return Ok(());
    }

    let config = match cli.api_url {
        Some(api_url) => ClientConfig { api_url },
        None => ClientConfig::from_env()?,
    };
    let client = EventsClient::from_config(&config)?;
    debug!(api_url = %client.base_url(), "Using events API");

    match cli.command {
        Commands::List {
            group_by_location: grouped,
            json,
        } => {
            let events = client.list_events().await.wrap_err("Failed to list events")?;
            match (json, grouped) {
                (true, true) => {
                    println!("{}", serde_json::to_string_pretty(&group_by_location(&events))?)
                }
                (true, false) => println!("{}", serde_json::to_string_pretty(&events)?),
                (false, true) => println!("{}", output::grouped_list(&group_by_location(&events))),
                (false, false) => println!("{}", output::event_list(&events)),
            }
        }

        Commands::Show { id, json } => {
            let event = client
                .get_event(&id)
                .await
                .wrap_err_with(|| format!("Failed to fetch event {id}"))?
                .ok_or_else(|| eyre::eyre!("Event {id} not found"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", output::event_detail(&event));
            }
        }

        Commands::Create {
            title,
            description,
            date,
            time,
            location,
            category,
            total_participants,
            image,
        } => {
            if !CATEGORY_SUGGESTIONS.contains(&category.as_str()) {
                warn!(category = %category, "Category is not one of the suggestions");
            }

            let image = match image {
                Some(path) => Some(
                    ImageFile::from_path(&path)
                        .await
                        .wrap_err_with(|| format!("Failed to read image {}", path.display()))?,
                ),
                None => None,
            };

            let submission = EventSubmission {
                title,
                description,
                date,
                time,
                location,
                category,
                total_participants: Some(total_participants),
                image,
            };

            let missing = submission.missing_fields();
            if !missing.is_empty() {
                return Err(ClientError::Incomplete(missing).into());
            }

            let ack = client
                .create_event(&submission)
                .await
                .wrap_err("Failed to create event")?;
            println!("{ack}");
        }

        Commands::Categories => {}
    }

    Ok(())
}
