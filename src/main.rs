//! Jokebox - local joke box with remote fetching and persisted collections
//!
//! Main entry point for the CLI.
//!
//! # Overview
//!
//! This binary crate provides the command-line front-end for jokebox. It
//! initializes:
//! - Logging infrastructure (daily-rotating file logs, console in debug mode)
//! - Configuration loading ([`ConfigManager`])
//! - Session state ([`StateManager`] - selection + display state machine)
//! - The persisted joke store ([`JokeStore`])
//!
//! # Execution Flow
//!
//! 1. Parse CLI arguments
//! 2. Load `Jokebox Config.yaml` from the data directory
//! 3. Initialize logging → <data dir>/logs/jokebox.<date>
//! 4. Seed session state from config, then apply per-invocation overrides
//! 5. Open the joke store and dispatch the subcommand
//!
//! # Data Directory
//!
//! Defaults to `Jokebox Data/` (override with `--data-dir` or
//! `JOKEBOX_DATA_DIR`), holding:
//! - `Jokebox Config.yaml`: provider URL, default selection, debug mode
//! - `custom_jokes.json`: custom jokes grouped by language
//! - `favorite_jokes.json`: the favorites list
//! - `logs/`: rotating log files

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use jokebox::models::{Category, is_valid_language_code};
use jokebox::{APP_NAME, ConfigManager, DeliveryService, JokeStore, StateManager, VERSION};

#[derive(Parser, Debug)]
#[command(name = "jokebox", version, about = "Fetch, store, and favorite short jokes")]
struct Cli {
    /// Directory holding the config file and persisted jokes
    #[arg(long, env = "JOKEBOX_DATA_DIR", default_value = "Jokebox Data")]
    data_dir: String,

    /// Override the active language for this invocation (2-3 letter code)
    #[arg(long, env = "JOKEBOX_LANG")]
    language: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and print a joke for the active selection
    Tell {
        /// Provider category, or "custom" for locally stored jokes
        #[arg(long)]
        category: Option<String>,
    },
    /// Store a custom joke under the active language
    Add {
        /// The joke text
        text: String,
    },
    /// Manage favorite jokes
    Fav(FavCommand),
}

#[derive(Args, Debug)]
struct FavCommand {
    #[command(subcommand)]
    command: FavSubcommand,
}

#[derive(Subcommand, Debug)]
enum FavSubcommand {
    /// List favorites with their indices
    List,
    /// Add a joke text to the favorites list
    Add { text: String },
    /// Remove the favorite at the given index (as shown by `fav list`)
    Remove { index: usize },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_manager = ConfigManager::new(&cli.data_dir)?;
    let user_config = config_manager.load_user_config()?;

    // File logs always; console logs only in debug mode so command output
    // stays clean.
    let log_dir = config_manager.config_dir().join("logs");
    let _guard = jokebox::logging::setup_logging(
        &log_dir,
        APP_NAME,
        user_config.settings.debug_mode,
        user_config.settings.debug_mode,
    )?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let state = StateManager::new();
    state.load_from_user_config(&user_config);

    // Per-invocation selection overrides, validated at this boundary
    if let Some(language) = &cli.language {
        if !is_valid_language_code(language) {
            bail!("invalid language code: {language:?} (expected 2-3 lowercase letters)");
        }
        state.set_language(language.clone());
    }

    let mut store = JokeStore::open(&cli.data_dir)?;

    match cli.command {
        Command::Tell { category } => {
            if let Some(category) = category {
                state.set_category(Category::parse(&category));
            }

            let delivery = DeliveryService::new(&user_config.settings.provider_url)?;
            let selection = state.read(|s| s.selection.clone());

            state.begin_request();
            let result = delivery
                .request_joke(&selection, &store, &mut rand::rng())
                .await;
            state.finish_request(&result);

            // The state holds whatever the display surface should show,
            // placeholder messages included.
            if let Some(text) = state.read(|s| s.current_text.clone()) {
                println!("{}", text);
            }
        }
        Command::Add { text } => {
            let text = text.trim();
            if text.is_empty() {
                bail!("joke text is empty");
            }
            let language = state.read(|s| s.selection.language.clone());
            store.add_custom_joke(&language, text)?;
            println!(
                "Added custom joke for '{}' ({} stored)",
                language,
                store.custom_for(&language).len()
            );
        }
        Command::Fav(fav) => match fav.command {
            FavSubcommand::List => {
                if store.favorites().is_empty() {
                    println!("No favorite jokes yet.");
                } else {
                    for (index, joke) in store.favorites().iter().enumerate() {
                        println!("{:3}  {}", index, joke);
                    }
                }
            }
            FavSubcommand::Add { text } => {
                let text = text.trim();
                if text.is_empty() {
                    bail!("joke text is empty");
                }
                if store.add_favorite(text)? {
                    println!("Added favorite ({} total)", store.favorites().len());
                } else {
                    println!("Already in favorites.");
                }
            }
            FavSubcommand::Remove { index } => {
                let removed = store.remove_favorite_at(index)?;
                println!("Removed favorite: {}", removed);
            }
        },
    }

    Ok(())
}
