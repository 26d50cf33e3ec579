use anyhow::{Context, Result};
use catalog_core::{CatalogConfig, CatalogStore, ItemType};
use catalog_infrastructure::{ConfigService, FileSlotStorage, config_service::file_storage_for};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::add::{AddRequest, parse_item_type};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Browse and add items in the local item catalog", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding slot files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Slot key the collection is stored under
    #[arg(long, global = true)]
    slot: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every item, oldest first
    List,
    /// List items whose name, type, or description contains the query
    Search { query: String },
    /// Show one item in detail
    Show { id: String },
    /// Add a new item
    Add {
        #[arg(long)]
        name: String,
        #[arg(long = "type", value_parser = parse_item_type)]
        item_type: ItemType,
        #[arg(long, default_value = "")]
        description: String,
        /// Primary image; defaults to the first --image
        #[arg(long)]
        cover_image: Option<String>,
        /// Image reference (repeatable, at least one)
        #[arg(long = "image", required = true)]
        images: Vec<String>,
    },
    /// Clear the slot; the next run starts from the seed items
    Reset,
    /// List the valid item types
    Types,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Merges config file values with command-line overrides.
fn load_config(cli: &Cli) -> Result<CatalogConfig> {
    let service = match &cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()?,
    };
    let mut config = service
        .load()
        .with_context(|| format!("Failed to load {:?}", service.config_path()))?;

    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if let Some(slot) = &cli.slot {
        config.slot = slot.clone();
    }
    Ok(config)
}

fn open_store<'a>(
    storage: &'a FileSlotStorage,
    config: &CatalogConfig,
) -> CatalogStore<&'a FileSlotStorage> {
    CatalogStore::open_with_key(storage, config.slot.clone())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let storage = file_storage_for(&config)?;
    tracing::debug!(
        "[catalog] Using slot '{}' in {:?}",
        config.slot,
        storage.base_dir()
    );

    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Reset => commands::reset::run(&storage, &config.slot, &mut out)?,
        Commands::Types => commands::browse::types(&mut out)?,
        Commands::List => commands::browse::list(&open_store(&storage, &config), &mut out)?,
        Commands::Search { query } => {
            commands::browse::search(&open_store(&storage, &config), &query, &mut out)?
        }
        Commands::Show { id } => {
            commands::browse::show(&open_store(&storage, &config), &id, &mut out)?
        }
        Commands::Add {
            name,
            item_type,
            description,
            cover_image,
            images,
        } => {
            let request = AddRequest {
                name,
                item_type,
                description,
                cover_image,
                images,
            };
            let mut store = open_store(&storage, &config);
            commands::add::run(&mut store, request, &mut out)?
        }
    }

    Ok(())
}
