use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use modlist_resolver::{ModListConfig, ModListDocument, ModListService};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Resolve and inspect remote mod lists
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path (defaults to <config dir>/modlist-resolver/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// URL of the database document listing every mod list
    #[arg(long, env = "MODLIST_DATABASE_URL")]
    database_url: Option<String>,

    /// Base directory for local mod-list paths
    #[arg(long, env = "MODLIST_INSTALLER_DIR")]
    installer_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every mod-list URL known to the database
    Urls,
    /// Resolve a short name or URL to the URL that would be fetched
    Resolve { location: String },
    /// Load mod lists and print a summary of each
    Lists {
        /// Ignore previously loaded lists
        #[arg(long)]
        reload: bool,
        /// Load only these locations instead of every known list
        locations: Vec<String>,
    },
    /// Load a mod list from a path relative to the installer directory
    Local { path: PathBuf },
    /// Print a mod's descriptor as JSON
    Show { mod_id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays scriptable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = load_config(&args)?;
    let mut service =
        ModListService::new(&config).context("Failed to create mod list service")?;

    match args.command {
        Commands::Urls => {
            for url in service.database_urls().await? {
                println!("{url}");
            }
        }
        Commands::Resolve { location } => {
            println!("{}", service.resolve(&location).await?);
        }
        Commands::Lists { reload, locations } => {
            let explicit = (!locations.is_empty()).then_some(locations.as_slice());
            let documents = service.get_mod_lists(reload, explicit).await?;
            if explicit.is_none()
                && let Some(loaded_at) = service.cache().loaded_at()
            {
                tracing::info!("Mod lists loaded at {}", loaded_at.to_rfc3339());
            }
            for document in documents.iter() {
                print_summary(document);
            }
        }
        Commands::Local { path } => {
            let document = service.load_local(&path).await?;
            print_summary(&document);
            for entry in &document.entries {
                println!("  {}\t{}\t{}", entry.mod_id, entry.name, entry.version);
            }
        }
        Commands::Show { mod_id } => {
            service.get_mod_lists(false, None).await?;
            let Some(descriptor) = service.find_cached_mod(&mod_id) else {
                bail!("No mod with id '{}' in any known mod list", mod_id);
            };
            println!("{}", serde_json::to_string_pretty(descriptor)?);
        }
    }

    Ok(())
}

fn print_summary(document: &ModListDocument) {
    println!(
        "{}\t{}\t{} mods",
        document.list_id,
        document.list_name,
        document.entries.len()
    );
}

/// Merge the config file with command-line and environment overrides
fn load_config(args: &Args) -> Result<ModListConfig> {
    let config_path = args
        .config
        .clone()
        .or_else(|| ModListConfig::default_path().filter(|path| path.exists()));

    let mut config = match (config_path, &args.database_url) {
        (Some(path), _) => {
            tracing::info!("Using config file: {}", path.display());
            ModListConfig::from_toml_file(&path)?
        }
        (None, Some(url)) => ModListConfig::new(url.clone()),
        (None, None) => bail!(
            "No database URL configured. Pass --database-url, set MODLIST_DATABASE_URL, or create a config file"
        ),
    };

    if let Some(url) = &args.database_url {
        config.database_url = url.clone();
    }
    if let Some(dir) = &args.installer_dir {
        config.installer_dir = dir.clone();
    }

    config.validate()?;
    Ok(config)
}
