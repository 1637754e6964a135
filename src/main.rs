use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use lending_bot::application::errors::LendingError;
use lending_bot::application::messaging::CommandDispatcher;
use lending_bot::domain::traits::StoreFactory;
use lending_bot::infrastructure::adapters::{ConsoleAdapter, MattermostAdapter};
use lending_bot::infrastructure::config::Config;
use lending_bot::infrastructure::database::{self, SqliteStoreFactory};
use lending_bot::infrastructure::storage::MemoryStore;

#[derive(Parser)]
#[command(name = "lending-bot")]
#[command(about = "Slash command tracker for shared umbrellas and chargers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Slash command token (overrides config and MM_TOKEN)
    #[arg(short, long)]
    token: Option<String>,

    /// Keep inventory in memory, seeded from config (dev mode)
    #[arg(long)]
    memory: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the slash command webhook
    Serve,
    /// Run commands from stdin as the given user
    Console {
        #[arg(short, long, default_value = "console")]
        user: String,
    },
    /// Provision the items listed in the config
    Seed,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve => load_config(&cli.config, cli.token).and_then(|config| serve(config, cli.memory)),
        Commands::Console { user } => {
            load_config(&cli.config, cli.token).and_then(|config| console(config, cli.memory, &user))
        }
        Commands::Seed => load_config(&cli.config, cli.token).and_then(seed),
        Commands::Version => {
            println!("lending-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: &str, token_override: Option<String>) -> Result<Config, LendingError> {
    let mut config = if std::path::Path::new(path).exists() {
        Config::load(path)?.with_env()
    } else {
        tracing::warn!("Config {} not found, using defaults", path);
        Config::load_env()
    };

    if let Some(token) = token_override {
        config.security.token = token;
    }
    config.validate()?;

    if config.security.token.is_empty() {
        tracing::warn!("No slash command token configured; set MM_TOKEN or security.token");
    }
    Ok(config)
}

fn open_stores(config: &Config, memory: bool) -> Result<Arc<dyn StoreFactory>, LendingError> {
    if memory {
        let store = MemoryStore::new();
        let mut handle = store.open()?;
        database::seed_items(handle.as_mut(), &config.seed.items)?;
        tracing::info!("Using in-memory inventory with {} items", config.seed.items.len());
        return Ok(Arc::new(store));
    }

    let factory = SqliteStoreFactory::new(&config.database.path);
    // Fail fast on an unusable database instead of on the first request
    factory.open()?;
    tracing::info!("Using SQLite inventory at {}", factory.path().display());
    Ok(Arc::new(factory))
}

fn serve(config: Config, memory: bool) -> Result<(), LendingError> {
    tracing::info!("Starting {}", config.bot.name);

    let stores = open_stores(&config, memory)?;
    let dispatcher = Arc::new(CommandDispatcher::new(config.security.token.clone(), stores));
    let adapter = MattermostAdapter::new(dispatcher, config.server.command_path.clone());
    let addr = config.listen_addr()?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| LendingError::Internal(format!("Failed to start runtime: {}", e)))?;
    rt.block_on(adapter.serve(addr))
}

fn console(config: Config, memory: bool, user: &str) -> Result<(), LendingError> {
    let stores = open_stores(&config, memory)?;
    let dispatcher = Arc::new(CommandDispatcher::new(config.security.token.clone(), stores));
    ConsoleAdapter::new(dispatcher, user).run()
}

fn seed(config: Config) -> Result<(), LendingError> {
    let factory = SqliteStoreFactory::new(&config.database.path);
    let mut store = factory.open()?;
    let added = database::seed_items(store.as_mut(), &config.seed.items)?;
    tracing::info!(
        "Seeded {} new items ({} already present)",
        added,
        config.seed.items.len() - added
    );
    Ok(())
}

fn init_config() -> Result<(), LendingError> {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config)
        .map_err(|e| LendingError::Internal(format!("Failed to render config: {}", e)))?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
