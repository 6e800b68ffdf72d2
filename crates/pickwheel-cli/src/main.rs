use std::fs::{self, OpenOptions};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pickwheel_core::{AppConfig, Date};

mod commands;

#[derive(Parser)]
#[command(name = "pickwheel")]
#[command(author, version, about = "Snapping wheel pickers in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print the confirmed value as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Every picker side by side (default)
    Demo,
    /// Pick a date
    Date {
        /// Starting date (YYYY-MM-DD), today when omitted
        #[arg(long)]
        at: Option<Date>,
    },
    /// Pick a time of day
    Time {
        /// Use the 24-hour dial
        #[arg(long = "24h")]
        twenty_four: bool,
        /// Starting time ("HH:MM" or "HH:MM PM"), now when omitted
        #[arg(long)]
        at: Option<String>,
    },
    /// Pick one of ITEMS
    Pick {
        #[arg(required = true)]
        items: Vec<String>,
        /// Index of the initially selected item
        #[arg(short, long, default_value_t = 0)]
        index: usize,
    },
    /// Pick a number from a range
    Number {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        from: i64,
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        to: i64,
        /// Initial value, the start of the range when omitted
        #[arg(long, allow_negative_numbers = true)]
        initial: Option<i64>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration if none exists
    Init,
    /// Print the configuration file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    init_logging(&config);
    info!(config = %AppConfig::config_path().display(), "pickwheel starting");

    // Handle commands
    match cli.command {
        Some(Commands::Demo) | None => commands::demo::run(config),
        Some(Commands::Date { at }) => commands::pick::date(config, at, cli.json),
        Some(Commands::Time { twenty_four, at }) => {
            commands::pick::time(config, twenty_four, at.as_deref(), cli.json)
        }
        Some(Commands::Pick { items, index }) => commands::pick::items(config, items, index, cli.json),
        Some(Commands::Number { from, to, initial }) => {
            commands::pick::number(config, from, to, initial, cli.json)
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init => commands::config::init(),
            ConfigAction::Path => commands::config::path(),
        },
    }
}

/// Log to `<data_dir>/pickwheel.log`; the terminal belongs to the UI
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let log_file = fs::create_dir_all(config.data_dir()).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())
    });

    // Without a log file events are dropped
    let file_layer = log_file.ok().map(|file| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry().with(filter).with(file_layer).init();
}
