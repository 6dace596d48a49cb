mod platform;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use platform::{AppConfig, LogDestination, DEFAULT_CONFIG_FILE};

/// Browse a remote game catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "catalog", version, about)]
struct Cli {
    /// RON config file; missing means built-in defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Catalog endpoint, overriding the config file.
    #[arg(long)]
    base_url: Option<String>,

    /// Directory for persisted favorites, overriding the config file.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    log: LogDestination,

    /// Log at debug level instead of info.
    #[arg(short, long)]
    verbose: bool,

    /// Print the effective config as RON and exit.
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = AppConfig::load(&self.config)?;
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }
        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    fn printed_config(&self) -> anyhow::Result<String> {
        self.resolve_config()?.to_ron()
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging opens and truncates the log file, so it starts after this.
    if cli.print_config {
        println!("{}", cli.printed_config()?);
        return Ok(());
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    platform::initialize_logging(cli.log, level);

    let config = cli.resolve_config()?;
    platform::run_app(config)
}
