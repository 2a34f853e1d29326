pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use barkeep_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use clap::{Parser, Subcommand};

use commands::{CommandResult, EXIT_CONFIG, EXIT_OK};

#[derive(Debug, Parser)]
#[command(
    name = "barkeep",
    about = "Beverage recommendation CLI for the Indian market",
    long_about = "Filter, score, and rank a beverage catalog against a budget, state, and \
                  occasion, with curated or generated pairings and explanations.",
    after_help = "Examples:\n  barkeep recommend --budget 2000 --drink-type whiskey --state Delhi\n  barkeep recommend --budget 600 --drink-type beer --state Goa --quick\n  barkeep drink whiskey_001\n  barkeep catalog --drink-type gin --max-price 2000\n  barkeep config"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a barkeep.toml config file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Override the logging level")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Recommend drinks for a budget, state, and occasion")]
    Recommend(commands::recommend::RecommendArgs),
    #[command(about = "Show one drink with pairings, similar items, and availability")]
    Drink(commands::drink::DrinkArgs),
    #[command(about = "List catalog entries with optional type, state, and price filters")]
    Catalog(commands::catalog::CatalogArgs),
    #[command(
        about = "Inspect effective configuration values with source attribution and redaction"
    )]
    Config,
}

fn init_logging(config: &AppConfig) {
    use barkeep_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    let result = dispatch(cli).await;

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

async fn dispatch(cli: Cli) -> CommandResult {
    // Config inspection renders its own load failures inline.
    if matches!(cli.command, Command::Config) {
        return CommandResult {
            exit_code: EXIT_OK,
            output: commands::config::run(cli.config.as_deref()),
        };
    }

    let options = LoadOptions {
        config_path: cli.config.clone(),
        require_file: cli.config.is_some(),
        overrides: ConfigOverrides { log_level: cli.log_level.clone(), ..Default::default() },
    };
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "barkeep",
                "config_validation",
                error.to_string(),
                EXIT_CONFIG,
            );
        }
    };
    init_logging(&config);

    match cli.command {
        Command::Recommend(args) => commands::recommend::run(&config, args).await,
        Command::Drink(args) => commands::drink::run(&config, args),
        Command::Catalog(args) => commands::catalog::run(&config, args),
        Command::Config => CommandResult {
            exit_code: EXIT_OK,
            output: commands::config::run(cli.config.as_deref()),
        },
    }
}
