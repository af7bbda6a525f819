use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use log::{ debug, info };

use componentgpt::GeneratorConfig;

mod cli;
use cli::{ commands, ui, ComponentGptCli, Commands };

#[tokio::main]
async fn main() {
    // Parse the command line arguments
    let cli = ComponentGptCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if let Err(e) = run(cli).await {
        ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: ComponentGptCli) -> Result<()> {
    // A missing .env file is fine
    if dotenv().is_ok() {
        debug!("Loaded environment variables from .env file");
    }

    let config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            GeneratorConfig::from_file(path)?
        }
        None => GeneratorConfig::default(),
    };

    // Handle commands
    match &cli.command {
        Commands::Generate { document, framework, api_key, output, codegen } => {
            commands::generate::execute(
                &config,
                document,
                framework.as_deref(),
                api_key.as_deref(),
                output.as_deref(),
                *codegen
            ).await?;
        }
        Commands::Normalize { document } => {
            commands::normalize::execute(&config, document)?;
        }
        Commands::SetApiKey { key } => {
            commands::api_key::execute(&config, key.as_deref()).await?;
        }
        Commands::Session { document } => {
            commands::session::execute(&config, document).await?;
        }
        Commands::Frameworks => {
            ui::print_header("Frameworks");
            for framework in ui::SUGGESTED_FRAMEWORKS {
                println!("  {}", framework);
            }
            ui::print_text(
                "Any other label is accepted as well; it is passed to the model verbatim."
            );
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };

    // Logs go to stderr so `session` output stays machine-readable
    env_logger::Builder::new().filter_level(level).target(env_logger::Target::Stderr).init();

    info!("Logger initialized with level: {}", log_level);
}
