use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use rust_passkeeper::cli::{self, handlers, Args, CliCommand};
use rust_passkeeper::{logging, Config};

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, warnings) = Config::load();
    logging::init(&config).context("Failed to initialise logging")?;
    for warning in &warnings {
        log::warn!("{}", warning);
    }

    log::info!("🔒 Starting PassKeeper");
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let locale = args.locale.unwrap_or(config.locale);

    match args.command.unwrap_or(CliCommand::Menu) {
        CliCommand::Generate { length, no_uppercase, no_lowercase, no_numbers, no_symbols, count } => {
            let options = handlers::resolve_generator_options(
                &config,
                length,
                no_uppercase,
                no_lowercase,
                no_numbers,
                no_symbols,
            );
            handlers::handle_generate(&options, count as usize, locale, args.json)?;
        }
        CliCommand::Strength { password } => {
            handlers::handle_strength(password, locale, args.json)?;
        }
        CliCommand::Menu => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("🔴 Ctrl+C received. Initiating shutdown...");
                    should_exit.store(true, Ordering::SeqCst);
                })
                .context("Failed to set Ctrl+C handler")?;
            }

            cli::menu::run_cli_menu(config, locale, should_exit)?;
        }
    }

    log::info!("✅ PassKeeper shutdown complete.");
    Ok(())
}
