use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod cli;
mod core;
mod generators;
mod logging;
mod models;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, config_warnings) = Config::load();

    if args.no_color {
        console::set_colors_enabled(false);
    }

    let log_path = config.log_path();
    if let Err(e) = logging::init_logging(config.log_level, &log_path) {
        eprintln!("⚠️ Logging disabled ({}): {}", log_path.display(), e);
    }

    for warning in &config_warnings {
        log::warn!("{}", warning);
        eprintln!("⚠️ {}", warning);
    }

    log::info!("🔒 Starting passgen");
    log::debug!("Loaded config: {:?}", config);

    let result = match args.command {
        Some(CliCommand::Generate { length, numbers, no_numbers, symbols, no_symbols, count, copy }) => {
            cli::handlers::handle_generate(
                &config,
                length,
                cli::handlers::flag_override(numbers, no_numbers),
                cli::handlers::flag_override(symbols, no_symbols),
                count,
                copy,
                args.json,
            )
        }
        Some(CliCommand::Analyze { ref password }) => cli::handlers::handle_analyze(password, args.json),
        Some(CliCommand::Interactive) | None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                if let Err(e) = ctrlc::set_handler(move || {
                    log::info!("🔴 Ctrl+C received. Exiting menu...");
                    should_exit.store(true, Ordering::SeqCst);
                }) {
                    log::warn!("Failed to set Ctrl+C handler: {}", e);
                }
            }
            cli::menu::run_cli_menu(&config, should_exit)
        }
    };

    match result {
        Ok(()) => {
            log::info!("✅ passgen finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
