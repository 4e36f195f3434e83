// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Specwright - a Gherkin-to-Playwright conversion service.
//!
//! This is the binary entry point for the Specwright server.

mod doctor;
mod serve;

use clap::{Parser, Subcommand};

/// Specwright - a Gherkin-to-Playwright conversion service.
#[derive(Parser, Debug)]
#[command(name = "specwright", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Specwright conversion server.
    Serve,
    /// Print the effective configuration as TOML.
    Config,
    /// Run diagnostic checks against the environment.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match specwright_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            specwright_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Config) => match toml::to_string_pretty(&config) {
            Ok(rendered) => {
                println!("{rendered}");
                Ok(())
            }
            Err(e) => Err(specwright_core::SpecwrightError::Internal(format!(
                "failed to render config: {e}"
            ))),
        },
        Some(Commands::Doctor { plain }) => doctor::run_doctor(&config, plain).await,
        None => {
            println!("specwright: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
