// src/main.rs

use anyhow::Result;
use clap::Parser;
use promptctx::cli::Cli;
use promptctx::config::ConfigBuilder;
use promptctx::output::{ClipboardSink, NoClipboard, SystemClipboard};
use promptctx::rendering::NbconvertConverter;
use promptctx::run;

fn main() -> Result<()> {
    // Initialize logging. RUST_LOG adds to the crate default.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "promptctx=debug".parse()?
                } else {
                    "promptctx=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting promptctx v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Setup ---
    let cli = Cli::parse();

    // --- Configuration ---
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    let converter = NbconvertConverter::from_options(&config.converter);
    let clipboard: Box<dyn ClipboardSink> = if config.clipboard {
        Box::new(SystemClipboard)
    } else {
        Box::new(NoClipboard)
    };

    // --- Execution & Error Handling ---
    match run(&config, &converter, clipboard.as_ref()) {
        Ok(artifact) => {
            if artifact.clipboard_copied {
                println!(
                    "All specified files have been written to {} and copied to the clipboard.",
                    artifact.output_path.display()
                );
            } else {
                println!(
                    "All specified files have been written to {} (clipboard unavailable).",
                    artifact.output_path.display()
                );
            }
            println!(
                "Historical version saved as {}",
                artifact.history_path.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
