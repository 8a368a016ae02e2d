// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanwerk: turns scanned text and barcodes into actions.
//
// Entry point. Initialises logging and services, then runs one command.

mod commands;
mod services;

use std::process::ExitCode;

use clap::Parser;
use scanwerk_core::human_errors::humanize_error;

use commands::Cli;
use services::app_services::AppServices;
use services::data_dir::data_dir;

fn main() -> ExitCode {
    // Logs go to stderr so `--json` output stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    let result = data_dir(cli.data_dir.clone())
        .and_then(|dir| {
            AppServices::init(dir.clone()).or_else(|e| {
                tracing::error!(error = %e, "history unavailable, using in-memory store");
                AppServices::fallback(dir)
            })
        })
        .and_then(|services| commands::run(cli, &services));

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let human = humanize_error(&e);
            if json {
                let envelope = serde_json::json!({
                    "status": "error",
                    "message": human.message,
                    "suggestion": human.suggestion,
                    "retriable": human.retriable,
                });
                eprintln!("{envelope}");
            } else {
                eprintln!("{human}");
            }
            ExitCode::FAILURE
        }
    }
}
