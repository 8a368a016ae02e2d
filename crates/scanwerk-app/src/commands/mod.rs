// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line surface. Each subcommand lives in its own module and talks to
// the rest of the app only through `AppServices`.

pub mod assist;
pub mod classify;
pub mod history;
pub mod scan;
pub mod settings;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use scanwerk_core::config::{OcrLanguage, ThemeMode};
use scanwerk_core::error::Result;
use scanwerk_core::types::ScanOrigin;

use crate::services::app_services::AppServices;

#[derive(Parser)]
#[command(
    name = "scanwerk",
    about = "Turn scanned text and barcodes into actions",
    version,
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format (for scripts).
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding history and settings.
    /// Defaults to $XDG_DATA_HOME/scanwerk.
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify text into candidate actions. Reads stdin when TEXT is omitted.
    Classify {
        text: Option<String>,
        /// Where the text came from: `ocr` or `barcode`.
        #[arg(long, default_value = "barcode", value_parser = parse_origin)]
        source: ScanOrigin,
        /// Where the text was found (file name, URI).
        #[arg(long)]
        reference: Option<String>,
        /// Don't record the scan in history.
        #[arg(long)]
        no_history: bool,
    },

    /// Classify text and carry out its primary action.
    Perform {
        text: Option<String>,
        /// Pick the Nth action instead of the first.
        #[arg(long, default_value = "0")]
        index: usize,
    },

    /// Ask the AI assistant about text or an image. Reads stdin when neither is given.
    Assist {
        text: Option<String>,
        /// Send this image instead of text.
        #[arg(long, conflicts_with = "text")]
        image: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "summarize")]
        mode: assist::ModeArg,
        /// Target language for `--mode translate`.
        #[arg(long, required_if_eq("mode", "translate"))]
        target: Option<String>,
    },

    /// Decode barcodes or recognise text in an image file.
    Scan {
        image: PathBuf,
        #[arg(long)]
        no_history: bool,
    },

    /// Scan history.
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// View or change settings.
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List recent scans, newest first.
    List {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Delete every history entry.
    Clear,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the current settings.
    Show,
    /// Set the theme: system, light, or dark.
    Theme {
        #[arg(value_parser = parse_theme)]
        mode: ThemeMode,
    },
    /// Enable or disable high contrast.
    HighContrast {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
    /// Set the text recognition languages.
    Languages {
        #[arg(required = true, value_parser = parse_language)]
        languages: Vec<OcrLanguage>,
    },
    /// Set how many scans history keeps.
    HistoryLimit { limit: usize },
    /// Set the assist cooldown in seconds.
    AssistCooldown { secs: u64 },
}

/// Run the parsed command against initialised services.
///
/// `assist` reports a typed outcome and picks its own exit code; every other
/// command exits successfully once it returns `Ok`.
pub fn run(cli: Cli, services: &AppServices) -> Result<ExitCode> {
    let out = Output { json: cli.json };
    let done = |()| ExitCode::SUCCESS;
    match cli.command {
        Commands::Classify {
            text,
            source,
            reference,
            no_history,
        } => classify::classify(services, &out, text, source, reference, no_history).map(done),
        Commands::Perform { text, index } => {
            classify::perform(services, &out, text, index).map(done)
        }
        Commands::Assist {
            text,
            image,
            mode,
            target,
        } => assist::assist(services, &out, text, image, mode.into_mode(target)),
        Commands::Scan { image, no_history } => {
            scan::scan(services, &out, &image, no_history).map(done)
        }
        Commands::History { action } => match action {
            HistoryAction::List { limit } => history::list(services, &out, limit),
            HistoryAction::Clear => history::clear(services, &out),
        }
        .map(done),
        Commands::Settings { action } => {
            settings::run(services, &out, action.unwrap_or(SettingsAction::Show)).map(done)
        }
    }
}

fn parse_origin(s: &str) -> std::result::Result<ScanOrigin, String> {
    ScanOrigin::from_keyword(s).ok_or_else(|| format!("unknown source `{s}` (expected ocr or barcode)"))
}

fn parse_theme(s: &str) -> std::result::Result<ThemeMode, String> {
    ThemeMode::from_keyword(s)
        .ok_or_else(|| format!("unknown theme `{s}` (expected system, light, or dark)"))
}

fn parse_language(s: &str) -> std::result::Result<OcrLanguage, String> {
    OcrLanguage::from_keyword(s).ok_or_else(|| format!("unknown language `{s}`"))
}

/// Formats results either as `{"status":"ok","data":...}` JSON or plain text.
pub struct Output {
    pub json: bool,
}

impl Output {
    pub fn emit<T: Serialize>(&self, data: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            let envelope = serde_json::json!({ "status": "ok", "data": data });
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }
}

/// `text` when given, otherwise all of stdin with one trailing newline removed.
pub(crate) fn text_or_stdin(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["scanwerk", "history", "list", "--json", "--limit", "5"])
            .unwrap();
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Commands::History {
                action: HistoryAction::List { limit: Some(5) }
            }
        ));
    }

    #[test]
    fn settings_defaults_to_show() {
        let cli = Cli::try_parse_from(["scanwerk", "settings"]).unwrap();
        assert!(matches!(cli.command, Commands::Settings { action: None }));
    }

    #[test]
    fn high_contrast_takes_a_value() {
        let cli = Cli::try_parse_from(["scanwerk", "settings", "high-contrast", "true"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Settings {
                action: Some(SettingsAction::HighContrast { enabled: true })
            }
        ));
    }

    #[test]
    fn rejects_unknown_keywords() {
        assert!(Cli::try_parse_from(["scanwerk", "classify", "x", "--source", "fax"]).is_err());
        assert!(Cli::try_parse_from(["scanwerk", "settings", "theme", "neon"]).is_err());
        assert!(Cli::try_parse_from(["scanwerk", "settings", "languages"]).is_err());
    }

    #[test]
    fn parses_language_list() {
        let cli =
            Cli::try_parse_from(["scanwerk", "settings", "languages", "latin", "korean"]).unwrap();
        let Commands::Settings {
            action: Some(SettingsAction::Languages { languages }),
        } = cli.command
        else {
            panic!("expected languages command");
        };
        assert_eq!(languages, vec![OcrLanguage::Latin, OcrLanguage::Korean]);
    }

    #[test]
    fn translate_requires_target() {
        assert!(Cli::try_parse_from(["scanwerk", "assist", "hola", "--mode", "translate"]).is_err());
        let cli = Cli::try_parse_from([
            "scanwerk", "assist", "hola", "--mode", "translate", "--target", "en",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Assist {
                mode: assist::ModeArg::Translate,
                ..
            }
        ));
    }

    #[test]
    fn explicit_text_skips_stdin() {
        assert_eq!(text_or_stdin(Some("WIFI:S:x;;".into())).unwrap(), "WIFI:S:x;;");
    }
}
