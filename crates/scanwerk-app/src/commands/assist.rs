// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `assist` command: one request through the rate-limited assist service.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

use scanwerk_assist::{AssistInput, AssistMode, AssistOutcome};
use scanwerk_core::error::Result;

use super::{Output, text_or_stdin};
use crate::services::app_services::AppServices;

/// Exit code for a request refused by the cooldown.
const EXIT_RATE_LIMITED: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Summarize,
    Explain,
    Translate,
    Describe,
}

impl ModeArg {
    pub fn into_mode(self, target: Option<String>) -> AssistMode {
        match self {
            Self::Summarize => AssistMode::Summarize,
            Self::Explain => AssistMode::Explain,
            Self::Translate => AssistMode::Translate {
                target: target.unwrap_or_default(),
            },
            Self::Describe => AssistMode::Describe,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
enum OutcomeView<'a> {
    Success { text: &'a str },
    RateLimited { remaining_secs: u64 },
    Error { message: &'a str },
}

impl<'a> OutcomeView<'a> {
    fn new(outcome: &'a AssistOutcome) -> Self {
        match outcome {
            AssistOutcome::Success { text } => Self::Success { text },
            AssistOutcome::RateLimited { remaining_wait } => Self::RateLimited {
                // Round up so "0 seconds" is never reported while still blocked.
                remaining_secs: remaining_wait.as_secs()
                    + u64::from(remaining_wait.subsec_nanos() > 0),
            },
            AssistOutcome::Error { message } => Self::Error { message },
        }
    }

    fn render(&self) -> String {
        match self {
            Self::Success { text } => (*text).to_string(),
            Self::RateLimited { remaining_secs } => {
                format!("The assistant is cooling down. Try again in {remaining_secs}s.")
            }
            Self::Error { message } => (*message).to_string(),
        }
    }

    fn exit_code(&self) -> ExitCode {
        match self {
            Self::Success { .. } => ExitCode::SUCCESS,
            Self::RateLimited { .. } => ExitCode::from(EXIT_RATE_LIMITED),
            Self::Error { .. } => ExitCode::FAILURE,
        }
    }
}

pub fn assist(
    services: &AppServices,
    out: &Output,
    text: Option<String>,
    image: Option<PathBuf>,
    mode: AssistMode,
) -> Result<ExitCode> {
    let outcome = match image {
        Some(path) => {
            let bytes = std::fs::read(&path)?;
            services.assist(AssistInput::Image(&bytes), &mode)
        }
        None => {
            let text = text_or_stdin(text)?;
            services.assist(AssistInput::Text(&text), &mode)
        }
    };

    let view = OutcomeView::new(&outcome);
    let success = matches!(view, OutcomeView::Success { .. });
    info!(mode = mode.as_str(), success, "assist finished");
    if success || out.json {
        out.emit(&view, || view.render())?;
    } else {
        eprintln!("{}", view.render());
    }
    Ok(view.exit_code())
}
