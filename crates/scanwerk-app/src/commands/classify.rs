// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `classify` and `perform` commands.

use serde::Serialize;
use tracing::{info, warn};

use scanwerk_bridge::{perform as perform_action, platform_bridge};
use scanwerk_classify::Action;
use scanwerk_core::error::Result;
use scanwerk_core::types::{ScanOrigin, ScanRecord};

use super::{Output, text_or_stdin};
use crate::services::app_services::AppServices;

/// An action as shown to the user: the payload plus its label and icon.
#[derive(Debug, Serialize)]
pub struct ActionView<'a> {
    pub label: String,
    pub icon: &'static str,
    #[serde(flatten)]
    pub action: &'a Action,
}

impl<'a> ActionView<'a> {
    pub fn new(action: &'a Action) -> Self {
        Self {
            label: action.label(),
            icon: action.icon().as_str(),
            action,
        }
    }
}

/// Numbered plain-text rendering of an action list.
pub fn render_actions(actions: &[Action]) -> String {
    actions
        .iter()
        .enumerate()
        .map(|(i, action)| format!("{:>2}. [{}] {}", i + 1, action.icon().as_str(), action.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn classify(
    services: &AppServices,
    out: &Output,
    text: Option<String>,
    origin: ScanOrigin,
    reference: Option<String>,
    no_history: bool,
) -> Result<()> {
    let text = text_or_stdin(text)?;
    let actions = services.classify(&text);
    info!(actions = actions.len(), origin = origin.as_str(), "classified input");

    let recorder = if no_history || text.trim().is_empty() {
        None
    } else {
        Some(services.record_scan(ScanRecord::new(text, origin, reference)))
    };

    let views: Vec<ActionView<'_>> = actions.iter().map(ActionView::new).collect();
    out.emit(&views, || render_actions(&actions))?;

    if let Some(handle) = recorder
        && handle.join().is_err()
    {
        warn!("history writer panicked");
    }
    Ok(())
}

pub fn perform(
    services: &AppServices,
    out: &Output,
    text: Option<String>,
    index: usize,
) -> Result<()> {
    let text = text_or_stdin(text)?;
    let actions = services.classify(&text);

    // The fallback is always last, so an out-of-range index lands on it.
    let action = match actions.get(index).or_else(|| actions.last()) {
        Some(action) => action,
        None => return Ok(()),
    };
    if index >= actions.len() {
        warn!(index, available = actions.len(), "no action at index, using fallback");
    }

    let bridge = platform_bridge();
    info!(platform = bridge.platform_name(), action = %action.label(), "performing action");
    perform_action(action, bridge.as_ref())?;

    out.emit(&ActionView::new(action), || format!("Done: {}", action.label()))
}
