// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `history` commands.

use scanwerk_core::error::Result;
use scanwerk_core::types::ScanRecord;

use super::Output;
use crate::services::app_services::AppServices;

pub fn list(services: &AppServices, out: &Output, limit: Option<usize>) -> Result<()> {
    let limit = limit.unwrap_or_else(|| services.settings().history_limit());
    let records = services.history(limit)?;
    out.emit(&records, || render_records(&records))
}

pub fn clear(services: &AppServices, out: &Output) -> Result<()> {
    services.clear_history()?;
    out.emit(&serde_json::json!({ "cleared": true }), || "History cleared.".into())
}

fn render_records(records: &[ScanRecord]) -> String {
    if records.is_empty() {
        return "No scans yet.".into();
    }
    records
        .iter()
        .map(|r| {
            let first_line = r.text.lines().next().unwrap_or_default();
            format!(
                "{}  {:<7}  {}",
                r.timestamp.format("%Y-%m-%d %H:%M"),
                r.origin.as_str(),
                first_line
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
