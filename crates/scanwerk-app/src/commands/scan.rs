// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `scan` command: runs an image through the platform's decoders.

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use scanwerk_bridge::{ScanOutput, platform_bridge, scan_image};
use scanwerk_core::error::Result;
use scanwerk_core::types::ScanRecord;

use super::Output;
use super::classify::{ActionView, render_actions};
use crate::services::app_services::AppServices;

#[derive(Serialize)]
struct ScanView<'a> {
    origin: &'static str,
    text: &'a str,
    actions: Vec<ActionView<'a>>,
}

impl<'a> ScanView<'a> {
    fn new(output: &'a ScanOutput) -> Self {
        Self {
            origin: output.origin.as_str(),
            text: &output.text,
            actions: output.actions.iter().map(ActionView::new).collect(),
        }
    }
}

pub fn scan(services: &AppServices, out: &Output, image: &Path, no_history: bool) -> Result<()> {
    let bytes = std::fs::read(image)?;
    let bridge = platform_bridge();
    let languages = services.settings().ocr_languages().clone();

    let outputs = scan_image(bridge.as_ref(), &bytes, &languages)?;
    info!(payloads = outputs.len(), path = %image.display(), "scan complete");

    if !no_history {
        let reference = image.display().to_string();
        let writers: Vec<_> = outputs
            .iter()
            .map(|o| {
                services.record_scan(ScanRecord::new(
                    o.text.clone(),
                    o.origin,
                    Some(reference.clone()),
                ))
            })
            .collect();
        for writer in writers {
            if writer.join().is_err() {
                warn!("history writer panicked");
            }
        }
    }

    let views: Vec<ScanView<'_>> = outputs.iter().map(ScanView::new).collect();
    out.emit(&views, || {
        outputs
            .iter()
            .map(|o| format!("{} ({}):\n{}", o.text, o.origin.as_str(), render_actions(&o.actions)))
            .collect::<Vec<_>>()
            .join("\n\n")
    })
}
