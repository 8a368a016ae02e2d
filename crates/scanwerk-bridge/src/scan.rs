// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image-to-actions pipeline: decode barcodes first, fall back to text
// recognition, and classify whatever text came out.

use std::collections::BTreeSet;

use scanwerk_classify::{Action, classify};
use scanwerk_core::config::OcrLanguage;
use scanwerk_core::error::{Result, ScanwerkError};
use scanwerk_core::types::ScanOrigin;
use tracing::{debug, info, instrument, warn};

use crate::traits::{NativeBarcodeScanner, NativeTextRecognizer};

/// One text payload found in an image, with its classified actions.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    pub origin: ScanOrigin,
    /// Exactly as produced by the decoder / recogniser.
    pub text: String,
    pub actions: Vec<Action>,
}

impl ScanOutput {
    fn new(origin: ScanOrigin, text: String) -> Self {
        let actions = classify(&text);
        Self {
            origin,
            text,
            actions,
        }
    }
}

/// Extract and classify every payload in `image`.
///
/// Barcodes win when present: each decoded payload becomes one output. A
/// failed barcode pass is logged and text recognition runs instead.
///
/// # Errors
///
/// `ImageDecode` for an empty image, `TextRecognition` when neither pass
/// produced any text, or the recogniser's own error.
#[instrument(skip_all, fields(image_len = image.len()))]
pub fn scan_image<B>(
    bridge: &B,
    image: &[u8],
    languages: &BTreeSet<OcrLanguage>,
) -> Result<Vec<ScanOutput>>
where
    B: NativeBarcodeScanner + NativeTextRecognizer + ?Sized,
{
    if image.is_empty() {
        return Err(ScanwerkError::ImageDecode("empty image".into()));
    }

    match bridge.decode_barcodes(image) {
        Ok(payloads) if !payloads.is_empty() => {
            info!(count = payloads.len(), "barcodes decoded");
            return Ok(payloads
                .into_iter()
                .map(|payload| ScanOutput::new(ScanOrigin::Barcode, payload))
                .collect());
        }
        Ok(_) => debug!("no barcodes found, running text recognition"),
        Err(e) => warn!(error = %e, "barcode pass failed, running text recognition"),
    }

    let text = bridge.recognize_text(image, languages)?;
    if text.trim().is_empty() {
        return Err(ScanwerkError::TextRecognition("no text found".into()));
    }
    info!(text_len = text.len(), "text recognised");
    Ok(vec![ScanOutput::new(ScanOrigin::TextRecognition, text)])
}
