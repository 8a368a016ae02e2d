// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// scanwerk-classify: Scan-result classification for the Scanwerk scanner.
//
// Turns a raw string from the text recogniser or the barcode decoder into an
// ordered list of typed actions (open link, dial, compose email/SMS, join
// WiFi, save contact, copy/show text). Classification is a pure, total
// function: it never fails and always ends with the raw-text fallback.

pub mod action;
pub mod classifier;
pub mod detect;
mod text;

// Re-export the primary items so callers can use `scanwerk_classify::classify` etc.
pub use action::{Action, ActionIcon, WifiSecurity};
pub use classifier::{Classifier, MAX_STRUCTURED_LEN, classify};
pub use detect::{DETECTORS, Detector};
