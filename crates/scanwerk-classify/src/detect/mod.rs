// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Format detectors: one independent predicate-plus-extractor per micro-format.
//
// Each detector receives the trimmed scan and either extracts a fully valid
// action or returns `None`. A malformed payload is a plain non-match, never an
// error. Table order is tie-break priority: most structured first.

pub mod contact;
pub mod email;
pub mod phone;
pub mod sms;
pub mod url;
pub mod wifi;

use crate::action::Action;

/// A named detector in the classification table.
#[derive(Debug, Clone, Copy)]
pub struct Detector {
    /// Short name used in logs.
    pub name: &'static str,
    pub detect: fn(&str) -> Option<Action>,
}

/// Structured detectors in priority order.
pub const DETECTORS: &[Detector] = &[
    Detector {
        name: "wifi",
        detect: wifi::detect,
    },
    Detector {
        name: "contact",
        detect: contact::detect,
    },
    Detector {
        name: "email",
        detect: email::detect,
    },
    Detector {
        name: "phone",
        detect: phone::detect,
    },
    Detector {
        name: "sms",
        detect: sms::detect,
    },
    Detector {
        name: "url",
        detect: url::detect,
    },
];

/// The always-matching fallback: the scan exactly as it was produced.
pub fn fallback(raw: &str) -> Action {
    Action::ShowRaw {
        text: raw.to_string(),
    }
}
