// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Scanwerk scanner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanId(pub Uuid);

impl ScanId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ScanId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ScanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which producer turned an image into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanOrigin {
    /// On-device text recognition (OCR). May be multi-line prose.
    TextRecognition,
    /// Barcode / QR decode. A single payload string.
    Barcode,
}

impl ScanOrigin {
    /// Stable keyword used for storage and the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextRecognition => "ocr",
            Self::Barcode => "barcode",
        }
    }

    /// Inverse of [`as_str`](Self::as_str).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "ocr" | "text" => Some(Self::TextRecognition),
            "barcode" | "qr" => Some(Self::Barcode),
            _ => None,
        }
    }
}

/// A single scan kept in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: ScanId,
    /// The raw recognised / decoded text, exactly as produced.
    pub text: String,
    /// Where the source image lives (file path or platform URI), if kept.
    pub source_reference: Option<String>,
    pub origin: ScanOrigin,
    pub timestamp: DateTime<Utc>,
}

impl ScanRecord {
    pub fn new(text: String, origin: ScanOrigin, source_reference: Option<String>) -> Self {
        Self {
            id: ScanId::new(),
            text,
            source_reference,
            origin,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_keywords_round_trip() {
        for origin in [ScanOrigin::TextRecognition, ScanOrigin::Barcode] {
            assert_eq!(ScanOrigin::from_keyword(origin.as_str()), Some(origin));
        }
        assert_eq!(ScanOrigin::from_keyword("QR"), Some(ScanOrigin::Barcode));
        assert_eq!(ScanOrigin::from_keyword("fax"), None);
    }

    #[test]
    fn new_records_get_distinct_ids() {
        let a = ScanRecord::new("one".into(), ScanOrigin::Barcode, None);
        let b = ScanRecord::new("one".into(), ScanOrigin::Barcode, None);
        assert_ne!(a.id, b.id);
    }
}
