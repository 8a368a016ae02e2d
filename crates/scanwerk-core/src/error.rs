// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Scanwerk.
//
// The classifier has no failure channel; everything here belongs to the
// collaborators around it (capture, recognition, history, assist, settings).

use thiserror::Error;

/// Top-level error type for all fallible Scanwerk operations.
#[derive(Debug, Error)]
pub enum ScanwerkError {
    // -- Capture / recognition --
    #[error("image decode failed: {0}")]
    ImageDecode(String),

    #[error("text recognition failed: {0}")]
    TextRecognition(String),

    #[error("barcode decode failed: {0}")]
    BarcodeDecode(String),

    // -- Assist service --
    #[error("assist service error: {0}")]
    Assist(String),

    // -- Settings --
    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    // -- Storage / persistence --
    #[error("database error: {0}")]
    Database(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    /// A native call was made but the platform refused or failed it.
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ScanwerkError>;
