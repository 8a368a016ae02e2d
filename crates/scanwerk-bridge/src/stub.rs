// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where native mobile APIs are unavailable.
//
// Every trait method returns `PlatformUnavailable`.

use std::collections::BTreeSet;

use scanwerk_core::config::OcrLanguage;
use scanwerk_core::error::{Result, ScanwerkError};

use crate::traits::*;

/// No-op bridge returned when no native bridge is registered.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl NativeCamera for StubBridge {
    fn capture_image(&self) -> Result<Option<Vec<u8>>> {
        tracing::warn!("NativeCamera::capture_image called on stub bridge");
        Err(ScanwerkError::PlatformUnavailable)
    }
}

impl NativeTextRecognizer for StubBridge {
    fn recognize_text(&self, _image: &[u8], _languages: &BTreeSet<OcrLanguage>) -> Result<String> {
        tracing::warn!("NativeTextRecognizer::recognize_text called on stub bridge");
        Err(ScanwerkError::PlatformUnavailable)
    }
}

impl NativeBarcodeScanner for StubBridge {
    fn decode_barcodes(&self, _image: &[u8]) -> Result<Vec<String>> {
        tracing::warn!("NativeBarcodeScanner::decode_barcodes called on stub bridge");
        Err(ScanwerkError::PlatformUnavailable)
    }
}

impl NativeIntents for StubBridge {
    fn open_url(&self, _url: &str) -> Result<()> {
        Err(ScanwerkError::PlatformUnavailable)
    }

    fn dial(&self, _number: &str) -> Result<()> {
        Err(ScanwerkError::PlatformUnavailable)
    }

    fn compose_email(&self, _to: &str, _subject: Option<&str>, _body: Option<&str>) -> Result<()> {
        Err(ScanwerkError::PlatformUnavailable)
    }

    fn compose_sms(&self, _number: &str, _message: Option<&str>) -> Result<()> {
        Err(ScanwerkError::PlatformUnavailable)
    }

    fn join_wifi(&self, _credentials: &WifiCredentials<'_>) -> Result<()> {
        tracing::warn!("NativeIntents::join_wifi called on stub bridge");
        Err(ScanwerkError::PlatformUnavailable)
    }

    fn add_contact(&self, _contact: &ContactDetails<'_>) -> Result<()> {
        Err(ScanwerkError::PlatformUnavailable)
    }

    fn copy_to_clipboard(&self, _label: &str, _text: &str) -> Result<()> {
        tracing::warn!("NativeIntents::copy_to_clipboard called on stub bridge");
        Err(ScanwerkError::PlatformUnavailable)
    }

    fn show_text(&self, _text: &str) -> Result<()> {
        Err(ScanwerkError::PlatformUnavailable)
    }
}
