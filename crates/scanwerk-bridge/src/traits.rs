// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.

use std::collections::BTreeSet;

use scanwerk_classify::WifiSecurity;
use scanwerk_core::config::OcrLanguage;
use scanwerk_core::error::Result;

/// Unified bridge that groups all native capabilities.
pub trait PlatformBridge:
    NativeCamera + NativeTextRecognizer + NativeBarcodeScanner + NativeIntents
{
    /// Human-readable platform name (e.g. "iOS 17", "Android 14").
    fn platform_name(&self) -> &str;
}

/// Capture images from the device camera.
pub trait NativeCamera {
    /// Launch the system camera and return the captured JPEG bytes.
    /// Returns Ok(None) if the user cancelled.
    fn capture_image(&self) -> Result<Option<Vec<u8>>>;
}

/// On-device text recognition.
pub trait NativeTextRecognizer {
    /// Recognise all text in `image`. May return multi-line prose.
    ///
    /// `languages` comes from the caller's settings; it is never empty.
    fn recognize_text(&self, image: &[u8], languages: &BTreeSet<OcrLanguage>) -> Result<String>;
}

/// Barcode / QR decoding.
pub trait NativeBarcodeScanner {
    /// Decode every barcode found in `image`, one payload string each.
    /// An image without barcodes yields an empty list.
    fn decode_barcodes(&self, image: &[u8]) -> Result<Vec<String>>;
}

/// Network credentials handed to the platform's WiFi join flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WifiCredentials<'a> {
    pub ssid: &'a str,
    pub password: Option<&'a str>,
    pub security: WifiSecurity,
    pub hidden: bool,
}

/// Contact fields handed to the platform's add-contact flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactDetails<'a> {
    pub name: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub organization: Option<&'a str>,
}

/// Platform operations performed on behalf of an action.
///
/// Each method launches the system UI for the operation; Ok(()) means the
/// UI was presented, not that the user completed it.
pub trait NativeIntents {
    fn open_url(&self, url: &str) -> Result<()>;

    fn dial(&self, number: &str) -> Result<()>;

    fn compose_email(&self, to: &str, subject: Option<&str>, body: Option<&str>) -> Result<()>;

    fn compose_sms(&self, number: &str, message: Option<&str>) -> Result<()>;

    fn join_wifi(&self, credentials: &WifiCredentials<'_>) -> Result<()>;

    fn add_contact(&self, contact: &ContactDetails<'_>) -> Result<()>;

    fn copy_to_clipboard(&self, label: &str, text: &str) -> Result<()>;

    /// Present text full-screen (selectable, with a copy affordance).
    fn show_text(&self, text: &str) -> Result<()>;
}
