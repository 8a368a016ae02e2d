// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Recording bridge double shared by the unit tests.

use std::cell::RefCell;
use std::collections::BTreeSet;

use scanwerk_core::config::OcrLanguage;
use scanwerk_core::error::{Result, ScanwerkError};

use crate::traits::*;

/// Records every intent as a line of text and serves canned scan results.
#[derive(Default)]
pub(crate) struct RecordingBridge {
    pub calls: RefCell<Vec<String>>,
    pub barcodes: Option<Vec<String>>,
    pub text: Option<String>,
    /// Fail every intent the way a native layer reports a refused call.
    pub reject_intents: bool,
}

impl RecordingBridge {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, line: String) -> Result<()> {
        let verb = line.split(' ').next().unwrap_or_default().to_string();
        self.calls.borrow_mut().push(line);
        if self.reject_intents {
            return Err(ScanwerkError::Bridge(format!("{verb} refused by host")));
        }
        Ok(())
    }
}

impl NativeTextRecognizer for RecordingBridge {
    fn recognize_text(&self, _image: &[u8], languages: &BTreeSet<OcrLanguage>) -> Result<String> {
        self.calls
            .borrow_mut()
            .push(format!("recognize_text languages={}", languages.len()));
        self.text
            .clone()
            .ok_or_else(|| ScanwerkError::TextRecognition("model not loaded".into()))
    }
}

impl NativeBarcodeScanner for RecordingBridge {
    fn decode_barcodes(&self, _image: &[u8]) -> Result<Vec<String>> {
        self.calls.borrow_mut().push("decode_barcodes".into());
        self.barcodes
            .clone()
            .ok_or_else(|| ScanwerkError::BarcodeDecode("scanner busy".into()))
    }
}

impl NativeIntents for RecordingBridge {
    fn open_url(&self, url: &str) -> Result<()> {
        self.record(format!("open_url {url}"))
    }

    fn dial(&self, number: &str) -> Result<()> {
        self.record(format!("dial {number}"))
    }

    fn compose_email(&self, to: &str, subject: Option<&str>, body: Option<&str>) -> Result<()> {
        self.record(format!("compose_email {to} {subject:?} {body:?}"))
    }

    fn compose_sms(&self, number: &str, message: Option<&str>) -> Result<()> {
        self.record(format!("compose_sms {number} {message:?}"))
    }

    fn join_wifi(&self, credentials: &WifiCredentials<'_>) -> Result<()> {
        self.record(format!(
            "join_wifi {} {:?} {} hidden={}",
            credentials.ssid,
            credentials.password,
            credentials.security.as_str(),
            credentials.hidden
        ))
    }

    fn add_contact(&self, contact: &ContactDetails<'_>) -> Result<()> {
        self.record(format!("add_contact {:?}", contact.name))
    }

    fn copy_to_clipboard(&self, label: &str, text: &str) -> Result<()> {
        self.record(format!("copy_to_clipboard {label} {text}"))
    }

    fn show_text(&self, text: &str) -> Result<()> {
        self.record(format!("show_text {text}"))
    }
}
