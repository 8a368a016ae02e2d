// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Action model: the closed set of things a user can do with a scan.
//
// Actions are plain values: equality is payload equality, and the label and
// icon are derived from the variant and payload rather than stored.

use serde::{Deserialize, Serialize};

/// Label given to copy actions when the caller does not choose one.
pub const DEFAULT_COPY_LABEL: &str = "Copy";

/// Authentication scheme of a WiFi network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WifiSecurity {
    Wpa,
    Wep,
    Open,
}

impl WifiSecurity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Wep => "WEP",
            Self::Open => "OPEN",
        }
    }
}

/// Symbolic icon for presenting an action. Carries no meaning beyond the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionIcon {
    Link,
    Phone,
    Email,
    Wifi,
    Sms,
    Contact,
    Copy,
    Text,
}

impl ActionIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Wifi => "wifi",
            Self::Sms => "sms",
            Self::Contact => "contact",
            Self::Copy => "copy",
            Self::Text => "text",
        }
    }
}

/// A typed, user-actionable interpretation of scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Open a web page. `url` always carries an `http://` or `https://` scheme.
    OpenUrl { url: String },
    /// Dial a phone number.
    CallPhone { number: String },
    /// Compose an email.
    SendEmail {
        email: String,
        subject: Option<String>,
        body: Option<String>,
    },
    /// Join a WiFi network. `password` is always present unless `security` is open.
    ConnectWifi {
        ssid: String,
        password: Option<String>,
        security: WifiSecurity,
        hidden: bool,
    },
    /// Compose a text message.
    SendSms {
        number: String,
        message: Option<String>,
    },
    /// Save a contact. At least one of name, phone, or email is present.
    AddContact {
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        organization: Option<String>,
    },
    /// Copy text to the clipboard.
    CopyText { text: String, label: String },
    /// Show the scan verbatim. Always the last action of a classification.
    ShowRaw { text: String },
}

impl Action {
    /// A copy action with the default label.
    pub fn copy(text: impl Into<String>) -> Self {
        Self::CopyText {
            text: text.into(),
            label: DEFAULT_COPY_LABEL.to_string(),
        }
    }

    /// Human-readable label for the control that performs this action.
    pub fn label(&self) -> String {
        match self {
            Self::OpenUrl { .. } => "Open link".to_string(),
            Self::CallPhone { number } => format!("Call {number}"),
            Self::SendEmail { email, .. } => format!("Email {email}"),
            Self::ConnectWifi { ssid, .. } => format!("Join \"{ssid}\""),
            Self::SendSms { number, .. } => format!("Text {number}"),
            Self::AddContact { name: Some(name), .. } => format!("Add {name} to contacts"),
            Self::AddContact { .. } => "Add contact".to_string(),
            Self::CopyText { label, .. } => label.clone(),
            Self::ShowRaw { .. } => "Show text".to_string(),
        }
    }

    pub fn icon(&self) -> ActionIcon {
        match self {
            Self::OpenUrl { .. } => ActionIcon::Link,
            Self::CallPhone { .. } => ActionIcon::Phone,
            Self::SendEmail { .. } => ActionIcon::Email,
            Self::ConnectWifi { .. } => ActionIcon::Wifi,
            Self::SendSms { .. } => ActionIcon::Sms,
            Self::AddContact { .. } => ActionIcon::Contact,
            Self::CopyText { .. } => ActionIcon::Copy,
            Self::ShowRaw { .. } => ActionIcon::Text,
        }
    }

    /// Whether this is the raw-text fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::ShowRaw { .. })
    }
}
