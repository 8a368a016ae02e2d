// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages.
//
// Every collaborator error is mapped to a short plain-English message with a
// clear suggestion. Stack traces and backend details never reach the user.

use crate::error::ScanwerkError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Network blip, busy service; trying again later may work.
    Transient,
    /// User must do something (grant a permission, change a setting).
    ActionRequired,
    /// Cannot be fixed by retrying or user action.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether retrying the same operation can succeed.
    pub retriable: bool,
    /// Severity level (drives icon/colour in UI).
    pub severity: Severity,
}

impl std::fmt::Display for HumanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.message, self.suggestion)
    }
}

/// Convert a `ScanwerkError` into a `HumanError`.
pub fn humanize_error(err: &ScanwerkError) -> HumanError {
    match err {
        ScanwerkError::ImageDecode(_) => HumanError {
            message: "We couldn't read that picture.".into(),
            suggestion: "The image may be damaged or in an unusual format. Try taking the photo again.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        ScanwerkError::TextRecognition(_) => HumanError {
            message: "We couldn't find any text in this scan.".into(),
            suggestion: "Try again with better lighting, holding the camera steady and close to the text.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ScanwerkError::BarcodeDecode(_) => HumanError {
            message: "We couldn't read this code.".into(),
            suggestion: "Make sure the whole code is inside the frame and in focus, then try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ScanwerkError::Assist(detail) => humanize_assist_error(detail),

        ScanwerkError::InvalidSetting(detail) => HumanError {
            message: "That setting can't be used.".into(),
            suggestion: format!("Please choose a different value. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ScanwerkError::Database(_) => HumanError {
            message: "Your scan history had a problem.".into(),
            suggestion: "Try closing and reopening the app. If this keeps happening, clear the history in Settings.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ScanwerkError::Io(io_err) => match io_err.kind() {
            std::io::ErrorKind::NotFound => HumanError {
                message: "The file couldn't be found.".into(),
                suggestion: "It may have been moved or deleted. Try choosing the file again.".into(),
                retriable: false,
                severity: Severity::ActionRequired,
            },
            std::io::ErrorKind::PermissionDenied => HumanError {
                message: "The app doesn't have permission to use that file.".into(),
                suggestion: "Check the app's storage permission in your device settings.".into(),
                retriable: false,
                severity: Severity::ActionRequired,
            },
            _ => HumanError {
                message: "There was a problem reading or writing a file.".into(),
                suggestion: "Try again. If this keeps happening, your device's storage may be full.".into(),
                retriable: true,
                severity: Severity::Transient,
            },
        },

        ScanwerkError::Serialization(_) => HumanError {
            message: "The app had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, reset the app's settings.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ScanwerkError::Bridge(_) => HumanError {
            message: "A device feature didn't work.".into(),
            suggestion: "Try again. Some features may not be available on all devices.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ScanwerkError::PlatformUnavailable => HumanError {
            message: "This feature isn't available on your device.".into(),
            suggestion: "You can still copy the text and use it in another app.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

/// Parse assist-service error details into human-readable messages.
fn humanize_assist_error(detail: &str) -> HumanError {
    let lower = detail.to_ascii_lowercase();

    if lower.contains("timed out") || lower.contains("timeout") {
        HumanError {
            message: "The assistant took too long to answer.".into(),
            suggestion: "Check your internet connection and try again in a moment.".into(),
            retriable: true,
            severity: Severity::Transient,
        }
    } else if lower.contains("api key") || lower.contains("unauthorized") || lower.contains("401") {
        HumanError {
            message: "The assistant isn't set up.".into(),
            suggestion: "An access key is missing or no longer valid.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        }
    } else if lower.contains("quota") || lower.contains("429") {
        HumanError {
            message: "The assistant is busy right now.".into(),
            suggestion: "Please wait a minute before asking again.".into(),
            retriable: true,
            severity: Severity::Transient,
        }
    } else if lower.contains("empty") {
        HumanError {
            message: "There's nothing to send to the assistant.".into(),
            suggestion: "Scan some text or take a photo first.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        }
    } else {
        HumanError {
            message: "The assistant had a problem.".into(),
            suggestion: "Try again later. Your scan is still available.".into(),
            retriable: true,
            severity: Severity::Transient,
        }
    }
}
