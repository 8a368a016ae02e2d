// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application settings.
//
// Settings are read by the surrounding system and handed to collaborators
// explicitly; nothing in the classifier reaches for them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanwerkError};

/// Number of scans kept in history unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Minimum interval between accepted assist requests, in seconds.
pub const DEFAULT_ASSIST_COOLDOWN_SECS: u64 = 30;

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    /// Follow the operating system.
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "system" => Some(Self::System),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Script families the text recogniser can be configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OcrLanguage {
    Latin,
    Chinese,
    Devanagari,
    Japanese,
    Korean,
}

impl OcrLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latin => "latin",
            Self::Chinese => "chinese",
            Self::Devanagari => "devanagari",
            Self::Japanese => "japanese",
            Self::Korean => "korean",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "latin" => Some(Self::Latin),
            "chinese" => Some(Self::Chinese),
            "devanagari" => Some(Self::Devanagari),
            "japanese" => Some(Self::Japanese),
            "korean" => Some(Self::Korean),
            _ => None,
        }
    }
}

/// Persistent user settings.
///
/// Fields are private so the non-empty language invariant can only be
/// changed through [`set_ocr_languages`](Self::set_ocr_languages). Missing
/// fields in a stored file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    theme_mode: ThemeMode,
    high_contrast: bool,
    ocr_languages: BTreeSet<OcrLanguage>,
    history_limit: usize,
    assist_cooldown_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::System,
            high_contrast: false,
            ocr_languages: BTreeSet::from([OcrLanguage::Latin]),
            history_limit: DEFAULT_HISTORY_LIMIT,
            assist_cooldown_secs: DEFAULT_ASSIST_COOLDOWN_SECS,
        }
    }
}

impl Settings {
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
    }

    pub fn high_contrast(&self) -> bool {
        self.high_contrast
    }

    pub fn set_high_contrast(&mut self, enabled: bool) {
        self.high_contrast = enabled;
    }

    /// Enabled recognition languages. Never empty.
    pub fn ocr_languages(&self) -> &BTreeSet<OcrLanguage> {
        &self.ocr_languages
    }

    /// Replace the enabled recognition languages.
    ///
    /// # Errors
    ///
    /// Returns [`ScanwerkError::InvalidSetting`] for an empty set; the
    /// previous languages stay in place.
    pub fn set_ocr_languages(
        &mut self,
        languages: impl IntoIterator<Item = OcrLanguage>,
    ) -> Result<()> {
        let languages: BTreeSet<OcrLanguage> = languages.into_iter().collect();
        if languages.is_empty() {
            return Err(ScanwerkError::InvalidSetting(
                "at least one OCR language must stay enabled".into(),
            ));
        }
        self.ocr_languages = languages;
        Ok(())
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Number of history records to retain. Zero is rejected.
    pub fn set_history_limit(&mut self, limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(ScanwerkError::InvalidSetting(
                "history limit must be at least 1".into(),
            ));
        }
        self.history_limit = limit;
        Ok(())
    }

    pub fn assist_cooldown(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.assist_cooldown_secs)
    }

    pub fn set_assist_cooldown_secs(&mut self, secs: u64) {
        self.assist_cooldown_secs = secs;
    }

    /// Repair values a hand-edited file could have broken.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.ocr_languages.is_empty() {
            self.ocr_languages = defaults.ocr_languages;
        }
        if self.history_limit == 0 {
            self.history_limit = defaults.history_limit;
        }
        self
    }
}
