// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Classifier: runs every detector against a scan and orders the results.
//
// The result is never empty: structured actions come first in detector
// priority order, followed by a copy action when anything structured matched,
// and always ending with the untouched scan as `ShowRaw`.

use tracing::debug;

use crate::action::Action;
use crate::detect::{self, DETECTORS, Detector};

/// Longest trimmed input the structured detectors look at, in bytes.
///
/// Larger than any QR payload; beyond it the scan is body text (multi-page
/// OCR) and only the fallback applies.
pub const MAX_STRUCTURED_LEN: usize = 8 * 1024;

/// Ordered detector table plus the size bound for structured matching.
///
/// Stateless and `Copy`; share one freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    detectors: &'static [Detector],
    max_structured_len: usize,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            detectors: DETECTORS,
            max_structured_len: MAX_STRUCTURED_LEN,
        }
    }

    /// Override the size bound beyond which only the fallback applies.
    pub fn with_max_structured_len(mut self, max_structured_len: usize) -> Self {
        self.max_structured_len = max_structured_len;
        self
    }

    /// Classify a raw scan into actions, primary suggestion first.
    ///
    /// Total over all inputs: the last element is always
    /// `ShowRaw { text: raw }` with `raw` unmodified.
    pub fn classify(&self, raw: &str) -> Vec<Action> {
        let trimmed = raw.trim();
        let mut actions: Vec<Action> = Vec::new();

        if !trimmed.is_empty() && trimmed.len() <= self.max_structured_len {
            for detector in self.detectors {
                if let Some(action) = (detector.detect)(trimmed) {
                    debug!(detector = detector.name, "detector matched");
                    push_unique(&mut actions, action);
                }
            }
            if !actions.is_empty() {
                push_unique(&mut actions, Action::copy(trimmed));
            }
        }

        debug!(
            input_len = raw.len(),
            structured = actions.len(),
            "scan classified"
        );
        actions.push(detect::fallback(raw));
        actions
    }
}

/// Classify with the default detector table and size bound.
pub fn classify(raw: &str) -> Vec<Action> {
    Classifier::new().classify(raw)
}

fn push_unique(actions: &mut Vec<Action>, action: Action) {
    if !actions.contains(&action) {
        actions.push(action);
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use crate::action::WifiSecurity;
    use proptest::prelude::*;

    const PREFIXES: &[&str] = &[
        "",
        "WIFI:",
        "WIFI:S:",
        "WIFI:T:WPA;S:",
        "MECARD:N:",
        "MECARD:TEL:",
        "BEGIN:VCARD\n",
        "BEGIN:VCARD\nFN:",
        "mailto:",
        "MATMSG:TO:",
        "tel:",
        "sms:",
        "smsto:",
        "mmsto:",
        "http://",
        "https://",
        "www.",
        "+1 ",
    ];

    fn digit_count(value: &str) -> usize {
        value.chars().filter(char::is_ascii_digit).count()
    }

    /// Per-variant payload guarantees of a structured action.
    fn assert_well_formed(action: &Action, trimmed: &str) {
        match action {
            Action::OpenUrl { url } => {
                assert!(url.starts_with("http://") || url.starts_with("https://"), "{url:?}");
            }
            Action::CallPhone { number } => assert!(digit_count(number) >= 3, "{number:?}"),
            Action::SendSms { number, .. } => assert!(digit_count(number) >= 3, "{number:?}"),
            Action::SendEmail { email, .. } => {
                let (local, domain) = email.split_once('@').expect("address has an @");
                assert!(!local.is_empty() && domain.contains('.'), "{email:?}");
            }
            Action::ConnectWifi {
                ssid,
                password,
                security,
                ..
            } => {
                assert!(!ssid.is_empty());
                assert!(*security == WifiSecurity::Open || password.is_some());
            }
            Action::AddContact {
                name, phone, email, ..
            } => assert!(name.is_some() || phone.is_some() || email.is_some()),
            Action::CopyText { text, .. } => assert_eq!(text, trimmed),
            Action::ShowRaw { .. } => panic!("fallback before the end"),
        }
    }

    fn check(input: &str) {
        let actions = classify(input);

        let (last, structured) = actions.split_last().expect("never empty");
        assert_eq!(last, &Action::ShowRaw { text: input.to_string() });

        for action in structured {
            assert_well_formed(action, input.trim());
        }
        // Copy appears only after something structured, and only once.
        let copies = structured
            .iter()
            .filter(|a| matches!(a, Action::CopyText { .. }))
            .count();
        assert_eq!(copies, usize::from(!structured.is_empty()));
        if let Some(copy) = structured.last() {
            assert!(matches!(copy, Action::CopyText { .. }));
        }

        for (i, action) in actions.iter().enumerate() {
            assert!(!actions[i + 1..].contains(action));
        }
        assert_eq!(classify(input), actions);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(2_000))]

        #[test]
        fn any_string_is_classified(input in any::<String>()) {
            check(&input);
        }

        #[test]
        fn scheme_prefixed_strings_are_classified(
            prefix in prop::sample::select(PREFIXES),
            body in "[ -~]{0,40}",
            tail in any::<String>(),
        ) {
            check(&format!("{prefix}{body}"));
            check(&format!("{prefix}{tail}"));
            check(&format!("  {prefix}{body}\n"));
        }

        #[test]
        fn field_soup_is_classified(
            prefix in prop::sample::select(PREFIXES),
            fields in prop::collection::vec(
                ("[A-Za-z]{1,5}", "[^;]{0,12}").prop_map(|(k, v)| format!("{k}:{v}")),
                0..6,
            ),
        ) {
            check(&format!("{prefix}{};;", fields.join(";")));
        }
    }
}
