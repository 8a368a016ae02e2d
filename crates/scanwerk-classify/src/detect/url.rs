// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Web links: `http://`, `https://`, or a bare `www.` host (stored as `https://`).

use crate::action::Action;
use crate::text::{is_host_label, strip_prefix_ci};

const SCHEMES: [&str; 2] = ["https://", "http://"];

pub fn detect(input: &str) -> Option<Action> {
    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return None;
    }

    for scheme in SCHEMES {
        if let Some(rest) = strip_prefix_ci(input, scheme) {
            if host(rest).is_empty() {
                return None;
            }
            return Some(Action::OpenUrl {
                url: format!("{scheme}{rest}"),
            });
        }
    }

    let rest = strip_prefix_ci(input, "www.")?;
    if !host(rest).split('.').all(is_host_label) {
        return None;
    }
    Some(Action::OpenUrl {
        url: format!("https://{input}"),
    })
}

/// Host portion of an authority: everything before the port, path, query, or fragment.
fn host(rest: &str) -> &str {
    let end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#' | ':'))
        .unwrap_or(rest.len());
    &rest[..end]
}
