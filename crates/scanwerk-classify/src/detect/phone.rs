// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Phone: `tel:<number>` or a bare phone-shaped string.

use crate::action::Action;
use crate::text::{is_phone_number, percent_decode, strip_prefix_ci};

pub fn detect(input: &str) -> Option<Action> {
    let number = match strip_prefix_ci(input, "tel:") {
        Some(rest) => percent_decode(rest).trim().to_string(),
        None => input.to_string(),
    };
    if !is_phone_number(&number) {
        return None;
    }
    Some(Action::CallPhone { number })
}
