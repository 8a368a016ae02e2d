// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// SMS: `sms:<number>[?body=...]` or `smsto:<number>:<message>` (also `mmsto:`).

use crate::action::Action;
use crate::text::{is_phone_number, non_empty, percent_decode, strip_prefix_ci};

pub fn detect(input: &str) -> Option<Action> {
    if let Some(rest) =
        strip_prefix_ci(input, "smsto:").or_else(|| strip_prefix_ci(input, "mmsto:"))
    {
        let (number, message) = match rest.split_once(':') {
            Some((number, message)) => (number, non_empty(message)),
            None => (rest, None),
        };
        return build(number.trim(), message);
    }

    let rest = strip_prefix_ci(input, "sms:")?;
    let (number, query) = match rest.split_once('?') {
        Some((number, query)) => (number, Some(query)),
        None => (rest, None),
    };
    let message = query
        .into_iter()
        .flat_map(|q| q.split('&'))
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.eq_ignore_ascii_case("body"))
        .and_then(|(_, value)| non_empty(percent_decode(value)));

    build(percent_decode(number).trim(), message)
}

fn build(number: &str, message: Option<String>) -> Option<Action> {
    if !is_phone_number(number) {
        return None;
    }
    Some(Action::SendSms {
        number: number.to_string(),
        message,
    })
}
