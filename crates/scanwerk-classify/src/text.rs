// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared lexical helpers for the detectors.

use std::borrow::Cow;

/// Strip `prefix` from the start of `input`, ignoring ASCII case.
pub(crate) fn strip_prefix_ci<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&input[prefix.len()..])
    } else {
        None
    }
}

/// Split on `separator`, skipping separators preceded by a backslash.
///
/// The returned pieces are still escaped; see [`unescape_field`].
pub(crate) fn split_unescaped(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == separator {
            parts.push(&input[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&input[start..]);
    parts
}

/// Decode `\;` `\,` `\:` `\\` `\"` in a WIFI/MECARD/MATMSG field value.
/// Any other backslash is kept as written.
pub(crate) fn unescape_field(value: &str) -> String {
    unescape_with(value, |c| matches!(c, ';' | ',' | ':' | '\\' | '"').then_some(c))
}

/// Decode vCard text escapes (`\,` `\;` `\\` `\n`).
pub(crate) fn unescape_vcard(value: &str) -> String {
    unescape_with(value, |c| match c {
        ';' | ',' | '\\' => Some(c),
        'n' | 'N' => Some('\n'),
        _ => None,
    })
}

fn unescape_with(value: &str, decode: impl Fn(char) -> Option<char>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next) => match decode(next) {
                Some(decoded) => out.push(decoded),
                None => {
                    out.push('\\');
                    out.push(next);
                }
            },
            None => out.push('\\'),
        }
    }
    out
}

/// Percent-decode a URI component. Invalid UTF-8 leaves the input untouched.
pub(crate) fn percent_decode(value: &str) -> String {
    urlencoding::decode(value)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| value.to_string())
}

/// Trimmed value, or `None` when nothing is left.
pub(crate) fn non_empty(value: impl AsRef<str>) -> Option<String> {
    let trimmed = value.as_ref().trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Digits, a leading `+`, spaces, hyphens, and parentheses, with at least three digits.
pub(crate) fn is_phone_number(value: &str) -> bool {
    let mut digits = 0usize;
    for (i, c) in value.char_indices() {
        match c {
            '0'..='9' => digits += 1,
            '+' if i == 0 => {}
            ' ' | '-' | '(' | ')' => {}
            _ => return false,
        }
    }
    digits >= 3
}

/// `local@domain` with a non-empty local part and a dotted domain.
pub(crate) fn is_email_address(value: &str) -> bool {
    const FORBIDDEN: &[char] = &['<', '>', '(', ')', '[', ']', '\\', ',', ';', ':', '"'];

    if value
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || FORBIDDEN.contains(&c))
    {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let mut labels = 0;
    for label in domain.split('.') {
        if !is_host_label(label) {
            return false;
        }
        labels += 1;
    }
    labels >= 2
}

/// One DNS label: non-empty, alphanumeric (any script) or `-`.
pub(crate) fn is_host_label(label: &str) -> bool {
    !label.is_empty() && label.chars().all(|c| c.is_alphanumeric() || c == '-')
}
