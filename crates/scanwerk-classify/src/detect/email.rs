// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Email: `mailto:<address>[?subject=...&body=...]`, the `MATMSG:` QR format,
// or a bare address.

use crate::action::Action;
use crate::text::{
    is_email_address, non_empty, percent_decode, split_unescaped, strip_prefix_ci,
    unescape_field,
};

pub fn detect(input: &str) -> Option<Action> {
    if let Some(rest) = strip_prefix_ci(input, "mailto:") {
        return from_mailto(rest);
    }
    if let Some(rest) = strip_prefix_ci(input, "MATMSG:") {
        return from_matmsg(rest);
    }
    if is_email_address(input) {
        return Some(Action::SendEmail {
            email: input.to_string(),
            subject: None,
            body: None,
        });
    }
    None
}

fn from_mailto(rest: &str) -> Option<Action> {
    let (recipients, query) = match rest.split_once('?') {
        Some((recipients, query)) => (recipients, Some(query)),
        None => (rest, None),
    };

    // Several recipients may be listed; the first one is addressed.
    let address = percent_decode(recipients.split(',').next().unwrap_or(recipients));
    let address = address.trim();
    if !is_email_address(address) {
        return None;
    }

    let mut subject = None;
    let mut body = None;
    for pair in query.into_iter().flat_map(|q| q.split('&')) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key.eq_ignore_ascii_case("subject") && subject.is_none() {
            subject = non_empty(percent_decode(value));
        } else if key.eq_ignore_ascii_case("body") && body.is_none() {
            body = non_empty(percent_decode(value));
        }
    }

    Some(Action::SendEmail {
        email: address.to_string(),
        subject,
        body,
    })
}

fn from_matmsg(rest: &str) -> Option<Action> {
    let mut to = None;
    let mut subject = None;
    let mut body = None;

    for field in split_unescaped(rest, ';') {
        let Some((key, value)) = field.split_once(':') else {
            continue;
        };
        let slot = match key.trim().to_ascii_uppercase().as_str() {
            "TO" => &mut to,
            "SUB" => &mut subject,
            "BODY" => &mut body,
            _ => continue,
        };
        if slot.is_none() {
            *slot = non_empty(unescape_field(value));
        }
    }

    let email = to.filter(|address| is_email_address(address))?;
    Some(Action::SendEmail {
        email,
        subject,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(address: &str, subject: Option<&str>, body: Option<&str>) -> Action {
        Action::SendEmail {
            email: address.into(),
            subject: subject.map(Into::into),
            body: body.map(Into::into),
        }
    }

    #[test]
    fn mailto_with_subject() {
        assert_eq!(
            detect("mailto:a@b.com?subject=Hi"),
            Some(email("a@b.com", Some("Hi"), None))
        );
    }

    #[test]
    fn mailto_decodes_query() {
        assert_eq!(
            detect("MAILTO:team@example.org?Subject=Quarterly%20report&body=See%20attached%21"),
            Some(email(
                "team@example.org",
                Some("Quarterly report"),
                Some("See attached!")
            ))
        );
    }

    #[test]
    fn mailto_first_recipient() {
        assert_eq!(
            detect("mailto:one@example.com,two@example.com"),
            Some(email("one@example.com", None, None))
        );
    }

    #[test]
    fn mailto_invalid_address() {
        assert_eq!(detect("mailto:not-an-address"), None);
        assert_eq!(detect("mailto:"), None);
    }

    #[test]
    fn mailto_empty_params_are_none() {
        assert_eq!(
            detect("mailto:a@b.com?subject=&body="),
            Some(email("a@b.com", None, None))
        );
    }

    #[test]
    fn bare_address_preserves_case() {
        assert_eq!(
            detect("Jane.Doe@Example.com"),
            Some(email("Jane.Doe@Example.com", None, None))
        );
    }

    #[test]
    fn matmsg() {
        assert_eq!(
            detect(r"MATMSG:TO:info@example.com;SUB:Hello;BODY:Line\; two;;"),
            Some(email("info@example.com", Some("Hello"), Some("Line; two")))
        );
        assert_eq!(detect("MATMSG:SUB:No recipient;;"), None);
    }

    #[test]
    fn prose_is_not_email() {
        assert_eq!(detect("write to me at jane@example.com"), None);
    }
}
