// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Contact cards in MECARD (`MECARD:N:...;TEL:...;EMAIL:...;ORG:...;;`) and
// vCard (`BEGIN:VCARD` ... `END:VCARD`) form.
//
// Only the first value of each field is kept.

use crate::action::Action;
use crate::text::{non_empty, split_unescaped, strip_prefix_ci, unescape_field, unescape_vcard};

pub fn detect(input: &str) -> Option<Action> {
    let fields = if let Some(body) = strip_prefix_ci(input, "MECARD:") {
        parse_mecard(body)
    } else if is_vcard(input) {
        parse_vcard(input)
    } else {
        return None;
    };
    fields.into_action()
}

#[derive(Debug, Default)]
struct ContactFields {
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    organization: Option<String>,
}

impl ContactFields {
    fn into_action(self) -> Option<Action> {
        if self.name.is_none() && self.phone.is_none() && self.email.is_none() {
            return None;
        }
        Some(Action::AddContact {
            name: self.name,
            phone: self.phone,
            email: self.email,
            organization: self.organization,
        })
    }
}

/// Fill `slot` with the first non-empty value seen.
fn set_once(slot: &mut Option<String>, value: impl AsRef<str>) {
    if slot.is_none() {
        *slot = non_empty(value);
    }
}

// -- MECARD ---------------------------------------------------------------

fn parse_mecard(body: &str) -> ContactFields {
    let mut fields = ContactFields::default();

    for field in split_unescaped(body, ';') {
        let Some((key, value)) = field.split_once(':') else {
            continue;
        };
        match key.trim().to_ascii_uppercase().as_str() {
            "N" => set_once(&mut fields.name, mecard_name(value)),
            "TEL" => set_once(&mut fields.phone, unescape_field(value)),
            "EMAIL" => set_once(&mut fields.email, unescape_field(value)),
            "ORG" => set_once(&mut fields.organization, unescape_field(value)),
            _ => {}
        }
    }
    fields
}

/// MECARD names are written `Last,First`; present them as `First Last`.
fn mecard_name(raw: &str) -> String {
    match split_unescaped(raw, ',').as_slice() {
        [last, first] => join_name(&unescape_field(first), &unescape_field(last)),
        _ => unescape_field(raw),
    }
}

fn join_name(first: &str, last: &str) -> String {
    [first.trim(), last.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

// -- vCard ----------------------------------------------------------------

fn is_vcard(input: &str) -> bool {
    input
        .lines()
        .next()
        .is_some_and(|first| first.trim().eq_ignore_ascii_case("BEGIN:VCARD"))
}

fn parse_vcard(input: &str) -> ContactFields {
    let mut fields = ContactFields::default();
    let mut full_name: Option<String> = None;
    let mut structured_name: Option<String> = None;

    for line in unfold_lines(input).iter().skip(1) {
        let Some((head, value)) = line.split_once(':') else {
            continue;
        };
        // `item1.TEL;TYPE=CELL` -> `TEL`
        let property = head.split(';').next().unwrap_or(head);
        let property = property.rsplit('.').next().unwrap_or(property);

        match property.trim().to_ascii_uppercase().as_str() {
            "END" => break,
            "FN" => set_once(&mut full_name, unescape_vcard(value)),
            "N" => set_once(&mut structured_name, vcard_structured_name(value)),
            "TEL" => {
                let number = strip_prefix_ci(value, "tel:").unwrap_or(value);
                set_once(&mut fields.phone, unescape_vcard(number));
            }
            "EMAIL" => set_once(&mut fields.email, unescape_vcard(value)),
            "ORG" => {
                let first = split_unescaped(value, ';')
                    .into_iter()
                    .map(unescape_vcard)
                    .find(|component| !component.trim().is_empty());
                if let Some(first) = first {
                    set_once(&mut fields.organization, first);
                }
            }
            _ => {}
        }
    }

    fields.name = full_name.or(structured_name);
    fields
}

/// `N:Family;Given;Additional;Prefix;Suffix` -> `Given Family`.
fn vcard_structured_name(value: &str) -> String {
    let parts = split_unescaped(value, ';');
    let family = parts.first().map(|p| unescape_vcard(p)).unwrap_or_default();
    let given = parts.get(1).map(|p| unescape_vcard(p)).unwrap_or_default();
    join_name(&given, &family)
}

/// Join folded continuation lines (leading space or tab) onto their parent.
fn unfold_lines(input: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for line in input.lines() {
        if let Some(continuation) = line.strip_prefix(&[' ', '\t'][..])
            && let Some(previous) = lines.last_mut()
        {
            previous.push_str(continuation);
            continue;
        }
        lines.push(line.to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(
        name: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
        organization: Option<&str>,
    ) -> Action {
        Action::AddContact {
            name: name.map(Into::into),
            phone: phone.map(Into::into),
            email: email.map(Into::into),
            organization: organization.map(Into::into),
        }
    }

    #[test]
    fn mecard_all_fields() {
        assert_eq!(
            detect("MECARD:N:Doe,John;TEL:+15550100;EMAIL:john@example.com;ORG:Acme;;"),
            Some(contact(
                Some("John Doe"),
                Some("+15550100"),
                Some("john@example.com"),
                Some("Acme")
            ))
        );
    }

    #[test]
    fn mecard_first_value_wins() {
        assert_eq!(
            detect("mecard:TEL:111;TEL:222;N:Solo;;"),
            Some(contact(Some("Solo"), Some("111"), None, None))
        );
    }

    #[test]
    fn mecard_escaped_name() {
        assert_eq!(
            detect(r"MECARD:N:Smith\, Jr.;;"),
            Some(contact(Some("Smith, Jr."), None, None, None))
        );
    }

    #[test]
    fn mecard_without_identity_fields() {
        assert_eq!(detect("MECARD:ORG:Acme;NOTE:hello;;"), None);
    }

    #[test]
    fn vcard_basic() {
        let card = "BEGIN:VCARD\r\nVERSION:3.0\r\nN:Doe;Jane;;;\r\nFN:Jane Doe\r\n\
                    TEL;TYPE=CELL:+1 555 0100\r\nEMAIL;TYPE=INTERNET:jane@example.com\r\n\
                    ORG:Example Corp;Research\r\nEND:VCARD";
        assert_eq!(
            detect(card),
            Some(contact(
                Some("Jane Doe"),
                Some("+1 555 0100"),
                Some("jane@example.com"),
                Some("Example Corp")
            ))
        );
    }

    #[test]
    fn vcard_structured_name_fallback() {
        let card = "BEGIN:VCARD\nVERSION:4.0\nN:Lovelace;Ada;;;\nTEL;VALUE=uri:tel:+44-20-0000\nEND:VCARD";
        assert_eq!(
            detect(card),
            Some(contact(Some("Ada Lovelace"), Some("+44-20-0000"), None, None))
        );
    }

    #[test]
    fn vcard_grouped_and_folded() {
        let card = "BEGIN:VCARD\nitem1.EMAIL:very.long.address\n @example.org\nFN:Folded\nEND:VCARD";
        assert_eq!(
            detect(card),
            Some(contact(
                Some("Folded"),
                None,
                Some("very.long.address@example.org"),
                None
            ))
        );
    }

    #[test]
    fn vcard_stops_at_end() {
        let card = "BEGIN:VCARD\nORG:Acme\nEND:VCARD\nFN:After End";
        assert_eq!(detect(card), None);
    }

    #[test]
    fn vcard_escapes() {
        let card = "BEGIN:VCARD\nFN:Doe\\, Jane\nEND:VCARD";
        assert_eq!(detect(card), Some(contact(Some("Doe, Jane"), None, None, None)));
    }

    #[test]
    fn not_a_card() {
        assert_eq!(detect("BEGIN:VCALENDAR\nEND:VCALENDAR"), None);
        assert_eq!(detect("Dear John, call me"), None);
    }
}
