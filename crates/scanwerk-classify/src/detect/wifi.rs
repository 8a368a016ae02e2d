// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// WiFi network configuration: `WIFI:T:<type>;S:<ssid>;P:<password>;H:<hidden>;;`
//
// Fields may appear in any order. The `;;` terminator is optional.
//
// A missing `T` means an open network even when `P` is present; the password
// is still carried so the platform can offer it.

use crate::action::{Action, WifiSecurity};
use crate::text::{split_unescaped, strip_prefix_ci, unescape_field};

pub fn detect(input: &str) -> Option<Action> {
    let body = strip_prefix_ci(input, "WIFI:")?;

    let mut ssid: Option<String> = None;
    let mut password: Option<String> = None;
    let mut kind: Option<String> = None;
    let mut hidden = false;

    for field in split_unescaped(body, ';') {
        let Some((key, value)) = field.split_once(':') else {
            continue;
        };
        let value = unescape_field(value);
        match key.trim().to_ascii_uppercase().as_str() {
            "S" if ssid.is_none() => ssid = Some(value),
            "P" if password.is_none() => password = Some(value),
            "T" if kind.is_none() => kind = Some(value),
            "H" => hidden = value.trim().eq_ignore_ascii_case("true"),
            _ => {}
        }
    }

    let ssid = ssid.filter(|s| !s.is_empty())?;
    let password = password.filter(|p| !p.is_empty());
    let security = security_for(kind.as_deref(), password.is_some());

    // A protected network without a password cannot be joined.
    if security != WifiSecurity::Open && password.is_none() {
        return None;
    }

    Some(Action::ConnectWifi {
        ssid,
        password,
        security,
        hidden,
    })
}

fn security_for(kind: Option<&str>, has_password: bool) -> WifiSecurity {
    let kind = kind.map(str::trim).unwrap_or("");
    if kind.is_empty() || kind.eq_ignore_ascii_case("nopass") {
        WifiSecurity::Open
    } else if kind.eq_ignore_ascii_case("WPA") {
        WifiSecurity::Wpa
    } else if kind.eq_ignore_ascii_case("WEP") {
        WifiSecurity::Wep
    } else if has_password {
        // WPA2, WPA3, SAE and vendor spellings.
        WifiSecurity::Wpa
    } else {
        WifiSecurity::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wifi(ssid: &str, password: Option<&str>, security: WifiSecurity) -> Action {
        Action::ConnectWifi {
            ssid: ssid.into(),
            password: password.map(Into::into),
            security,
            hidden: false,
        }
    }

    #[test]
    fn wpa_network() {
        assert_eq!(
            detect("WIFI:T:WPA;S:MyNet;P:secret123;;"),
            Some(wifi("MyNet", Some("secret123"), WifiSecurity::Wpa))
        );
    }

    #[test]
    fn open_network() {
        assert_eq!(
            detect("WIFI:T:nopass;S:Guest;;"),
            Some(wifi("Guest", None, WifiSecurity::Open))
        );
    }

    #[test]
    fn fields_in_any_order_and_case() {
        assert_eq!(
            detect("wifi:p:pw;s:Cafe;t:wep;;"),
            Some(wifi("Cafe", Some("pw"), WifiSecurity::Wep))
        );
    }

    #[test]
    fn escaped_values() {
        assert_eq!(
            detect(r#"WIFI:S:My\;Net\:5G;T:WPA;P:pa\\ss\,word;;"#),
            Some(wifi("My;Net:5G", Some(r"pa\ss,word"), WifiSecurity::Wpa))
        );
    }

    #[test]
    fn missing_ssid_is_not_a_match() {
        assert_eq!(detect("WIFI:T:WPA;P:secret;;"), None);
        assert_eq!(detect("WIFI:S:;T:nopass;;"), None);
        assert_eq!(detect("WIFI:"), None);
    }

    #[test]
    fn protected_network_needs_password() {
        assert_eq!(detect("WIFI:T:WPA;S:Locked;;"), None);
    }

    #[test]
    fn unknown_type_depends_on_password() {
        assert_eq!(
            detect("WIFI:T:WPA2;S:Home;P:pw;;"),
            Some(wifi("Home", Some("pw"), WifiSecurity::Wpa))
        );
        assert_eq!(
            detect("WIFI:T:SAE;S:Home;;"),
            Some(wifi("Home", None, WifiSecurity::Open))
        );
    }

    #[test]
    fn absent_type_is_open() {
        assert_eq!(
            detect("WIFI:S:Lobby;;"),
            Some(wifi("Lobby", None, WifiSecurity::Open))
        );
    }

    #[test]
    fn absent_type_with_password_stays_open() {
        assert_eq!(
            detect("WIFI:S:Net;P:pw;;"),
            Some(wifi("Net", Some("pw"), WifiSecurity::Open))
        );
        assert_eq!(
            detect("WIFI:S:Net;T:;P:pw;;"),
            Some(wifi("Net", Some("pw"), WifiSecurity::Open))
        );
    }

    #[test]
    fn nopass_keeps_supplied_password() {
        assert_eq!(
            detect("WIFI:T:nopass;S:Guest;P:welcome;;"),
            Some(wifi("Guest", Some("welcome"), WifiSecurity::Open))
        );
    }

    #[test]
    fn hidden_flag() {
        let Some(Action::ConnectWifi { hidden, .. }) = detect("WIFI:S:Stealth;T:WPA;P:x;H:true;;")
        else {
            panic!("expected a wifi action");
        };
        assert!(hidden);
    }

    #[test]
    fn terminator_optional() {
        assert_eq!(
            detect("WIFI:S:Net;T:WPA;P:pw"),
            Some(wifi("Net", Some("pw"), WifiSecurity::Wpa))
        );
    }

    #[test]
    fn other_prefixes_ignored() {
        assert_eq!(detect("WIFIS:S:Net;;"), None);
        assert_eq!(detect("https://wifi.example.com"), None);
    }
}
