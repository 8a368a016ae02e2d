// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Action dispatch: turns a classified action into a platform operation.
//
// The match below is exhaustive over `Action`; adding a variant fails to
// compile until it is handled here.

use scanwerk_classify::Action;
use scanwerk_core::error::Result;
use tracing::{debug, warn};

use crate::traits::{ContactDetails, NativeIntents, WifiCredentials};

/// Perform `action` through the platform's intents.
pub fn perform<I: NativeIntents + ?Sized>(action: &Action, intents: &I) -> Result<()> {
    let kind = action.icon().as_str();
    debug!(kind, "performing action");

    let result = match action {
        Action::OpenUrl { url } => intents.open_url(url),
        Action::CallPhone { number } => intents.dial(number),
        Action::SendEmail {
            email,
            subject,
            body,
        } => intents.compose_email(email, subject.as_deref(), body.as_deref()),
        Action::ConnectWifi {
            ssid,
            password,
            security,
            hidden,
        } => intents.join_wifi(&WifiCredentials {
            ssid,
            password: password.as_deref(),
            security: *security,
            hidden: *hidden,
        }),
        Action::SendSms { number, message } => intents.compose_sms(number, message.as_deref()),
        Action::AddContact {
            name,
            phone,
            email,
            organization,
        } => intents.add_contact(&ContactDetails {
            name: name.as_deref(),
            phone: phone.as_deref(),
            email: email.as_deref(),
            organization: organization.as_deref(),
        }),
        Action::CopyText { text, label } => intents.copy_to_clipboard(label, text),
        Action::ShowRaw { text } => intents.show_text(text),
    };
    if let Err(e) = &result {
        warn!(kind, error = %e, "platform did not perform action");
    }
    result
}
