// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanwerk: Native platform bridge abstractions.
//
// Traits for the untrusted text producers (camera, text recogniser, barcode
// decoder) and for the platform operations an action turns into. The host
// app supplies the native implementation; `StubBridge` stands in elsewhere.

pub mod dispatch;
pub mod scan;
pub mod stub;
pub mod traits;

#[cfg(test)]
mod testing;

pub use dispatch::perform;
pub use scan::{ScanOutput, scan_image};
pub use traits::PlatformBridge;

/// Bridge used when the host has not registered a native one.
///
/// Every capability reports `PlatformUnavailable`.
pub fn platform_bridge() -> Box<dyn traits::PlatformBridge> {
    Box::new(stub::StubBridge)
}
