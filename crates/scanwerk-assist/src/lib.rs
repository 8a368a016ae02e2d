// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// scanwerk-assist: Boundary to the remote AI assist service.
//
// The service owns its rate limit: callers cannot bypass the cooldown and
// always receive a typed outcome (success / rate-limited / error) instead of
// a propagated fault.

pub mod service;

pub use service::{
    AssistBackend, AssistInput, AssistMode, AssistOutcome, AssistService, UnconfiguredBackend,
};
