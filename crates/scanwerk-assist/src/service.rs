// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Assist service: a backend behind a fixed-interval gate.
//
// At most one request is accepted per cooldown window. The time of the last
// accepted request lives here and nowhere else.

use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use scanwerk_core::error::{Result, ScanwerkError};
use scanwerk_core::human_errors::humanize_error;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What the assistant is given to work on.
#[derive(Debug, Clone, Copy)]
pub enum AssistInput<'a> {
    /// Recognised or decoded text.
    Text(&'a str),
    /// Encoded image bytes (JPEG/PNG) straight from the camera.
    Image(&'a [u8]),
}

impl AssistInput<'_> {
    fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Image(bytes) => bytes.is_empty(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Image(_) => "image",
        }
    }
}

/// What the assistant is asked to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistMode {
    Summarize,
    Explain,
    Translate { target: String },
    /// Describe the contents of an image.
    Describe,
}

impl AssistMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summarize => "summarize",
            Self::Explain => "explain",
            Self::Translate { .. } => "translate",
            Self::Describe => "describe",
        }
    }
}

/// Result of an assist request. Callers branch on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistOutcome {
    Success { text: String },
    /// Refused without contacting the backend; retry after `remaining_wait`.
    RateLimited { remaining_wait: Duration },
    /// Short human-readable failure message.
    Error { message: String },
}

/// The remote service itself (HTTP client, on-device model, test double).
pub trait AssistBackend: Send + Sync {
    fn process(&self, input: &AssistInput<'_>, mode: &AssistMode) -> Result<String>;
}

impl<B: AssistBackend + ?Sized> AssistBackend for Box<B> {
    fn process(&self, input: &AssistInput<'_>, mode: &AssistMode) -> Result<String> {
        (**self).process(input, mode)
    }
}

/// Backend used until the host registers a real one.
///
/// Every request fails as unconfigured, which still counts against the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredBackend;

impl AssistBackend for UnconfiguredBackend {
    fn process(&self, _input: &AssistInput<'_>, _mode: &AssistMode) -> Result<String> {
        Err(ScanwerkError::Assist("no assist backend configured: missing api key".into()))
    }
}

/// Rate-limited front for an [`AssistBackend`].
///
/// A request counts against the window as soon as it is accepted, whether
/// the backend then succeeds or fails. Requests rejected before the gate
/// (empty input) do not.
pub struct AssistService<B> {
    backend: B,
    gate: Mutex<Gate>,
}

/// Cooldown and last accepted request, guarded together so a cooldown
/// change and an acceptance can't interleave.
#[derive(Debug)]
struct Gate {
    cooldown: Duration,
    last_accepted: Option<Instant>,
}

impl<B: AssistBackend> AssistService<B> {
    pub fn new(backend: B, cooldown: Duration) -> Self {
        Self {
            backend,
            gate: Mutex::new(Gate {
                cooldown,
                last_accepted: None,
            }),
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.gate().cooldown
    }

    /// Change the cooldown. The last accepted request keeps counting, so the
    /// current window grows or shrinks with it.
    pub fn set_cooldown(&self, cooldown: Duration) {
        debug!(cooldown_secs = cooldown.as_secs(), "assist cooldown changed");
        self.gate().cooldown = cooldown;
    }

    /// Time until the next request would be accepted, or `None` if one would be now.
    pub fn remaining_wait(&self) -> Option<Duration> {
        self.remaining_wait_at(Instant::now())
    }

    /// Send `input` to the backend if the cooldown allows it.
    #[instrument(skip_all, fields(input = input.kind(), mode = mode.as_str()))]
    pub fn process(&self, input: AssistInput<'_>, mode: &AssistMode) -> AssistOutcome {
        self.process_at(Instant::now(), input, mode)
    }

    fn process_at(&self, now: Instant, input: AssistInput<'_>, mode: &AssistMode) -> AssistOutcome {
        if input.is_empty() {
            return error_outcome(&ScanwerkError::Assist("empty input".into()));
        }

        if let Err(remaining_wait) = self.try_accept(now) {
            debug!(
                remaining_ms = remaining_wait.as_millis(),
                "assist request rate-limited"
            );
            return AssistOutcome::RateLimited { remaining_wait };
        }

        match self.backend.process(&input, mode) {
            Ok(text) => {
                info!(response_len = text.len(), "assist request completed");
                AssistOutcome::Success { text }
            }
            Err(e) => {
                warn!(error = %e, "assist request failed");
                error_outcome(&e)
            }
        }
    }

    /// Claim the window at `now`, or report how long until it reopens.
    fn try_accept(&self, now: Instant) -> std::result::Result<(), Duration> {
        let mut gate = self.gate();

        if let Some(remaining) = remaining_after(gate.last_accepted, now, gate.cooldown) {
            return Err(remaining);
        }
        gate.last_accepted = Some(now);
        Ok(())
    }

    fn remaining_wait_at(&self, now: Instant) -> Option<Duration> {
        let gate = self.gate();
        remaining_after(gate.last_accepted, now, gate.cooldown)
    }

    fn gate(&self) -> MutexGuard<'_, Gate> {
        self.gate
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn remaining_after(last: Option<Instant>, now: Instant, cooldown: Duration) -> Option<Duration> {
    let elapsed = now.saturating_duration_since(last?);
    (elapsed < cooldown).then(|| cooldown - elapsed)
}

fn error_outcome(err: &ScanwerkError) -> AssistOutcome {
    AssistOutcome::Error {
        message: humanize_error(err).to_string(),
    }
}
