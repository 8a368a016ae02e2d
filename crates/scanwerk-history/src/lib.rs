// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// scanwerk-history: Bounded scan history for the Scanwerk scanner.
//
// Append-then-trim SQLite store keeping only the most recent records.
// Callers run it off the interactive path; classification never waits on it.

pub mod store;

pub use store::HistoryStore;
