// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer: initialises the history store and settings and
// exposes the operations the commands need.
//
// The SQLite-backed `HistoryStore` is `Send` but not `Sync`, so it is wrapped
// in `Arc<Mutex<>>` and written from a background thread; classification
// never waits on it.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use scanwerk_assist::{
    AssistBackend, AssistInput, AssistMode, AssistOutcome, AssistService, UnconfiguredBackend,
};
use scanwerk_classify::{Action, Classifier};
use scanwerk_core::Settings;
use scanwerk_core::error::Result;
use scanwerk_core::types::ScanRecord;
use scanwerk_history::HistoryStore;
use tracing::{error, info, warn};

/// Shared application services.
///
/// All fields are cheaply cloneable so the struct can move into worker
/// threads.
#[derive(Clone)]
pub struct AppServices {
    history: Arc<Mutex<HistoryStore>>,
    classifier: Classifier,
    assist: Arc<AssistService<Box<dyn AssistBackend>>>,
    data_dir: PathBuf,
    settings: Arc<Mutex<Settings>>,
}

impl AppServices {
    /// Initialise all services.  Call once at startup.
    ///
    /// Loads settings from `data_dir` (defaults when absent) and opens the
    /// history database sized to the configured limit.
    pub fn init(data_dir: PathBuf) -> Result<Self> {
        info!(path = %data_dir.display(), "initialising app services");

        let settings = load_settings(&data_dir).unwrap_or_default();
        let history = HistoryStore::open(data_dir.join(HISTORY_FILE))?
            .with_capacity(settings.history_limit());

        Ok(Self::assemble(history, data_dir, settings))
    }

    /// Services with an in-memory history, for when the database can't be opened.
    pub fn fallback(data_dir: PathBuf) -> Result<Self> {
        let settings = load_settings(&data_dir).unwrap_or_default();
        let history = HistoryStore::open_in_memory()?.with_capacity(settings.history_limit());

        Ok(Self::assemble(history, data_dir, settings))
    }

    fn assemble(history: HistoryStore, data_dir: PathBuf, settings: Settings) -> Self {
        let assist = AssistService::new(
            Box::new(UnconfiguredBackend) as Box<dyn AssistBackend>,
            settings.assist_cooldown(),
        );
        Self {
            history: Arc::new(Mutex::new(history)),
            classifier: Classifier::new(),
            assist: Arc::new(assist),
            data_dir,
            settings: Arc::new(Mutex::new(settings)),
        }
    }

    // -- Classification ------------------------------------------------------

    pub fn classify(&self, text: &str) -> Vec<Action> {
        self.classifier.classify(text)
    }

    // -- Assist --------------------------------------------------------------

    /// Replace the assist backend. The configured cooldown carries over and
    /// the rate-limit window starts fresh.
    pub fn with_assist_backend(mut self, backend: impl AssistBackend + 'static) -> Self {
        let cooldown = self.assist.cooldown();
        self.assist = Arc::new(AssistService::new(
            Box::new(backend) as Box<dyn AssistBackend>,
            cooldown,
        ));
        self
    }

    /// Run an assist request through the shared rate-limited service.
    pub fn assist(&self, input: AssistInput<'_>, mode: &AssistMode) -> AssistOutcome {
        self.assist.process(input, mode)
    }

    // -- History -------------------------------------------------------------

    /// Append `record` on a background thread.
    ///
    /// Failures are logged, never surfaced: losing a history entry must not
    /// affect the scan result.
    pub fn record_scan(&self, record: ScanRecord) -> JoinHandle<()> {
        let history = Arc::clone(&self.history);
        std::thread::spawn(move || {
            let store = history.lock().unwrap_or_else(PoisonError::into_inner);
            if let Err(e) = store.append(&record) {
                error!(error = %e, "failed to record scan in history");
            }
        })
    }

    /// Newest-first history, at most `limit` records.
    pub fn history(&self, limit: usize) -> Result<Vec<ScanRecord>> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .recent(limit)
    }

    pub fn clear_history(&self) -> Result<()> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear()
    }

    // -- Settings ------------------------------------------------------------

    /// Get a clone of the current settings.
    pub fn settings(&self) -> Settings {
        self.settings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Update and persist the settings.
    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        persist_settings(&self.data_dir, settings)?;
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .set_capacity(settings.history_limit());
        if self.assist.cooldown() != settings.assist_cooldown() {
            self.assist.set_cooldown(settings.assist_cooldown());
        }
        *self.settings.lock().unwrap_or_else(PoisonError::into_inner) = settings.clone();
        Ok(())
    }
}

// -- Settings file persistence -------------------------------------------------

const SETTINGS_FILE: &str = "settings.json";
const HISTORY_FILE: &str = "history.db";

fn load_settings(data_dir: &Path) -> Option<Settings> {
    let path = data_dir.join(SETTINGS_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str::<Settings>(&data) {
        Ok(settings) => Some(settings.sanitized()),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable settings file");
            None
        }
    }
}

fn persist_settings(data_dir: &Path, settings: &Settings) -> Result<()> {
    let path = data_dir.join(SETTINGS_FILE);
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(&path, json)?;
    Ok(())
}
