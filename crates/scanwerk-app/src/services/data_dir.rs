// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data directory resolution.

use std::path::PathBuf;

use scanwerk_core::error::Result;

/// Return the application data directory, creating it if needed.
///
/// An explicit `override_dir` wins; otherwise a conventional desktop
/// location is used. On mobile the host app passes its documents directory.
pub fn data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    let dir = override_dir.unwrap_or_else(|| dirs_fallback().join("scanwerk"));
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn dirs_fallback() -> PathBuf {
    // Try XDG data dir, then fallback to home
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local").join("share");
    }
    std::env::temp_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let wanted = tmp.path().join("nested").join("scanwerk");
        let dir = data_dir(Some(wanted.clone())).unwrap();
        assert_eq!(dir, wanted);
        assert!(dir.is_dir());
    }
}
