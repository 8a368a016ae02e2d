// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `settings` commands.

use scanwerk_core::Settings;
use scanwerk_core::error::Result;
use tracing::info;

use super::{Output, SettingsAction};
use crate::services::app_services::AppServices;

pub fn run(services: &AppServices, out: &Output, action: SettingsAction) -> Result<()> {
    let mut settings = services.settings();

    match action {
        SettingsAction::Show => return out.emit(&settings, || render(&settings)),
        SettingsAction::Theme { mode } => settings.set_theme_mode(mode),
        SettingsAction::HighContrast { enabled } => settings.set_high_contrast(enabled),
        SettingsAction::Languages { languages } => settings.set_ocr_languages(languages)?,
        SettingsAction::HistoryLimit { limit } => settings.set_history_limit(limit)?,
        SettingsAction::AssistCooldown { secs } => settings.set_assist_cooldown_secs(secs),
    }

    services.save_settings(&settings)?;
    info!("settings saved");
    out.emit(&settings, || render(&settings))
}

fn render(settings: &Settings) -> String {
    let languages: Vec<&str> = settings.ocr_languages().iter().map(|l| l.as_str()).collect();
    format!(
        "theme:           {:?}\nhigh contrast:   {}\nlanguages:       {}\nhistory limit:   {}\nassist cooldown: {}s",
        settings.theme_mode(),
        settings.high_contrast(),
        languages.join(", "),
        settings.history_limit(),
        settings.assist_cooldown().as_secs(),
    )
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanwerk_core::ScanwerkError;
    use scanwerk_core::config::{OcrLanguage, ThemeMode};

    fn services() -> (tempfile::TempDir, AppServices) {
        let dir = tempfile::tempdir().unwrap();
        let services = AppServices::fallback(dir.path().to_path_buf()).unwrap();
        (dir, services)
    }

    #[test]
    fn changes_are_saved() {
        let (_dir, services) = services();
        let out = Output { json: true };
        run(&services, &out, SettingsAction::Theme { mode: ThemeMode::Light }).unwrap();
        run(
            &services,
            &out,
            SettingsAction::Languages {
                languages: vec![OcrLanguage::Japanese],
            },
        )
        .unwrap();

        let settings = services.settings();
        assert_eq!(settings.theme_mode(), ThemeMode::Light);
        assert_eq!(
            settings.ocr_languages().iter().copied().collect::<Vec<_>>(),
            vec![OcrLanguage::Japanese]
        );
    }

    #[test]
    fn zero_history_limit_is_rejected() {
        let (_dir, services) = services();
        let out = Output { json: false };
        let before = services.settings();
        let err = run(&services, &out, SettingsAction::HistoryLimit { limit: 0 }).unwrap_err();
        assert!(matches!(err, ScanwerkError::InvalidSetting(_)));
        assert_eq!(services.settings(), before);
    }

    #[test]
    fn render_lists_every_field() {
        let text = render(&Settings::default());
        assert!(text.contains("theme:           system"));
        assert!(text.contains("history limit:   50"));
        assert!(text.contains("assist cooldown: 30s"));
    }
}
