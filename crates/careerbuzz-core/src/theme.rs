//! Light/dark theme preference.
//!
//! `ThemeController` owns the current preference. It reads the persisted value
//! once at construction, writes it back on every toggle, and forwards every
//! change to a `PresentationMode` port. Persistence failures never surface to
//! the caller: the in-memory value stays authoritative.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::preferences::PreferenceStore;

/// Preference key under which the theme is stored.
pub const THEME_PREFERENCE_KEY: &str = "cb_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(format!("Unknown theme: {other}")),
        }
    }
}

/// Presentation port: receives the active theme whenever it is applied.
pub trait PresentationMode: Send + Sync {
    fn apply(&self, theme: ThemePreference);
}

/// Presentation port that ignores every change (headless commands).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPresentation;

impl PresentationMode for NoPresentation {
    fn apply(&self, _theme: ThemePreference) {}
}

pub struct ThemeController {
    current: ThemePreference,
    store: Arc<dyn PreferenceStore>,
    presentation: Arc<dyn PresentationMode>,
}

impl ThemeController {
    /// Reads the initial preference and applies it to the presentation port.
    ///
    /// Missing, unreadable or unrecognised values fall back to dark.
    pub fn load(store: Arc<dyn PreferenceStore>, presentation: Arc<dyn PresentationMode>) -> Self {
        let current = match store.get(THEME_PREFERENCE_KEY) {
            Ok(Some(raw)) => raw.parse::<ThemePreference>().unwrap_or_else(|err| {
                tracing::warn!("Ignoring stored theme: {err}");
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(err) => {
                tracing::warn!("Theme preference unavailable, using default: {err:#}");
                ThemePreference::default()
            }
        };

        presentation.apply(current);
        tracing::debug!(theme = %current, "Theme loaded");

        Self {
            current,
            store,
            presentation,
        }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Flips the preference, persists it, and applies it. Returns the new value.
    pub fn toggle(&mut self) -> ThemePreference {
        self.current = self.current.toggled();

        if let Err(err) = self.store.set(THEME_PREFERENCE_KEY, self.current.as_str()) {
            tracing::warn!("Failed to persist theme preference: {err:#}");
        }
        self.presentation.apply(self.current);
        tracing::debug!(theme = %self.current, "Theme toggled");

        self.current
    }
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::preferences::MemoryPreferenceStore;

    #[derive(Default)]
    struct RecordingPresentation {
        applied: Mutex<Vec<ThemePreference>>,
    }

    impl PresentationMode for RecordingPresentation {
        fn apply(&self, theme: ThemePreference) {
            self.applied.lock().unwrap().push(theme);
        }
    }

    fn controller_with(
        store: MemoryPreferenceStore,
    ) -> (
        ThemeController,
        Arc<MemoryPreferenceStore>,
        Arc<RecordingPresentation>,
    ) {
        let store = Arc::new(store);
        let presentation = Arc::new(RecordingPresentation::default());
        let controller = ThemeController::load(
            Arc::clone(&store) as Arc<dyn PreferenceStore>,
            Arc::clone(&presentation) as Arc<dyn PresentationMode>,
        );
        (controller, store, presentation)
    }

    #[test]
    fn test_defaults_to_dark_without_stored_value() {
        let (controller, _, presentation) = controller_with(MemoryPreferenceStore::new());

        assert_eq!(controller.current(), ThemePreference::Dark);
        assert_eq!(
            *presentation.applied.lock().unwrap(),
            vec![ThemePreference::Dark]
        );
    }

    #[test]
    fn test_reads_stored_light() {
        let (controller, _, _) =
            controller_with(MemoryPreferenceStore::with_value(THEME_PREFERENCE_KEY, "light"));

        assert_eq!(controller.current(), ThemePreference::Light);
    }

    #[test]
    fn test_unknown_stored_value_falls_back_to_dark() {
        let (controller, _, _) =
            controller_with(MemoryPreferenceStore::with_value(THEME_PREFERENCE_KEY, "sepia"));

        assert_eq!(controller.current(), ThemePreference::Dark);
    }

    #[test]
    fn test_persisted_value_tracks_toggle_parity() {
        let (mut controller, store, _) = controller_with(MemoryPreferenceStore::new());

        for n in 1..=7 {
            controller.toggle();
            let expected = if n % 2 == 0 { "dark" } else { "light" };
            assert_eq!(store.peek(THEME_PREFERENCE_KEY).as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_toggle_applies_presentation_each_time() {
        let (mut controller, _, presentation) = controller_with(MemoryPreferenceStore::new());

        controller.toggle();
        controller.toggle();

        assert_eq!(
            *presentation.applied.lock().unwrap(),
            vec![
                ThemePreference::Dark,
                ThemePreference::Light,
                ThemePreference::Dark
            ]
        );
    }

    #[test]
    fn test_unavailable_store_is_session_only() {
        let (mut controller, _, presentation) =
            controller_with(MemoryPreferenceStore::unavailable());

        assert_eq!(controller.current(), ThemePreference::Dark);
        assert_eq!(controller.toggle(), ThemePreference::Light);
        assert_eq!(controller.current(), ThemePreference::Light);
        assert_eq!(
            presentation.applied.lock().unwrap().last(),
            Some(&ThemePreference::Light)
        );
    }

    #[test]
    fn test_parse_and_display_round_trip_names() {
        assert_eq!("light".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert_eq!(" dark\n".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert!("Dark".parse::<ThemePreference>().is_err());
        assert_eq!(ThemePreference::Light.to_string(), "light");
    }
}
