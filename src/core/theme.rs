use crate::errors::{AppError, AppResult};
use crate::models::Theme;
use crate::store::{KeyValueStore, THEME_KEY};
use std::env;

/// Persistence and resolution of the colour theme under `appTheme`.
pub struct ThemeStore;

impl ThemeStore {
    /// Explicit preference, if one was saved and is a known literal.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Option<Theme> {
        store
            .get(THEME_KEY)
            .ok()
            .flatten()
            .and_then(|raw| Theme::from_stored(&raw))
    }

    pub fn load_strict<S: KeyValueStore + ?Sized>(store: &S) -> AppResult<Option<Theme>> {
        match store.get(THEME_KEY)? {
            None => Ok(None),
            Some(raw) => Theme::from_stored(&raw)
                .map(Some)
                .ok_or_else(|| AppError::CorruptedState(THEME_KEY.to_string())),
        }
    }

    pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, theme: Theme) -> AppResult<()> {
        store.set(THEME_KEY, theme.as_str())
    }

    /// Saved preference, then the terminal's dark-background signal, then light.
    pub fn resolve(saved: Option<Theme>, os_prefers_dark: Option<bool>) -> Theme {
        match (saved, os_prefers_dark) {
            (Some(theme), _) => theme,
            (None, Some(true)) => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Theme to start a session with.
    pub fn initial<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
        Self::resolve(Self::load(store), os_prefers_dark())
    }
}

/// Dark-background hint from `COLORFGBG`, if the terminal sets it.
pub fn os_prefers_dark() -> Option<bool> {
    env::var("COLORFGBG")
        .ok()
        .and_then(|v| parse_colorfgbg(&v))
}

/// `COLORFGBG` is `fg;bg` (some terminals insert a middle field). Background
/// indexes 0-6 and 8 are the dark half of the 16-colour palette.
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}
