use crate::theme::{Theme, ThemeKind, THEME_ENV_VAR};
use std::time::Duration;

/// How long the "Loading profile..." spinner runs before About is shown.
pub const LOADING_DELAY: Duration = Duration::from_millis(600);

/// Startup configuration. Built once in `main` and passed down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub theme: Theme,
    pub loading_delay: Duration,
}

impl Config {
    /// Read the theme from `TERM_THEME`. A missing or non-unicode value
    /// falls back to the dark preset.
    pub fn from_env() -> Self {
        let value = std::env::var(THEME_ENV_VAR).ok();
        let config = Config::from_theme_value(value.as_deref());
        log::debug!("{}={:?} -> {:?} theme", THEME_ENV_VAR, value, config.theme.kind);
        config
    }

    pub fn from_theme_value(value: Option<&str>) -> Self {
        Config {
            theme: Theme::for_kind(ThemeKind::from_env_value(value)),
            loading_delay: LOADING_DELAY,
        }
    }

    /// Same config without the spinner pause.
    pub fn without_delay(mut self) -> Self {
        self.loading_delay = Duration::ZERO;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from_theme_value(None)
    }
}
