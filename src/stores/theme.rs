use yew::prelude::*;

use crate::utils::{get_local_storage, STORAGE_KEY_THEME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

pub fn load_theme() -> ThemeMode {
    get_local_storage()
        .and_then(|s| s.get_item(STORAGE_KEY_THEME).ok().flatten())
        .map(|v| ThemeMode::from_str(&v))
        .unwrap_or_default()
}

pub fn store_theme(mode: ThemeMode) {
    if let Some(storage) = get_local_storage() {
        if let Err(e) = storage.set_item(STORAGE_KEY_THEME, mode.as_str()) {
            log::warn!("⚠️ Could not persist theme: {:?}", e);
        }
    }
}

/// Mirror the mode onto <html data-theme="..."> so CSS variables switch.
pub fn apply_to_document(mode: ThemeMode) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        if let Err(e) = root.set_attribute("data-theme", mode.as_str()) {
            log::warn!("⚠️ Could not apply theme attribute: {:?}", e);
        }
    }
}

/// Shared via ContextProvider from the app root; any component can read the
/// current mode or flip it.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub mode: ThemeMode,
    pub toggle: Callback<()>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_string_round_trip() {
        assert_eq!(ThemeMode::from_str("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_str("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_str("garbage"), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn toggling_flips_between_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }
}
