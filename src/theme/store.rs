//! Saving, restoring and resolving the current theme.

use std::collections::BTreeMap;

use axum::http::HeaderMap;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    storage::{THEME_KEY, get_item, remove_item, set_item},
    theme::{
        color::is_color_dark,
        preset::{DARK_THEME, DEFAULT_THEME, PRESETS, ThemePreset, find_preset},
    },
};

/// The client hint that carries the system colour scheme preference.
pub const COLOR_SCHEME_HINT: &str = "Sec-CH-Prefers-Color-Scheme";

/// A theme as saved in local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTheme {
    pub name: String,
    pub vars: BTreeMap<String, String>,
}

impl From<&ThemePreset> for StoredTheme {
    fn from(preset: &ThemePreset) -> Self {
        Self {
            name: preset.name.to_owned(),
            vars: preset
                .vars
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }
}

/// Whether the page is drawn with light or dark text styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// The colour scheme the client's system prefers, if it said.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSchemePreference {
    #[default]
    Light,
    Dark,
}

impl ColorSchemePreference {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let hint = headers
            .get(COLOR_SCHEME_HINT)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().trim_matches('"'));

        match hint {
            Some(value) if value.eq_ignore_ascii_case("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    fn preset_name(self) -> &'static str {
        match self {
            ColorSchemePreference::Light => DEFAULT_THEME,
            ColorSchemePreference::Dark => DARK_THEME,
        }
    }
}

/// The theme to draw a page with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTheme {
    /// The preset name, used to mark the active swatch in the palette.
    pub name: String,
    pub vars: BTreeMap<String, String>,
    pub mode: ThemeMode,
}

impl PageTheme {
    fn new(theme: StoredTheme, mode_override: Option<ThemeMode>) -> Self {
        let mode = mode_override.unwrap_or_else(|| {
            let is_dark = theme
                .vars
                .get("--bg")
                .is_some_and(|background| is_color_dark(background));

            if is_dark {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            }
        });

        Self {
            name: theme.name,
            vars: theme.vars,
            mode,
        }
    }

    /// A `:root` rule setting every theme variable.
    ///
    /// Variables whose name or value contains anything other than the
    /// characters found in CSS colours are left out.
    pub fn css(&self) -> String {
        let declarations: String = self
            .vars
            .iter()
            .filter(|(key, value)| {
                key.starts_with("--") && is_safe_css_token(key) && is_safe_css_token(value)
            })
            .map(|(key, value)| format!("{key}:{value};"))
            .collect();

        format!(":root{{{declarations}}}")
    }
}

impl Default for PageTheme {
    /// The default preset in light mode, for pages drawn without access to
    /// the saved theme.
    fn default() -> Self {
        Self::new(StoredTheme::from(&PRESETS[0]), None)
    }
}

fn is_safe_css_token(token: &str) -> bool {
    !token.is_empty()
        && token.chars().all(|character| {
            character.is_ascii_alphanumeric() || "#-_(),.% ".contains(character)
        })
}

/// Save `theme` as the selected theme.
pub fn save_theme(theme: &StoredTheme, connection: &Connection) -> Result<(), Error> {
    let json = serde_json::to_string(theme)?;
    set_item(THEME_KEY, &json, connection)
}

/// Get the selected theme, `None` if no theme has been selected.
///
/// # Errors
///
/// Returns [Error::InvalidThemeData] if the saved theme cannot be parsed.
pub fn load_theme(connection: &Connection) -> Result<Option<StoredTheme>, Error> {
    get_item(THEME_KEY, connection)?
        .map(|text| {
            serde_json::from_str(&text).map_err(|error| Error::InvalidThemeData(error.to_string()))
        })
        .transpose()
}

/// Select the preset called `name`.
///
/// Returns `false` and leaves everything unchanged if there is no such preset.
pub fn apply_theme(name: &str, connection: &Connection) -> Result<bool, Error> {
    let Some(preset) = find_preset(name) else {
        tracing::debug!("Ignoring request to apply unknown theme {name:?}");
        return Ok(false);
    };

    save_theme(&StoredTheme::from(preset), connection)?;

    Ok(true)
}

/// Forget the selected theme and select the default preset.
pub fn reset_theme(connection: &Connection) -> Result<(), Error> {
    remove_item(THEME_KEY, connection)?;
    apply_theme(DEFAULT_THEME, connection)?;

    Ok(())
}

/// Work out the theme for a page.
///
/// The saved theme is used if there is one. Otherwise, or if it cannot be
/// read, the preset matching the client's colour scheme preference is used
/// without saving it. `mode_override` replaces the light/dark mode derived
/// from the background colour.
pub fn resolve_page_theme(
    connection: &Connection,
    preference: ColorSchemePreference,
    mode_override: Option<ThemeMode>,
) -> PageTheme {
    let stored = match load_theme(connection) {
        Ok(stored) => stored,
        Err(error) => {
            tracing::warn!("Falling back to the system colour scheme: {error}");
            None
        }
    };

    let theme = stored.unwrap_or_else(|| {
        let preset = find_preset(preference.preset_name()).unwrap_or(&PRESETS[0]);
        StoredTheme::from(preset)
    });

    PageTheme::new(theme, mode_override)
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue};

    use crate::{
        Error,
        storage::{THEME_KEY, get_item, set_item},
        test_utils::get_test_connection,
        theme::preset::find_preset,
    };

    use super::{
        COLOR_SCHEME_HINT, ColorSchemePreference, StoredTheme, ThemeMode, apply_theme,
        load_theme, reset_theme, resolve_page_theme,
    };

    #[test]
    fn apply_known_theme_saves_name_and_vars() {
        let connection = get_test_connection();

        assert_eq!(apply_theme("Ocean", &connection), Ok(true));

        let stored = load_theme(&connection).unwrap().unwrap();
        assert_eq!(stored, StoredTheme::from(find_preset("Ocean").unwrap()));
        assert_eq!(stored.vars.get("--bg").map(String::as_str), Some("#f0f9ff"));
    }

    #[test]
    fn apply_unknown_theme_changes_nothing() {
        let connection = get_test_connection();
        apply_theme("Forest", &connection).unwrap();

        assert_eq!(apply_theme("Nope", &connection), Ok(false));

        let stored = load_theme(&connection).unwrap().unwrap();
        assert_eq!(stored.name, "Forest");
    }

    #[test]
    fn reset_selects_default() {
        let connection = get_test_connection();
        apply_theme("Sunset", &connection).unwrap();

        reset_theme(&connection).unwrap();

        let stored = load_theme(&connection).unwrap().unwrap();
        assert_eq!(stored.name, "Default");
    }

    #[test]
    fn stored_theme_json_shape() {
        let connection = get_test_connection();

        apply_theme("High Contrast", &connection).unwrap();

        let json = get_item(THEME_KEY, &connection).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "High Contrast");
        assert_eq!(value["vars"]["--primary"], "#ffcc00");
    }

    #[test]
    fn corrupt_theme_fails_to_load() {
        let connection = get_test_connection();
        set_item(THEME_KEY, "\"Ocean\"", &connection).unwrap();

        assert!(matches!(
            load_theme(&connection),
            Err(Error::InvalidThemeData(_))
        ));
    }

    #[test]
    fn page_theme_uses_saved_theme() {
        let connection = get_test_connection();
        apply_theme("Dark Classic", &connection).unwrap();

        let theme = resolve_page_theme(&connection, ColorSchemePreference::Light, None);

        assert_eq!(theme.name, "Dark Classic");
        assert_eq!(theme.mode, ThemeMode::Dark);
    }

    #[test]
    fn page_theme_without_saved_theme_follows_preference() {
        let connection = get_test_connection();

        let light = resolve_page_theme(&connection, ColorSchemePreference::Light, None);
        let dark = resolve_page_theme(&connection, ColorSchemePreference::Dark, None);

        assert_eq!(light.name, "Default");
        assert_eq!(light.mode, ThemeMode::Light);
        assert_eq!(dark.name, "Dark Classic");
        assert_eq!(dark.mode, ThemeMode::Dark);
        assert_eq!(load_theme(&connection), Ok(None));
    }

    #[test]
    fn page_theme_with_corrupt_saved_theme_follows_preference() {
        let connection = get_test_connection();
        set_item(THEME_KEY, "{broken", &connection).unwrap();

        let theme = resolve_page_theme(&connection, ColorSchemePreference::Dark, None);

        assert_eq!(theme.name, "Dark Classic");
    }

    #[test]
    fn mode_override_replaces_derived_mode() {
        let connection = get_test_connection();
        apply_theme("Default", &connection).unwrap();

        let theme = resolve_page_theme(
            &connection,
            ColorSchemePreference::Light,
            Some(ThemeMode::Dark),
        );

        assert_eq!(theme.name, "Default");
        assert_eq!(theme.mode, ThemeMode::Dark);
    }

    #[test]
    fn css_sets_every_variable() {
        let connection = get_test_connection();
        apply_theme("Forest", &connection).unwrap();

        let css = resolve_page_theme(&connection, ColorSchemePreference::Light, None).css();

        assert!(css.starts_with(":root{"));
        assert!(css.contains("--bg:#f0fdf4;"));
        assert!(css.contains("--accent:#84cc16;"));
    }

    #[test]
    fn css_drops_unsafe_values() {
        let connection = get_test_connection();
        set_item(
            THEME_KEY,
            r##"{"name":"Evil","vars":{"--bg":"#000000","--text":"red;}</style><script>"}}"##,
            &connection,
        )
        .unwrap();

        let css = resolve_page_theme(&connection, ColorSchemePreference::Light, None).css();

        assert_eq!(css, ":root{--bg:#000000;}");
    }

    #[test]
    fn preference_from_client_hint() {
        let mut headers = HeaderMap::new();
        assert_eq!(
            ColorSchemePreference::from_headers(&headers),
            ColorSchemePreference::Light
        );

        headers.insert(COLOR_SCHEME_HINT, HeaderValue::from_static("\"dark\""));
        assert_eq!(
            ColorSchemePreference::from_headers(&headers),
            ColorSchemePreference::Dark
        );
    }
}
