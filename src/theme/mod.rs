//! Colour themes: the preset catalogue, the saved selection, the light/dark
//! toggle and the endpoints that change them.

mod color;
mod cookie;
mod endpoints;
mod preset;
mod store;

use std::sync::{Arc, Mutex};

use axum::{extract::FromRef, http::HeaderMap};
use axum_extra::extract::CookieJar;
use rusqlite::Connection;

use crate::{AppState, Error};

pub use endpoints::{apply_theme_endpoint, reset_theme_endpoint, toggle_theme_endpoint};
pub use preset::{PRESETS, ThemePreset};
pub use store::{
    COLOR_SCHEME_HINT, ColorSchemePreference, PageTheme, ThemeMode, resolve_page_theme,
};

/// The state needed to draw a themed page or change the theme.
#[derive(Debug, Clone)]
pub struct ThemeState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ThemeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

impl ThemeState {
    /// Resolve the theme for a page requested with `headers` and `cookies`.
    ///
    /// Do not call this while holding the database lock, use
    /// [resolve_page_theme] with the locked connection instead.
    pub fn page_theme(
        &self,
        headers: &HeaderMap,
        cookies: &CookieJar,
    ) -> Result<PageTheme, Error> {
        let connection = self.db_connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })?;

        Ok(resolve_page_theme(
            &connection,
            ColorSchemePreference::from_headers(headers),
            cookie::mode_from_cookies(cookies),
        ))
    }
}
