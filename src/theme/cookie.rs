//! The cookie that remembers a visitor's light/dark toggle.
//!
//! The toggle belongs to the browser that pressed it, so it is kept client
//! side rather than in the shared theme saved in local storage.

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime};

use crate::theme::store::ThemeMode;

pub(crate) const COOKIE_THEME_MODE: &str = "theme_mode";

/// The mode chosen with the toggle, if the visitor has used it.
///
/// Unrecognised values are ignored.
pub(crate) fn mode_from_cookies(jar: &CookieJar) -> Option<ThemeMode> {
    jar.get(COOKIE_THEME_MODE)
        .and_then(|cookie| ThemeMode::parse(cookie.value()))
}

/// Remember `mode` for the rest of the browser session.
pub(crate) fn set_mode_cookie(jar: CookieJar, mode: ThemeMode) -> CookieJar {
    jar.add(
        Cookie::build((COOKIE_THEME_MODE, mode.as_str()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Expire the toggle so the mode follows the selected preset again.
pub(crate) fn clear_mode_cookie(jar: CookieJar) -> CookieJar {
    jar.add(
        Cookie::build((COOKIE_THEME_MODE, ""))
            .path("/")
            .expires(OffsetDateTime::UNIX_EPOCH)
            .max_age(Duration::ZERO)
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

#[cfg(test)]
mod tests {
    use axum_extra::extract::{CookieJar, cookie::Cookie};
    use time::Duration;

    use crate::theme::store::ThemeMode;

    use super::{COOKIE_THEME_MODE, clear_mode_cookie, mode_from_cookies, set_mode_cookie};

    #[test]
    fn no_cookie_means_no_override() {
        assert_eq!(mode_from_cookies(&CookieJar::new()), None);
    }

    #[test]
    fn set_cookie_is_read_back() {
        let jar = set_mode_cookie(CookieJar::new(), ThemeMode::Dark);

        assert_eq!(mode_from_cookies(&jar), Some(ThemeMode::Dark));
        assert_eq!(jar.get(COOKIE_THEME_MODE).unwrap().value(), "dark");
    }

    #[test]
    fn unknown_value_is_ignored() {
        let jar = CookieJar::new().add(Cookie::new(COOKIE_THEME_MODE, "sepia"));

        assert_eq!(mode_from_cookies(&jar), None);
    }

    #[test]
    fn cleared_cookie_expires_immediately() {
        let jar = clear_mode_cookie(set_mode_cookie(CookieJar::new(), ThemeMode::Light));

        let cookie = jar.get(COOKIE_THEME_MODE).unwrap();
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(mode_from_cookies(&jar), None);
    }
}
