//! The private cookie that marks a browser as being in edit mode.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime};

pub(crate) const COOKIE_EDIT_MODE: &str = "edit_mode";
const EDIT_MODE_ENABLED: &str = "enabled";

/// Add the edit mode cookie to the cookie jar.
///
/// The cookie has no expiry, so it lasts until the browser session ends or
/// the user logs out.
pub(crate) fn set_edit_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build((COOKIE_EDIT_MODE, EDIT_MODE_ENABLED))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true),
    )
}

/// Set the edit mode cookie to an invalid value and set its max age to zero, which should delete
/// the cookie on the client side.
pub(crate) fn invalidate_edit_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build((COOKIE_EDIT_MODE, "deleted"))
            .path("/")
            .expires(OffsetDateTime::UNIX_EPOCH)
            .max_age(Duration::ZERO)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true),
    )
}

/// Whether the jar holds a valid edit mode cookie.
///
/// The jar only yields cookies that decrypt with the server's key, so a forged
/// or tampered cookie reads as missing.
pub(crate) fn is_edit_enabled(jar: &PrivateCookieJar) -> bool {
    jar.get(COOKIE_EDIT_MODE)
        .is_some_and(|cookie| cookie.value() == EDIT_MODE_ENABLED)
}

#[cfg(test)]
mod tests {
    use axum_extra::extract::{
        PrivateCookieJar,
        cookie::{Cookie, Key, SameSite},
    };
    use sha2::{Digest, Sha512};
    use time::{Duration, OffsetDateTime};

    use super::{COOKIE_EDIT_MODE, invalidate_edit_cookie, is_edit_enabled, set_edit_cookie};

    fn get_jar() -> PrivateCookieJar {
        let hash = Sha512::digest(b"foobar");
        let key = Key::from(&hash);
        PrivateCookieJar::new(key)
    }

    #[test]
    fn empty_jar_is_not_in_edit_mode() {
        assert!(!is_edit_enabled(&get_jar()));
    }

    #[test]
    fn set_edit_cookie_enables_edit_mode() {
        let jar = set_edit_cookie(get_jar());

        assert!(is_edit_enabled(&jar));

        let cookie = jar.get(COOKIE_EDIT_MODE).unwrap();
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.expires(), None);
    }

    #[test]
    fn invalidate_edit_cookie_disables_edit_mode() {
        let jar = invalidate_edit_cookie(set_edit_cookie(get_jar()));

        assert!(!is_edit_enabled(&jar));

        let cookie = jar.get(COOKIE_EDIT_MODE).unwrap();
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(
            cookie.expires_datetime(),
            Some(OffsetDateTime::UNIX_EPOCH)
        );
    }

    #[test]
    fn unexpected_cookie_value_is_not_edit_mode() {
        let jar = get_jar().add(Cookie::new(COOKIE_EDIT_MODE, "maybe"));

        assert!(!is_edit_enabled(&jar));
    }
}
