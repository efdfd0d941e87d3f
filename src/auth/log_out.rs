//! Log-out route handler that leaves edit mode and sends the client back to the scoreboard.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use axum_htmx::HxRedirect;

use crate::{auth::cookie::invalidate_edit_cookie, endpoints};

/// Invalidate the edit mode cookie and redirect the client to the read-only scoreboard.
pub async fn post_log_out(jar: PrivateCookieJar) -> Response {
    let jar = invalidate_edit_cookie(jar);
    tracing::info!("Edit mode disabled");

    (
        StatusCode::OK,
        HxRedirect(endpoints::ROOT.to_owned()),
        jar,
    )
        .into_response()
}

#[cfg(test)]
mod log_out_tests {
    use axum::{
        body::Body,
        http::{Response, StatusCode, header::SET_COOKIE},
    };
    use axum_extra::extract::{
        PrivateCookieJar,
        cookie::{Cookie, Key},
    };
    use sha2::{Digest, Sha512};
    use time::{Duration, OffsetDateTime};

    use crate::{
        auth::cookie::{COOKIE_EDIT_MODE, set_edit_cookie},
        endpoints,
        test_utils::assert_hx_redirect,
    };

    use super::post_log_out;

    #[tokio::test]
    async fn log_out_invalidates_edit_cookie_and_redirects() {
        let cookie_jar = set_edit_cookie(get_jar());

        let response = post_log_out(cookie_jar).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_hx_redirect(&response, endpoints::ROOT);
        assert_cookie_expired(&response);
    }

    fn get_jar() -> PrivateCookieJar {
        let key = Key::from(&Sha512::digest("42"));
        PrivateCookieJar::new(key)
    }

    #[track_caller]
    fn assert_cookie_expired(response: &Response<Body>) {
        let mut found = false;

        for cookie_header in response.headers().get_all(SET_COOKIE) {
            let cookie_string = cookie_header.to_str().unwrap();
            let cookie = Cookie::parse(cookie_string).unwrap();

            if cookie.name() != COOKIE_EDIT_MODE {
                continue;
            }

            found = true;
            assert_eq!(
                cookie.expires_datetime(),
                Some(OffsetDateTime::UNIX_EPOCH),
                "got expires {:?}, want {:?}",
                cookie.expires_datetime(),
                Some(OffsetDateTime::UNIX_EPOCH),
            );
            assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        }

        assert!(found, "no {COOKIE_EDIT_MODE} cookie in the response");
    }
}
