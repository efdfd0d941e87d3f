//! Edit mode: the built-in credential check, the cookie that remembers a
//! successful log-in, and the middleware that guards the editing routes.

mod cookie;
mod credentials;
mod log_in;
mod log_out;
mod middleware;

pub(crate) use cookie::is_edit_enabled;
pub use log_in::{get_log_in_page, post_log_in};
pub use log_out::post_log_out;
pub use middleware::{edit_guard, edit_guard_hx};

#[cfg(test)]
pub(crate) use cookie::{COOKIE_EDIT_MODE, set_edit_cookie};
