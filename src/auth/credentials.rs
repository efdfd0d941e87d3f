//! The built-in credentials that unlock edit mode.
//!
//! These are plaintext constants compiled into the binary. They keep casual
//! visitors away from the edit controls and nothing more; do not reuse them
//! anywhere that needs real authentication.

/// The user name that unlocks edit mode.
pub const EDIT_USERNAME: &str = "kayham";
/// The password that unlocks edit mode.
pub const EDIT_PASSWORD: &str = "kristofferadmarmota";

/// Whether `username` and `password` match the built-in credentials.
///
/// Surrounding whitespace is ignored in the user name but not the password.
pub fn check_credentials(username: &str, password: &str) -> bool {
    username.trim() == EDIT_USERNAME && password == EDIT_PASSWORD
}
