//! A string key-value store backed by SQLite.
//!
//! The scoreboard keeps its state under a few well known keys, each holding a
//! JSON document: the selected theme, the current scores, and a snapshot of the
//! scores as they were first loaded from the data file.

use rusqlite::{Connection, OptionalExtension};

use crate::Error;

/// The key for the selected theme, stored as `{"name": ..., "vars": {...}}`.
pub const THEME_KEY: &str = "selectedTheme";
/// The key for the current score map.
pub const SCORES_KEY: &str = "userScoresData";
/// The key for the scores as loaded from the data file, used by reset.
pub const DEFAULT_SCORES_KEY: &str = "__DEFAULT_STATE__";

/// Create the local_storage table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_storage_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS local_storage (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Get the value stored under `key`, or `None` if nothing is stored there.
pub fn get_item(key: &str, connection: &Connection) -> Result<Option<String>, Error> {
    connection
        .prepare("SELECT value FROM local_storage WHERE key = :key")?
        .query_row(&[(":key", key)], |row| row.get(0))
        .optional()
        .map_err(|error| error.into())
}

/// Store `value` under `key`, replacing any existing value.
pub fn set_item(key: &str, value: &str, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (key, value),
    )?;

    Ok(())
}

/// Remove the value stored under `key`. Removing a missing key is not an error.
pub fn remove_item(key: &str, connection: &Connection) -> Result<(), Error> {
    connection.execute("DELETE FROM local_storage WHERE key = ?1", [key])?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::{create_storage_table, get_item, remove_item, set_item};

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_storage_table(&connection).expect("Could not create storage table");
        connection
    }

    #[test]
    fn get_missing_item_returns_none() {
        let connection = get_test_connection();

        let got = get_item("missing", &connection).unwrap();

        assert_eq!(got, None);
    }

    #[test]
    fn set_then_get_item() {
        let connection = get_test_connection();

        set_item("foo", "{\"bar\":1}", &connection).unwrap();

        let got = get_item("foo", &connection).unwrap();
        assert_eq!(got.as_deref(), Some("{\"bar\":1}"));
    }

    #[test]
    fn set_item_replaces_existing_value() {
        let connection = get_test_connection();
        set_item("foo", "first", &connection).unwrap();

        set_item("foo", "second", &connection).unwrap();

        let got = get_item("foo", &connection).unwrap();
        assert_eq!(got.as_deref(), Some("second"));
    }

    #[test]
    fn remove_item_deletes_value() {
        let connection = get_test_connection();
        set_item("foo", "bar", &connection).unwrap();

        remove_item("foo", &connection).unwrap();

        assert_eq!(get_item("foo", &connection).unwrap(), None);
    }

    #[test]
    fn remove_missing_item_succeeds() {
        let connection = get_test_connection();

        assert!(remove_item("missing", &connection).is_ok());
    }
}
