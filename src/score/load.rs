//! Startup loading of the score map: data file, then cache, then sample data.

use std::path::Path;

use rusqlite::Connection;

use crate::{
    Error,
    score::{
        board::ScoreBoard,
        migration::{parse_score_data, sample_scores},
        persistence::{restore_scores, save_default_snapshot},
    },
};

/// Where the running scores came from when the server started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// The data file, possibly overridden by edits saved in local storage.
    Source,
    /// Local storage, because the data file could not be used.
    Cache,
    /// The built-in sample dataset, because neither of the above was usable.
    Sample,
}

/// Read and parse the score data file.
///
/// # Errors
///
/// Returns [Error::SourceUnavailable] if the file cannot be read and
/// [Error::InvalidScoreData] if its contents are not a score document.
pub async fn read_source(path: &Path) -> Result<ScoreBoard, Error> {
    let text = tokio::fs::read_to_string(path).await.map_err(|error| {
        Error::SourceUnavailable(path.display().to_string(), error.to_string())
    })?;

    parse_score_data(&text)
}

/// Pick the scores to start with given the result of reading the data file.
///
/// A successfully read data file is saved as the default snapshot. Scores
/// saved in local storage take precedence over the data file so that edits
/// survive restarts. If neither is usable the sample dataset is used.
pub fn resolve_scores(
    source: Result<ScoreBoard, Error>,
    connection: &Connection,
) -> (ScoreBoard, DataOrigin) {
    let source = match source {
        Ok(scores) => {
            if let Err(error) = save_default_snapshot(&scores, connection) {
                tracing::warn!("Could not save the default snapshot: {error}");
            }
            Some(scores)
        }
        Err(error) => {
            tracing::warn!("Could not load the score data file: {error}");
            None
        }
    };

    let cached = match restore_scores(connection) {
        Ok(cached) => cached,
        Err(error) => {
            tracing::warn!("Ignoring saved scores: {error}");
            None
        }
    };

    match (source, cached) {
        (Some(_), Some(cached)) => {
            tracing::info!("Using saved scores in place of the data file");
            (cached, DataOrigin::Source)
        }
        (Some(source), None) => (source, DataOrigin::Source),
        (None, Some(cached)) => {
            tracing::warn!("Loaded scores from the cache");
            (cached, DataOrigin::Cache)
        }
        (None, None) => {
            tracing::warn!("Using the sample scores");
            (sample_scores(), DataOrigin::Sample)
        }
    }
}

/// Load the scores to start the server with. Never fails, see [resolve_scores].
pub async fn load_scores(source_path: &Path, connection: &Connection) -> (ScoreBoard, DataOrigin) {
    let source = read_source(source_path).await;
    resolve_scores(source, connection)
}
