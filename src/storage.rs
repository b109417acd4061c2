use crate::errors::AppError;
use crate::models::AppData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

const CORRUPT_DATA_WARNING: &str =
    "Saved habits could not be read; starting over with an empty list.";

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/habits.json"))
}

/// Load the data file. A missing file means a fresh install; a corrupt or
/// unreadable one falls back to empty state and carries a warning for the
/// user instead of failing the process.
pub async fn load_data(path: &Path) -> (AppData, Option<String>) {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => (data, None),
            Err(err) => {
                error!("failed to parse data file: {err}");
                (AppData::default(), Some(CORRUPT_DATA_WARNING.to_string()))
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => (AppData::default(), None),
        Err(err) => {
            error!("failed to read data file: {err}");
            (AppData::default(), Some(CORRUPT_DATA_WARNING.to_string()))
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
