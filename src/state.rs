use crate::models::AppData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    /// Warning queued at startup (corrupt data file); taken once by the
    /// first habit-list response.
    pub startup_warning: Arc<Mutex<Option<String>>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData, startup_warning: Option<String>) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            startup_warning: Arc::new(Mutex::new(startup_warning)),
        }
    }
}
