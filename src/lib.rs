pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod reconcile;
pub mod recurrence;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;
pub mod view;

pub use app::router;
pub use reconcile::run_reconcile;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
