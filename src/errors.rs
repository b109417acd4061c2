use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Domain failures raised by the habit store and recurrence parsing.
/// Validation problems map to 400, missing records to 404.
#[derive(Debug, PartialEq, Eq)]
pub enum HabitError {
    EmptyName,
    InvalidRecurrence(String),
    NotFound(String),
}

impl std::fmt::Display for HabitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HabitError::EmptyName => write!(f, "habit name must not be empty"),
            HabitError::InvalidRecurrence(raw) => {
                write!(
                    f,
                    "invalid recurrence '{raw}': expected daily, weekly, monthly, or a number of days between 1 and {}",
                    crate::recurrence::MAX_CUSTOM_INTERVAL_DAYS
                )
            }
            HabitError::NotFound(id) => write!(f, "no habit with id {id}"),
        }
    }
}

impl std::error::Error for HabitError {}

impl From<HabitError> for AppError {
    fn from(err: HabitError) -> Self {
        match err {
            HabitError::NotFound(_) => AppError::not_found(err.to_string()),
            _ => AppError::bad_request(err.to_string()),
        }
    }
}
