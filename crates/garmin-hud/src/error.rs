use thiserror::Error;

use crate::metrics::correlation::InsufficientData;

/// Main error type for garmin-hud
#[derive(Error, Debug)]
pub enum HudError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid date format: {0}. Expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(#[from] InsufficientData),
}

pub type Result<T> = std::result::Result<T, HudError>;

impl HudError {
    /// Create a configuration error from a message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a storage error from a message
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error from a message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an invalid parameter error from a message
    pub fn invalid_param(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

/// Render an error for the terminal, adding a hint where one helps.
pub fn format_user_error(err: &HudError) -> String {
    match err {
        HudError::NotFound(_) => format!("{}. Run 'garmin-hud import' first.", err),
        HudError::InsufficientData(_) => {
            format!("{}. Select other columns or import more days.", err)
        }
        _ => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HudError::Storage("disk full".to_string());
        assert_eq!(err.to_string(), "Storage error: disk full");
    }

    #[test]
    fn test_invalid_date_format_error() {
        let err = HudError::InvalidDateFormat("not-a-date".to_string());
        assert!(err.to_string().contains("not-a-date"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_insufficient_data_conversion() {
        let err: HudError = InsufficientData::NoCompleteRows.into();
        assert!(matches!(err, HudError::InsufficientData(_)));
        assert!(format_user_error(&err).contains("import more days"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(HudError::config("x"), HudError::Config(_)));
        assert!(matches!(HudError::storage("x"), HudError::Storage(_)));
        assert!(matches!(HudError::invalid_input("x"), HudError::InvalidInput(_)));
        assert!(matches!(HudError::invalid_param("x"), HudError::InvalidParameter(_)));
    }

    #[test]
    fn test_not_found_hint() {
        let err = HudError::NotFound("daily records".to_string());
        assert!(format_user_error(&err).contains("garmin-hud import"));
    }
}
