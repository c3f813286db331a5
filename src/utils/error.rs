use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarehouseError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Cannot render dates with format '{format}'")]
    DateFormatError { format: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

impl WarehouseError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            WarehouseError::ValidationError { .. } => {
                "Check that every box fits the pallet footprint (width and depth)"
            }
            WarehouseError::ConfigError { .. } => {
                "Check the inventory file syntax and date values (YYYY-MM-DD)"
            }
            WarehouseError::DateFormatError { .. } => {
                "Pass a --date-format made of date fields only, e.g. %d.%m.%Y"
            }
            WarehouseError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted values"
            }
            WarehouseError::IoError(_) => "Make sure the file exists and is readable",
            WarehouseError::SerializationError(_) | WarehouseError::CsvError(_) => {
                "Try a different --format"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WarehouseError>;
