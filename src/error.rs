use thiserror::Error;

/// Italicize error types
#[derive(Error, Debug)]
pub enum ItalicError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Font source error: {0}")]
    Font(String),

    #[error("Outline error: {0}")]
    Outline(String),

    #[error("Master not found: {0}")]
    MasterNotFound(String),

    #[error("Master already exists: {0}")]
    MasterExists(String),

    #[error("Source master '{0}' already appears to be italic")]
    AlreadyItalic(String),

    #[error("Angle must be between 1° and 20°, got {0}°")]
    InvalidAngle(f64),

    #[error("Compensation must be between 0% and 8%, got {0}%")]
    InvalidCompensation(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for italicize operations
pub type Result<T> = std::result::Result<T, ItalicError>;
