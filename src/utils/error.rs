use thiserror::Error;

#[derive(Error, Debug)]
pub enum DishError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlDeError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported format: '{value}'")]
    UnsupportedFormat { value: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DishError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DishError::ConfigError { .. }
            | DishError::MissingConfigError { .. }
            | DishError::InvalidConfigValueError { .. }
            | DishError::UnsupportedFormat { .. } => ErrorSeverity::High,
            DishError::CsvError(_)
            | DishError::SerializationError(_)
            | DishError::TomlDeError(_)
            | DishError::TomlSerError(_)
            | DishError::ProcessingError { .. } => ErrorSeverity::Medium,
            DishError::IoError(_) | DishError::ZipError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the binaries.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DishError::ConfigError { message } => format!("Configuration problem: {}", message),
            DishError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            DishError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            DishError::UnsupportedFormat { value } => {
                format!("'{}' is not a supported dish file format", value)
            }
            DishError::CsvError(e) => format!("Could not read or write CSV data: {}", e),
            DishError::SerializationError(e) => format!("Could not read or write JSON data: {}", e),
            DishError::TomlDeError(e) => format!("Could not parse TOML: {}", e),
            DishError::TomlSerError(e) => format!("Could not write TOML: {}", e),
            DishError::ProcessingError { message } => message.clone(),
            DishError::IoError(e) => format!("File system error: {}", e),
            DishError::ZipError(e) => format!("Could not build the export bundle: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DishError::ConfigError { .. }
            | DishError::MissingConfigError { .. }
            | DishError::InvalidConfigValueError { .. } => {
                "Check the command line flags or the configuration file"
            }
            DishError::UnsupportedFormat { .. } => "Use one of: json, csv, tsv, toml",
            DishError::CsvError(_)
            | DishError::SerializationError(_)
            | DishError::TomlDeError(_)
            | DishError::ProcessingError { .. } => {
                "Make sure the input file matches its extension and is well formed"
            }
            DishError::TomlSerError(_) => "Try exporting to json or csv instead",
            DishError::IoError(_) | DishError::ZipError(_) => {
                "Check that the paths exist and are writable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DishError>;
