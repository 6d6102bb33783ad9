use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid repository path '{path}': {reason}")]
    InvalidPathError { path: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate module id: {id}")]
    DuplicateModuleError { id: u32 },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Failed to render {format} output: {message}")]
    RenderError { format: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    ResourcePath,
    Rendering,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl CatalogError {
    pub fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidPathError {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// 是否屬於配置錯誤（必須在渲染前中止）
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            CatalogError::ConfigError { .. }
                | CatalogError::MissingConfigError { .. }
                | CatalogError::InvalidConfigValueError { .. }
                | CatalogError::DuplicateModuleError { .. }
                | CatalogError::ConfigValidationError { .. }
        )
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::InvalidPathError { .. } => ErrorCategory::ResourcePath,
            CatalogError::RenderError { .. }
            | CatalogError::SerializationError(_)
            | CatalogError::CsvError(_) => ErrorCategory::Rendering,
            CatalogError::IoError(_) => ErrorCategory::System,
            _ => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration
            | ErrorCategory::ResourcePath
            | ErrorCategory::Rendering => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::InvalidPathError { .. } => {
                "Use a non-empty repository-relative path made of URL-safe characters, e.g. '4-python-decorators'"
            }
            CatalogError::MissingConfigError { .. } => {
                "Add the missing field to the catalog configuration file"
            }
            CatalogError::DuplicateModuleError { .. } => {
                "Give every module in the catalog a unique id"
            }
            CatalogError::ConfigValidationError { .. } => {
                "Check the catalog file for TOML syntax errors and unknown keys"
            }
            CatalogError::ConfigError { .. } | CatalogError::InvalidConfigValueError { .. } => {
                "Fix the reported value in the catalog configuration and run again"
            }
            CatalogError::RenderError { .. }
            | CatalogError::SerializationError(_)
            | CatalogError::CsvError(_) => "Try a different output format or report the module that fails",
            CatalogError::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::InvalidPathError { path, reason } => {
                format!("Cannot build a link for '{}': {}", path, reason)
            }
            CatalogError::MissingConfigError { field } => {
                format!("The catalog is missing '{}'", field)
            }
            CatalogError::DuplicateModuleError { id } => {
                format!("More than one module uses id {}", id)
            }
            CatalogError::IoError(e) => format!("File system error: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
