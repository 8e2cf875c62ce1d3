use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Missing field: {field}")]
    MissingField { field: String },

    #[error("Unknown department: {department}")]
    UnknownDepartment { department: String },

    #[error("Invalid type at {path}: expected {expected}, found {found}")]
    InvalidType {
        path: String,
        expected: String,
        found: String,
    },

    #[error("Duplicate department: {department}")]
    DuplicateDepartment { department: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input lacks an expected field or department.
    Shape,
    /// A value has the wrong type (e.g. a department that is not a list).
    Type,
    Parse,
    Config,
    Io,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::MissingField { .. }
            | ReportError::UnknownDepartment { .. }
            | ReportError::DuplicateDepartment { .. } => ErrorCategory::Shape,
            ReportError::InvalidType { .. } => ErrorCategory::Type,
            ReportError::Serialization(_) | ReportError::TomlParse(_) => {
                ErrorCategory::Parse
            }
            ReportError::InvalidConfigValue { .. } => ErrorCategory::Config,
            ReportError::Io(_) => ErrorCategory::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
