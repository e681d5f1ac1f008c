// LogClassify - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogClassify operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum AppError {
    /// Classification exchange or client setup failed.
    Classify(ClassifyError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Export operation failed.
    Export(ExportError),

    /// An input file is larger than the buffer loader accepts.
    InputTooLarge { path: PathBuf, size: u64, max: u64 },

    /// The async runtime backing the transport could not be started.
    Runtime { source: io::Error },

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classify(e) => write!(f, "Classification error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::InputTooLarge { path, size, max } => write!(
                f,
                "'{}' is {size} bytes, exceeds the maximum of {max} bytes",
                path.display()
            ),
            Self::Runtime { source } => write!(f, "Cannot start async runtime: {source}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Classify(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Runtime { source } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::InputTooLarge { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Classification errors
// ---------------------------------------------------------------------------

/// Coarse category of a classification failure, shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The client could not be set up (bad endpoint, TLS backend failure).
    Configuration,
    /// The service could not be reached or the exchange broke off.
    Transport,
    /// The service answered, but not with JSON.
    Decode,
}

impl ErrorKind {
    /// Short label for the status bar and results panel.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Configuration => "Configuration",
            Self::Transport => "Transport",
            Self::Decode => "Decode",
        }
    }
}

/// Errors raised by the transport client.
#[derive(Debug)]
pub enum ClassifyError {
    /// The endpoint is not an absolute http(s) URL.
    InvalidEndpoint { endpoint: String, reason: String },

    /// The underlying HTTP client could not be constructed.
    ClientBuild { source: reqwest::Error },

    /// Network-level failure: connection refused, DNS, broken transfer.
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The response body is not valid JSON.
    Decode {
        endpoint: String,
        status: u16,
        source: serde_json::Error,
    },
}

impl ClassifyError {
    /// Category used for the explicit `Failed` pipeline state.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEndpoint { .. } | Self::ClientBuild { .. } => ErrorKind::Configuration,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Decode { .. } => ErrorKind::Decode,
        }
    }
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint { endpoint, reason } => {
                write!(f, "Invalid service endpoint '{endpoint}': {reason}")
            }
            Self::ClientBuild { source } => write!(f, "Cannot build HTTP client: {source}"),
            Self::Transport { endpoint, source } => {
                write!(f, "Cannot reach classification service at '{endpoint}': {source}")
            }
            Self::Decode {
                endpoint,
                status,
                source,
            } => write!(
                f,
                "Response from '{endpoint}' (HTTP {status}) is not valid JSON: {source}"
            ),
        }
    }
}

impl std::error::Error for ClassifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ClientBuild { source } => Some(source),
            Self::Transport { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::InvalidEndpoint { .. } => None,
        }
    }
}

impl From<ClassifyError> for AppError {
    fn from(e: ClassifyError) -> Self {
        Self::Classify(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// There is no result in the store to export.
    NoResult,

    /// The stored result does not have the labelled shape needed for CSV.
    NotLabelled,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
            Self::NoResult => write!(f, "No classification result to export"),
            Self::NotLabelled => write!(
                f,
                "Result is not a list of labelled entries; export it as JSON instead"
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for LogClassify results.
pub type Result<T> = std::result::Result<T, AppError>;
