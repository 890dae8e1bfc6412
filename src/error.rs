use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Command-line path arguments that are validated before a scan starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Archive,
    Directory,
    List,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Archive => f.write_str("archive"),
            Argument::Directory => f.write_str("directory"),
            Argument::List => f.write_str("list"),
        }
    }
}

impl Argument {
    fn expectation(&self) -> &'static str {
        match self {
            Argument::Directory => "a directory",
            Argument::Archive | Argument::List => "a file",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Provided {argument} path {} does not exist or is not {}", .path.display(), .argument.expectation())]
    InvalidArgument { argument: Argument, path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Permission denied on {}: {source}", .path.display())]
    Permission {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Stdio(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Walkdir error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Not a valid UNIX timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("Timestamp {0} is outside the representable date range")]
    TimestampOutOfRange(i64),
}

impl AppError {
    /// Attaches a path to an I/O error, splitting out permission failures.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == ErrorKind::PermissionDenied {
            AppError::Permission { path, source }
        } else {
            AppError::Io { path, source }
        }
    }

    pub fn invalid_argument(argument: Argument, path: impl AsRef<Path>) -> Self {
        AppError::InvalidArgument {
            argument,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Process exit code for a fatal error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InvalidArgument { argument, .. } => match argument {
                Argument::Archive => 1,
                Argument::Directory => 2,
                Argument::List => 3,
            },
            _ => 4,
        }
    }

    /// Whether the scan may carry on with the next file after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Io { .. } | AppError::Permission { .. })
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
