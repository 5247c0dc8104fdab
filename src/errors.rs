use std::{path::PathBuf, process::ExitCode};

use ::config::ConfigError as ConfigLoaderError;
use anyhow::Error;
use thiserror::Error;

/// Errors that can occur while loading or extracting `config.yaml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist; checked before any parsing.
    #[error("Configuration file {path} was not found")]
    NotFound { path: PathBuf },
    /// Failed to read the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize YAML into the typed sections.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Bundles a fatal error message with the process exit code.
///
/// Every extraction or spawn failure is terminal; the message goes to stderr
/// and the process exits non-zero.
#[derive(Debug)]
pub struct RunnerExit {
    message: String,
    exit_code: ExitCode,
}

impl RunnerExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}
