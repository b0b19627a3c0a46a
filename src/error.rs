//! Error types for dispatch and configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::dispatch::Operation;

/// A fault raised at the dispatch boundary.
///
/// None of these are recovered inside the crate: they end the operation that
/// hit them and propagate to whoever started it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchFault {
    /// The base was never pointed at its enclosing value.
    #[error("{shape:?} has no dispatch handle; `{operation}` cannot be resolved")]
    Unwired { shape: String, operation: Operation },

    /// The enclosing value behind the handle no longer exists.
    #[error("dispatch handle of {shape:?} is dangling; `{operation}` cannot be resolved")]
    Dangling { shape: String, operation: Operation },

    /// Resolution came back to the base forwarder it started from: the type
    /// behind the handle has no real implementation of the operation.
    #[error("{shape:?} does not implement `{operation}`; resolution looped back to the base")]
    MissingOperation { shape: String, operation: Operation },
}

impl DispatchFault {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Unwired { operation, .. }
            | Self::Dangling { operation, .. }
            | Self::MissingOperation { operation, .. } => *operation,
        }
    }

    pub fn shape(&self) -> &str {
        match self {
            Self::Unwired { shape, .. }
            | Self::Dangling { shape, .. }
            | Self::MissingOperation { shape, .. } => shape,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
