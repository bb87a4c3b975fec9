//! Error types for the recolor_drinks library

use std::path::PathBuf;

use thiserror::Error;

use crate::detection::SubjectKind;

/// Result type alias for recolor_drinks operations
pub type Result<T> = std::result::Result<T, RecolorError>;

/// Error types for template recoloring and batch generation
#[derive(Error, Debug)]
pub enum RecolorError {
    /// Template file absent at startup; fatal for the whole batch
    #[error("Template for {kind} not found: {}", .path.display())]
    TemplateMissing { kind: SubjectKind, path: PathBuf },

    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Output image could not be encoded or written
    #[error("Failed to write output: {message}")]
    Encode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration rejected at load time
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    /// Filesystem operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl RecolorError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an encode/write error with context
    pub fn encode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Encode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Check whether this error aborts a whole batch run.
    ///
    /// Missing templates and unusable configuration leave no per-item work
    /// to do; everything else is a terminal outcome for a single item.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RecolorError::TemplateMissing { .. } | RecolorError::Config { .. }
        )
    }
}
