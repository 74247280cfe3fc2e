/*!
 * Error types for the canto-typeset application.
 *
 * This module contains custom error types for the alignment engine, the
 * document renderers and the batch controller, using the thiserror crate
 * for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

use crate::log_sink::LogCategory;

/// Errors that can occur while aligning phonetic symbols with lyric text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// Token count and character count differ for one block pair
    #[error("Phonetic symbols and text do not match: {token_count} tokens vs {char_count} characters")]
    Mismatch {
        /// Symbol block after substitution
        symbols: String,
        /// Word block as read from the input
        words: String,
        /// Number of tone-terminated tokens
        token_count: usize,
        /// Number of characters in the word block
        char_count: usize,
    },
}

/// Errors that can occur while rendering a document
#[derive(Error, Debug)]
pub enum RenderError {
    /// The configured font could not be loaded
    #[error("Failed to load font {path:?}: {message}")]
    Font {
        /// Font file that was requested
        path: PathBuf,
        /// Underlying cause
        message: String,
    },

    /// The layout engine rejected the document
    #[error("Layout error: {0}")]
    Layout(String),

    /// Writing the rendered output failed
    #[error("I/O error while rendering: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid or unusable configuration, fatal for the whole run
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An input file vanished between listing and reading
    #[error("File not found: {0:?}")]
    FileNotFound(PathBuf),

    /// Error from the alignment engine
    #[error("Alignment error: {0}")]
    Alignment(#[from] AlignError),

    /// Error from a document renderer
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AppError {
    /// Log category under which this error is reported
    pub fn log_category(&self) -> LogCategory {
        match self {
            Self::Configuration(_) => LogCategory::FileFail,
            Self::FileNotFound(_) | Self::File(_) => LogCategory::FileError,
            Self::Alignment(_) | Self::Render(_) | Self::Unknown(_) => LogCategory::ProcessError,
        }
    }
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
