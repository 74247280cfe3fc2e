use log::{Level, LevelFilter, Metadata, Record};
use std::fmt;

// @module: Categorised log messages

/// Category attached to every user-facing log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    /// Whole run finished
    Success,
    /// One output document written
    ProcessSuccess,
    /// Input skipped because its output already exists
    ProcessSkip,
    /// Processing or rendering of one input failed
    ProcessError,
    /// Directory configuration problem
    FileFail,
    /// A single input file could not be read
    FileError,
    /// Extra diagnostics for a preceding error
    ErrorInfo,
}

impl LogCategory {
    pub const ALL: [LogCategory; 7] = [
        Self::Success,
        Self::ProcessSuccess,
        Self::ProcessSkip,
        Self::ProcessError,
        Self::FileFail,
        Self::FileError,
        Self::ErrorInfo,
    ];

    // @returns: Upper snake case label printed in front of the message
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::ProcessSuccess => "PROCESS_SUCCESS",
            Self::ProcessSkip => "PROCESS_SKIP",
            Self::ProcessError => "PROCESS_ERROR",
            Self::FileFail => "FILE_FAIL",
            Self::FileError => "FILE_ERROR",
            Self::ErrorInfo => "ERROR_INFO",
        }
    }

    // @returns: Log level used when emitting this category
    pub fn level(&self) -> Level {
        match self {
            Self::Success | Self::ProcessSuccess => Level::Info,
            Self::ProcessSkip => Level::Warn,
            Self::ProcessError | Self::FileFail | Self::FileError | Self::ErrorInfo => Level::Error,
        }
    }

    /// Find the category whose label equals a log record target
    pub fn from_target(target: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|category| category.as_str() == target)
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a record reaches the output.
///
/// Category lines form the run report and always pass; `filter` only
/// governs the crate's diagnostics.
pub fn is_visible(metadata: &Metadata, filter: LevelFilter) -> bool {
    LogCategory::from_target(metadata.target()).is_some() || metadata.level() <= filter
}

/// Emit a `(category, message)` pair through the installed logger.
///
/// The category travels as the record target so the logger can print it
/// verbatim. The record goes straight to the logger, past the global
/// max level that `log!` checks.
pub fn emit(category: LogCategory, message: impl fmt::Display) {
    log::logger().log(
        &Record::builder()
            .args(format_args!("{}", message))
            .level(category.level())
            .target(category.as_str())
            .build(),
    );
}
