//! Application error types and fatal error reporting
//!
//! The converter itself has no failure modes. Everything that can go wrong
//! lives around it: locale identifiers, configuration files, logger setup and
//! the standard streams.

use crate::app::cli::config::ConfigError;
use crate::core::locale::LocaleError;

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)` with a helpful message. When it returns `false`,
/// `user_message()` should return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if the error carries a message the user can act on
    /// (a bad locale tag, a malformed config file)
    fn is_user_actionable(&self) -> bool;

    /// The message to show for user-actionable errors
    fn user_message(&self) -> Option<String>;
}

/// Top-level error for a `titlecase` run
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),

    #[error("Failed to read text from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

impl ContextualError for AppError {
    fn is_user_actionable(&self) -> bool {
        match self {
            AppError::Locale(_) => true,
            AppError::Config(e) => e.is_user_actionable(),
            // Input that is not valid UTF-8
            AppError::Stdin(e) => e.kind() == std::io::ErrorKind::InvalidData,
            AppError::Logging(_) | AppError::Output(_) => false,
        }
    }

    fn user_message(&self) -> Option<String> {
        if self.is_user_actionable() {
            Some(self.to_string())
        } else {
            None
        }
    }
}

/// Log errors with appropriate detail level based on error specificity
///
/// User-actionable errors log their own message. System errors log the
/// operation context, with the error itself at debug level.
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => log::error!("FATAL: {}", user_msg),
        _ => log::error!("FATAL: {}", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
