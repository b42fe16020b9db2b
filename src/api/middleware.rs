//! # Error-chain logging utilities
//!
//! Small helpers to log a full `source()` chain through tracing at the point
//! where a fallible call is made.

use std::error::Error as StdError;

/// Logs the complete error chain of `error`
///
/// # Parameters
/// - `error`: error to walk and log
/// - `context`: optional context added to the log line
pub fn log_error_chain<E>(error: &E, context: Option<&str>)
where
    E: StdError + 'static,
{
    let mut error_chain = Vec::new();
    let mut current_error: Option<&dyn StdError> = Some(error);

    while let Some(err) = current_error {
        error_chain.push(err.to_string());
        current_error = err.source();
    }

    if let Some(ctx) = context {
        tracing::error!(
            context = %ctx,
            error_chain = ?error_chain,
            "Error with full chain (with context)"
        );
    } else {
        tracing::error!(
            error_chain = ?error_chain,
            "Error with full chain"
        );
    }
}

/// Extension trait adding error-chain logging to `Result`
///
/// # Example
/// ```ignore
/// gateway_call()
///     .await
///     .log_error_context("fetching reviews")?;
/// ```
pub trait ErrorLogExt<T, E> {
    /// Logs the error chain, without extra context
    fn log_error_chain(self) -> Result<T, E>;

    /// Logs the error chain with added context
    fn log_error_context(self, context: &str) -> Result<T, E>;
}

impl<T, E> ErrorLogExt<T, E> for Result<T, E>
where
    E: StdError + 'static,
{
    fn log_error_chain(self) -> Result<T, E> {
        if let Err(ref error) = self {
            log_error_chain(error, None);
        }
        self
    }

    fn log_error_context(self, context: &str) -> Result<T, E> {
        if let Err(ref error) = self {
            log_error_chain(error, Some(context));
        }
        self
    }
}
