use procall_core::ProcallError;
use thiserror::Error;

pub type ProcedureResult<T> = Result<T, ProcedureError>;

/// Errors reported by procedure and function calls
#[derive(Debug, Error)]
pub enum ProcedureError {
    /// The call was rejected before touching the database
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Preparing, binding, executing or reading back the call failed
    #[error("Call to {procedure} failed: {source}")]
    Execution {
        procedure: String,
        #[source]
        source: ProcallError,
    },
}

impl ProcedureError {
    /// Turn a core validation error into a configuration error
    pub(crate) fn configuration(err: ProcallError) -> Self {
        match err {
            ProcallError::Configuration(msg) => ProcedureError::Configuration(msg),
            other => ProcedureError::Configuration(other.to_string()),
        }
    }
}
