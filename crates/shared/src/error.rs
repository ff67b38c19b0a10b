use thiserror::Error;

/// Rejections raised where free-form text is parsed into domain values,
/// such as configuration or named filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("unknown filter '{0}' (expected all, todo, pending or completed)")]
    UnknownFilter(String),
    #[error("unknown task status '{0}' (expected todo, pending or completed)")]
    UnknownStatus(String),
}
