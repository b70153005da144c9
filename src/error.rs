use thiserror::Error;

pub type Result<T> = std::result::Result<T, DhError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DhError {
    #[error("expected {expected} argument(s), got {found}")]
    ArgumentCountMismatch { expected: usize, found: usize },
    #[error("argument `{name}` bound to conflicting values {first} and {second}")]
    ConflictingArgument { name: String, first: f64, second: f64 },
    #[error("unbound variable: {0}")]
    UnboundVariable(String),
    #[error("parse error: {0}")]
    Parse(String),
}
