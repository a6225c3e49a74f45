use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unrecognised timestamp '{0}'")]
    InvalidTimestamp(String),
}
