use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MainlineError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unknown tag: {0}")]
    UnknownTag(String),
}
