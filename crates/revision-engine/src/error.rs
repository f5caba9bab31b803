use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),
}
