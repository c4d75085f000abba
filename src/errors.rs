use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("no element matches `{0}`")]
    MissingElement(String),
    #[error("dom call failed: {0}")]
    Dom(String),
}
