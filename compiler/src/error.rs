use thiserror::Error;

#[derive(Debug, Error)]
pub enum StprotoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Semantic error: {0}")]
    Semantic(String),
}
