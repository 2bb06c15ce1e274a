use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtoError {
    #[error("unexpected end of buffer")]
    UnexpectedEof,

    #[error("wire type mismatch: {0}")]
    TypeMismatch(String),

    #[error("invalid data type marker {0}")]
    InvalidDataType(u8),

    #[error("nesting depth limit exceeded")]
    DepthLimit,
}

impl ProtoError {
    /// Raised by decode paths when a payload does not match the
    /// representation expected at its tag.
    pub fn type_mismatch(msg: impl Into<String>) -> ProtoError {
        ProtoError::TypeMismatch(msg.into())
    }
}
