use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    /// A value failed validation against a spec that the program itself
    /// supplied. The payload is the spec's rejection message.
    #[error("{0}")]
    Invalid(String),
    /// Like [`SpecError::Invalid`], labelled with the parameter name.
    #[error("{name}: {message}")]
    InvalidParam { name: String, message: String },
    /// The input source ended before a valid value was provided.
    #[error("input ended before a valid value was provided")]
    InputClosed,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpecError>;
