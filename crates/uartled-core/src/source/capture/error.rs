use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex byte '{token}'")]
pub struct HexError {
    pub token: String,
}

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("invalid capture line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },
    #[error("invalid capture line {line}: {source}")]
    InvalidHex {
        line: usize,
        #[source]
        source: HexError,
    },
}
