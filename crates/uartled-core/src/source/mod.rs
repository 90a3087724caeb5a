mod capture;

pub use capture::error::HexError;
pub use capture::parser::parse_hex_frame;
pub use capture::{CaptureFileSource, CaptureSource};

use thiserror::Error;

use crate::protocols::FrameProtocol;

/// One recorded frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameEvent {
    /// One-based line number in the capture.
    pub line: usize,
    /// Seconds since the Unix epoch, when recorded.
    pub ts: Option<f64>,
    pub protocol: FrameProtocol,
    pub data: Vec<u8>,
}

pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("capture parse error at line {line}: {reason}")]
    Capture { line: usize, reason: String },
}

impl From<capture::error::CaptureError> for SourceError {
    fn from(value: capture::error::CaptureError) -> Self {
        match value {
            capture::error::CaptureError::InvalidLine { line, reason } => {
                SourceError::Capture { line, reason }
            }
            capture::error::CaptureError::InvalidHex { line, source } => SourceError::Capture {
                line,
                reason: source.to_string(),
            },
        }
    }
}
