use thiserror::Error;

/// Errors returned by binary frame decoding.
///
/// # Examples
/// ```
/// use uartled_core::{FrameError, parse_frame};
///
/// let err = parse_frame(&[0x07, 0x00]).unwrap_err();
/// assert_eq!(err, FrameError::InvalidLed { value: 7 });
/// assert_eq!(err.id(), "UL-FRAME-LED");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("invalid frame length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid LED selector: {value}")]
    InvalidLed { value: u8 },
    #[error("invalid LED state: {value}")]
    InvalidState { value: u8 },
}

impl FrameError {
    /// Stable identifier used in replay reports.
    pub fn id(&self) -> &'static str {
        match self {
            FrameError::InvalidLength { .. } => "UL-FRAME-LENGTH",
            FrameError::InvalidLed { .. } => "UL-FRAME-LED",
            FrameError::InvalidState { .. } => "UL-FRAME-STATE",
        }
    }

    /// Value-independent description of the error class.
    pub fn summary(&self) -> &'static str {
        match self {
            FrameError::InvalidLength { .. } => "Frame is not exactly 2 bytes",
            FrameError::InvalidLed { .. } => "LED selector outside 0..=3",
            FrameError::InvalidState { .. } => "State selector is neither 0 (on) nor 1 (off)",
        }
    }
}
