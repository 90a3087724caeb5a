use thiserror::Error;

/// Errors returned by text command decoding.
///
/// # Examples
/// ```
/// use uartled_core::{TextError, parse_text_command};
///
/// let err = parse_text_command(b"esp led5 on").unwrap_err();
/// assert_eq!(err, TextError::UnknownLed);
/// assert!(err.to_string().contains("unknown LED"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("command too long: at most {max} bytes, got {actual}")]
    TooLong { max: usize, actual: usize },
    #[error("missing 'esp' keyword")]
    MissingKeyword,
    #[error("unknown LED, expected led1..led4")]
    UnknownLed,
    #[error("missing space between LED and state")]
    MissingSeparator,
    #[error("unknown state, expected 'on' or 'off'")]
    UnknownState,
    #[error("{count} unexpected trailing bytes")]
    TrailingBytes { count: usize },
}

impl TextError {
    /// Stable identifier used in replay reports.
    pub fn id(&self) -> &'static str {
        match self {
            TextError::TooLong { .. } => "UL-TEXT-LENGTH",
            TextError::MissingKeyword => "UL-TEXT-KEYWORD",
            TextError::UnknownLed => "UL-TEXT-LED",
            TextError::MissingSeparator => "UL-TEXT-SEPARATOR",
            TextError::UnknownState => "UL-TEXT-STATE",
            TextError::TrailingBytes { .. } => "UL-TEXT-TRAILING",
        }
    }

    /// Value-independent description of the error class.
    pub fn summary(&self) -> &'static str {
        match self {
            TextError::TooLong { .. } => "Command exceeds the maximum length",
            TextError::MissingKeyword => "Command does not start with 'esp '",
            TextError::UnknownLed => "LED token is not led1..led4",
            TextError::MissingSeparator => "No space between LED and state",
            TextError::UnknownState => "State token is neither 'on' nor 'off'",
            TextError::TrailingBytes { .. } => "Unexpected bytes after the state token",
        }
    }
}
