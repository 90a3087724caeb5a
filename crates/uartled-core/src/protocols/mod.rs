//! Command decoding modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: offsets, tokens and limits (source of truth)
//! - `reader`: bounds-checked byte access (binary only)
//! - `parser`: domain-level decoding
//! - `error`: explicit, actionable errors
//!
//! Parsers are pure and contain no I/O or logging; sources and analysis
//! layers handle file access and aggregation.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::command::LedCommand;

pub mod binary;
pub mod text;

use binary::FrameError;
use text::TextError;

/// Wire protocol a frame was received with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameProtocol {
    Binary,
    Text,
}

impl FrameProtocol {
    /// Decode `data` with this protocol's parser.
    pub fn decode(self, data: &[u8]) -> Result<LedCommand, DecodeError> {
        match self {
            FrameProtocol::Binary => binary::parse_frame(data).map_err(DecodeError::from),
            FrameProtocol::Text => text::parse_text_command(data).map_err(DecodeError::from),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FrameProtocol::Binary => "binary",
            FrameProtocol::Text => "text",
        }
    }
}

impl fmt::Display for FrameProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejection reason from either protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error(transparent)]
    Text(#[from] TextError),
}

impl DecodeError {
    pub fn id(&self) -> &'static str {
        match self {
            DecodeError::Frame(err) => err.id(),
            DecodeError::Text(err) => err.id(),
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            DecodeError::Frame(err) => err.summary(),
            DecodeError::Text(err) => err.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DecodeError, FrameProtocol};
    use crate::command::{Led, LedCommand, LedState};
    use crate::protocols::binary::FrameError;
    use crate::protocols::text::TextError;

    #[test]
    fn dispatches_by_protocol() {
        assert_eq!(
            FrameProtocol::Binary.decode(&[0x01, 0x00]),
            Ok(LedCommand::new(Led::Led2, LedState::On))
        );
        assert_eq!(
            FrameProtocol::Text.decode(b"esp led2 on"),
            Ok(LedCommand::new(Led::Led2, LedState::On))
        );
    }

    #[test]
    fn binary_bytes_are_not_text() {
        assert_eq!(
            FrameProtocol::Text.decode(&[0x01, 0x00]),
            Err(DecodeError::Text(TextError::MissingKeyword))
        );
    }

    #[test]
    fn error_ids_pass_through() {
        let err = FrameProtocol::Binary.decode(&[0x00, 0x05]).unwrap_err();
        assert_eq!(err, DecodeError::Frame(FrameError::InvalidState { value: 5 }));
        assert_eq!(err.id(), "UL-FRAME-STATE");
        assert_eq!(err.to_string(), "invalid LED state: 5");
    }
}
