//! ASCII command decoding.
//!
//! Terminal-friendly commands of the form `esp led<N> <on|off>`, optionally
//! followed by spaces or a line ending. Tokens must match exactly; anything
//! else after the state, including a second command, rejects the frame.
//! Frames longer than `layout::MAX_LEN` are rejected before parsing.

pub mod error;
pub mod layout;
pub mod parser;

pub use error::TextError;
pub use parser::{TextCommand, decode_text_command, format_text_command, parse_text_command};
