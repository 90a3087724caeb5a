//! Binary frame decoding.
//!
//! A frame is exactly two bytes: the LED selector (`0..=3` for `Led1..Led4`)
//! followed by the state selector (`0` on, `1` off). Any other length or value
//! is rejected; the length is checked before any byte is read, so over-long
//! frames carrying a second pipelined command are never partially accepted.
//!
//! Decoding is pure: no allocation, no I/O, no shared state. Offsets live in
//! `layout`, bounds-checked access in `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::FrameError;
pub use parser::{decode_command, encode_frame, parse_frame};
