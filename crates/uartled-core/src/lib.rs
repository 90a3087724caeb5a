//! uartled core library: LED commands decoded from raw UART frames.
//!
//! The decoders turn untrusted bytes into a strongly-typed [`Command`]
//! selecting one of four LEDs and an on/off state. Two wire protocols are
//! supported: a two-byte binary frame (`protocols::binary`) and an ASCII
//! command line such as `esp led1 on` (`protocols::text`). Decoding is pure,
//! total and allocation-free; the C ABI entry points [`parse_uart`] and
//! [`parse_uart_text`] wrap the same decoders for firmware written in C.
//!
//! Invariants:
//! - A decoder never reads past the declared length.
//! - `success` is `true` only for a frame that is valid in full; there is no
//!   partial or pipelined decoding.
//! - On failure `led`/`state` hold fixed defaults and carry no meaning.
//!
//! With the default `std` feature the crate also provides the capture replay
//! used by tooling: a line-oriented frame source feeds the decoders and the
//! results are aggregated into a deterministic [`Report`]. Without it the
//! crate is `no_std`.
//!
//! # Examples
//! ```
//! use uartled_core::{Led, LedState, decode_command, decode_text_command};
//!
//! let command = decode_command(&[0x00, 0x00]);
//! assert!(command.success);
//! assert_eq!((command.led, command.state), (Led::Led1, LedState::On));
//!
//! assert!(!decode_command(&[0x01, 0x01, 0x00]).success);
//! assert!(decode_text_command(b"esp led2 off\r\n").success);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod command;
mod ffi;
pub mod protocols;

#[cfg(feature = "std")]
mod analysis;
#[cfg(feature = "std")]
mod report;
#[cfg(feature = "std")]
mod source;

pub use command::{Command, Led, LedCommand, LedState};
pub use ffi::{parse_uart, parse_uart_text};
pub use protocols::binary::layout::FRAME_LEN;
pub use protocols::binary::{FrameError, decode_command, encode_frame, parse_frame};
pub use protocols::text::{
    TextCommand, TextError, decode_text_command, format_text_command, parse_text_command,
};
pub use protocols::{DecodeError, FrameProtocol};

#[cfg(feature = "std")]
pub use analysis::{AnalysisError, analyze_capture_file, analyze_source};
#[cfg(feature = "std")]
pub use report::{
    CaptureSummary, DEFAULT_GENERATED_AT, InputInfo, LedSummary, REPORT_VERSION, RejectionSummary,
    Report, ToolInfo, make_stub_report,
};
#[cfg(feature = "std")]
pub use source::{
    CaptureFileSource, CaptureSource, FrameEvent, FrameSource, HexError, SourceError,
    parse_hex_frame,
};
