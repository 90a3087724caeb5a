//! Line-oriented capture of recorded UART frames.
//!
//! ```text
//! # comment
//! 1700000000 bin 00 01
//! bin 03 01
//! txt esp led2 off
//! ```
//!
//! An optional leading timestamp (seconds since the Unix epoch) is followed by
//! the frame tag (`bin` for hex bytes, `txt` for an ASCII command) and the
//! payload. Fields before the payload are separated by spaces or tabs. For
//! `txt` the payload is the rest of the line after one separator, kept as raw
//! bytes, so recorded garbage (including non-UTF-8 bytes) replays as-is.

pub(crate) mod error;
mod layout;
pub(crate) mod parser;

use std::fs::File;
use std::io::{BufRead, BufReader, Split};
use std::path::Path;

use log::trace;

use super::{FrameEvent, FrameSource, SourceError};

pub struct CaptureSource<R> {
    lines: Split<R>,
    line: usize,
}

pub type CaptureFileSource = CaptureSource<BufReader<File>>;

impl CaptureFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(CaptureSource::new(BufReader::new(file)))
    }
}

impl<R: BufRead> CaptureSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.split(layout::LINE_END),
            line: 0,
        }
    }
}

impl<R: BufRead> FrameSource for CaptureSource<R> {
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError> {
        for raw in self.lines.by_ref() {
            let raw = raw?;
            self.line += 1;
            match parser::parse_line(self.line, &raw)? {
                Some(event) => return Ok(Some(event)),
                None => trace!("capture line {}: no frame", self.line),
            }
        }
        Ok(None)
    }
}
