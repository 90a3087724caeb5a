use super::error::FrameError;
use super::layout;
use crate::command::{Led, LedState};

pub struct FrameReader<'a> {
    frame: &'a [u8],
}

impl<'a> FrameReader<'a> {
    pub fn new(frame: &'a [u8]) -> Self {
        Self { frame }
    }

    pub fn require_exact_len(&self, expected: usize) -> Result<(), FrameError> {
        if self.frame.len() != expected {
            return Err(FrameError::InvalidLength {
                expected,
                actual: self.frame.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, FrameError> {
        self.frame
            .get(offset)
            .copied()
            .ok_or(FrameError::InvalidLength {
                expected: layout::FRAME_LEN,
                actual: self.frame.len(),
            })
    }

    pub fn read_led(&self) -> Result<Led, FrameError> {
        let value = self.read_u8(layout::LED_OFFSET)?;
        Led::from_selector(value).ok_or(FrameError::InvalidLed { value })
    }

    pub fn read_state(&self) -> Result<LedState, FrameError> {
        let value = self.read_u8(layout::STATE_OFFSET)?;
        LedState::from_selector(value).ok_or(FrameError::InvalidState { value })
    }
}
