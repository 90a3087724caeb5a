use super::error::FrameError;
use super::layout;
use super::reader::FrameReader;
use crate::command::{Command, LedCommand};

/// Decode a binary frame, reporting why it was rejected.
pub fn parse_frame(frame: &[u8]) -> Result<LedCommand, FrameError> {
    let reader = FrameReader::new(frame);
    reader.require_exact_len(layout::FRAME_LEN)?;

    let led = reader.read_led()?;
    let state = reader.read_state()?;

    Ok(LedCommand::new(led, state))
}

/// Decode a binary frame into the C-compatible result.
pub fn decode_command(frame: &[u8]) -> Command {
    parse_frame(frame).into()
}

/// Build the binary frame for a command.
pub fn encode_frame(command: LedCommand) -> [u8; layout::FRAME_LEN] {
    let mut frame = [0u8; layout::FRAME_LEN];
    frame[layout::LED_OFFSET] = command.led.selector();
    frame[layout::STATE_OFFSET] = command.state.selector();
    frame
}
