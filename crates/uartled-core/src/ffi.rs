//! C ABI entry points.
//!
//! Both functions validate `length` (and reject a null `input`) before any
//! byte is read, then build a slice of exactly `length` bytes. They never
//! read past `length`, whatever the buffer holds.

use core::slice;

use crate::command::Command;
use crate::protocols::binary::{self, layout};
use crate::protocols::text;

/// Decode a binary frame received over the UART.
///
/// # Safety
/// When `length` is 2 and `input` is non-null, `input` must point to 2
/// readable bytes that stay unchanged for the duration of the call. For any
/// other `length` the pointer is never dereferenced.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn parse_uart(input: *const u8, length: u32) -> Command {
    if usize::try_from(length) != Ok(layout::FRAME_LEN) || input.is_null() {
        return Command::FAILURE;
    }
    // SAFETY: `input` is non-null and the caller guarantees `length` (== FRAME_LEN)
    // readable bytes behind it.
    let frame = unsafe { slice::from_raw_parts(input, layout::FRAME_LEN) };
    binary::decode_command(frame)
}

/// Decode an ASCII command (`esp led1 on`) received over the UART.
///
/// # Safety
/// When `length` is at most `text::layout::MAX_LEN` and `input` is non-null,
/// `input` must point to `length` readable bytes that stay unchanged for the
/// duration of the call. Longer inputs are rejected without being read.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn parse_uart_text(input: *const u8, length: u32) -> Command {
    let Ok(length) = usize::try_from(length) else {
        return Command::FAILURE;
    };
    if length > text::layout::MAX_LEN || input.is_null() {
        return Command::FAILURE;
    }
    // SAFETY: `input` is non-null and the caller guarantees `length` readable
    // bytes behind it.
    let bytes = unsafe { slice::from_raw_parts(input, length) };
    text::decode_text_command(bytes)
}

#[cfg(test)]
mod tests {
    use core::ptr;

    use super::{parse_uart, parse_uart_text};
    use crate::command::{Command, Led, LedState};

    #[test]
    fn parse_uart_valid_frame() {
        let frame = [0x02, 0x00];
        let command = unsafe { parse_uart(frame.as_ptr(), frame.len() as u32) };
        assert_eq!(
            command,
            Command {
                success: true,
                led: Led::Led3,
                state: LedState::On,
            }
        );
    }

    #[test]
    fn parse_uart_null_pointer() {
        assert_eq!(unsafe { parse_uart(ptr::null(), 0) }, Command::FAILURE);
        assert_eq!(unsafe { parse_uart(ptr::null(), 2) }, Command::FAILURE);
    }

    #[test]
    fn parse_uart_respects_declared_length() {
        // A valid frame sits behind the pointer, but only one byte is declared.
        let buffer = [0x00, 0x00, 0x00];
        assert_eq!(unsafe { parse_uart(buffer.as_ptr(), 1) }, Command::FAILURE);
        assert_eq!(unsafe { parse_uart(buffer.as_ptr(), 3) }, Command::FAILURE);
        assert!(unsafe { parse_uart(buffer.as_ptr(), 2) }.success);
    }

    #[test]
    fn parse_uart_text_valid_command() {
        let input = b"esp led2 off";
        let command = unsafe { parse_uart_text(input.as_ptr(), input.len() as u32) };
        assert_eq!(
            command,
            Command {
                success: true,
                led: Led::Led2,
                state: LedState::Off,
            }
        );
    }

    #[test]
    fn parse_uart_text_declared_length_cuts_command() {
        let input = b"esp led2 offset";
        assert!(unsafe { parse_uart_text(input.as_ptr(), 12) }.success);
        assert!(!unsafe { parse_uart_text(input.as_ptr(), 11) }.success);
    }

    #[test]
    fn parse_uart_text_null_pointer() {
        assert_eq!(unsafe { parse_uart_text(ptr::null(), 0) }, Command::FAILURE);
        assert_eq!(unsafe { parse_uart_text(ptr::null(), 11) }, Command::FAILURE);
    }

    #[test]
    fn parse_uart_text_rejects_oversized_length_without_reading() {
        let input = b"esp led1 on";
        assert_eq!(
            unsafe { parse_uart_text(input.as_ptr(), u32::MAX) },
            Command::FAILURE
        );
    }
}
