use core::fmt;

use serde::{Deserialize, Serialize};

use crate::protocols::binary::layout;

/// One of the four LEDs on the board.
///
/// The discriminants match the C header (`Led1 = 0` .. `Led4 = 3`).
///
/// # Examples
/// ```
/// use uartled_core::Led;
///
/// assert_eq!(Led::from_selector(3), Some(Led::Led4));
/// assert_eq!(Led::from_selector(4), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(C)]
pub enum Led {
    Led1,
    Led2,
    Led3,
    Led4,
}

impl Led {
    /// All LEDs in selector order.
    pub const ALL: [Led; 4] = [Led::Led1, Led::Led2, Led::Led3, Led::Led4];

    /// Range-checked conversion from a binary frame selector.
    pub fn from_selector(value: u8) -> Option<Self> {
        match value {
            0 => Some(Led::Led1),
            1 => Some(Led::Led2),
            2 => Some(Led::Led3),
            3 => Some(Led::Led4),
            _ => None,
        }
    }

    /// Selector byte used by the binary frame protocol.
    pub fn selector(self) -> u8 {
        match self {
            Led::Led1 => 0,
            Led::Led2 => 1,
            Led::Led3 => 2,
            Led::Led4 => 3,
        }
    }

    /// One-based LED number as printed on the board.
    pub fn number(self) -> u8 {
        self.selector() + 1
    }
}

impl fmt::Display for Led {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "led{}", self.number())
    }
}

/// Requested LED state.
///
/// # Examples
/// ```
/// use uartled_core::LedState;
///
/// assert_eq!(LedState::from_selector(0), Some(LedState::On));
/// assert_eq!(LedState::from_selector(1), Some(LedState::Off));
/// assert_eq!(LedState::from_selector(2), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(C)]
pub enum LedState {
    On,
    Off,
}

impl LedState {
    /// Range-checked conversion from a binary frame selector.
    pub fn from_selector(value: u8) -> Option<Self> {
        match value {
            layout::STATE_ON => Some(LedState::On),
            layout::STATE_OFF => Some(LedState::Off),
            _ => None,
        }
    }

    /// Selector byte used by the binary frame protocol.
    pub fn selector(self) -> u8 {
        match self {
            LedState::On => layout::STATE_ON,
            LedState::Off => layout::STATE_OFF,
        }
    }
}

impl fmt::Display for LedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedState::On => f.write_str("on"),
            LedState::Off => f.write_str("off"),
        }
    }
}

/// A successfully decoded command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LedCommand {
    pub led: Led,
    pub state: LedState,
}

impl LedCommand {
    pub fn new(led: Led, state: LedState) -> Self {
        Self { led, state }
    }
}

/// Decode result handed across the C ABI.
///
/// `led` and `state` are only meaningful when `success` is `true`. On failure
/// they hold [`Command::FAILURE`]'s fixed values so the struct is always fully
/// initialized. Rust callers should prefer [`Command::command`].
///
/// # Examples
/// ```
/// use uartled_core::{Command, Led, LedState, decode_command};
///
/// let command = decode_command(&[0x03, 0x01]);
/// assert!(command.success);
/// assert_eq!(command.led, Led::Led4);
/// assert_eq!(command.state, LedState::Off);
///
/// assert_eq!(decode_command(&[0x04, 0x00]), Command::FAILURE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct Command {
    /// `true` iff the input was a valid command.
    pub success: bool,
    /// Which LED to operate on.
    pub led: Led,
    /// Which state to put the LED in.
    pub state: LedState,
}

impl Command {
    /// The value returned for every rejected input.
    pub const FAILURE: Command = Command {
        success: false,
        led: Led::Led1,
        state: LedState::On,
    };

    /// The decoded command, or `None` when decoding failed.
    pub fn command(&self) -> Option<LedCommand> {
        self.success.then(|| LedCommand::new(self.led, self.state))
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::FAILURE
    }
}

impl From<LedCommand> for Command {
    fn from(command: LedCommand) -> Self {
        Command {
            success: true,
            led: command.led,
            state: command.state,
        }
    }
}

impl<E> From<Result<LedCommand, E>> for Command {
    fn from(result: Result<LedCommand, E>) -> Self {
        match result {
            Ok(command) => command.into(),
            Err(_) => Command::FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn led_selector_round_trips() {
        for led in Led::ALL {
            assert_eq!(Led::from_selector(led.selector()), Some(led));
        }
    }

    #[test]
    fn led_display_uses_board_numbering() {
        assert_eq!(Led::Led1.to_string(), "led1");
        assert_eq!(Led::Led4.to_string(), "led4");
    }

    #[test]
    fn failure_hides_fields() {
        let command = Command::FAILURE;
        assert!(!command.success);
        assert_eq!(command.command(), None);
        assert_eq!(Command::default(), Command::FAILURE);
    }

    #[test]
    fn failed_result_collapses_to_failure() {
        let command: Command = Err::<LedCommand, ()>(()).into();
        assert_eq!(command, Command::FAILURE);
    }

    #[test]
    fn success_exposes_command() {
        let command = Command::from(LedCommand::new(Led::Led2, LedState::Off));
        assert_eq!(
            command.command(),
            Some(LedCommand::new(Led::Led2, LedState::Off))
        );
    }

    #[test]
    fn serializes_lowercase_names() {
        let value = serde_json::to_value(Command::from(LedCommand::new(Led::Led3, LedState::On)))
            .expect("command json");
        assert_eq!(value["led"], "led3");
        assert_eq!(value["state"], "on");
        assert_eq!(value["success"], true);
    }
}
