use crate::command::{Led, LedState};

pub const KEYWORD: &str = "esp ";
pub const SEPARATOR: &str = " ";

pub const LED1: &str = "led1";
pub const LED2: &str = "led2";
pub const LED3: &str = "led3";
pub const LED4: &str = "led4";

pub const STATE_ON: &str = "on";
pub const STATE_OFF: &str = "off";

/// Bytes accepted after the state token (terminal line endings, padding).
pub const TRAILER: &[u8] = b" \r\n";

/// Longest accepted frame, trailer included.
pub const MAX_LEN: usize = 32;

pub fn led_token(led: Led) -> &'static str {
    match led {
        Led::Led1 => LED1,
        Led::Led2 => LED2,
        Led::Led3 => LED3,
        Led::Led4 => LED4,
    }
}

pub fn state_token(state: LedState) -> &'static str {
    match state {
        LedState::On => STATE_ON,
        LedState::Off => STATE_OFF,
    }
}
