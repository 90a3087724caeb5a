pub const FRAME_LEN: usize = 2;

pub const LED_OFFSET: usize = 0;
pub const STATE_OFFSET: usize = 1;

pub const STATE_ON: u8 = 0x00;
pub const STATE_OFF: u8 = 0x01;
