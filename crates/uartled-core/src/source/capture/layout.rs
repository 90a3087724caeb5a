pub const LINE_END: u8 = b'\n';
pub const COMMENT: u8 = b'#';
pub const FIELD_SEPARATORS: [u8; 2] = [b' ', b'\t'];

pub const TAG_BINARY: &[u8] = b"bin";
pub const TAG_TEXT: &[u8] = b"txt";

pub const HEX_PREFIXES: [&str; 2] = ["0x", "0X"];
pub const HEX_SEPARATORS: [char; 2] = [',', ':'];
