use super::error::{CaptureError, HexError};
use super::layout;
use crate::protocols::FrameProtocol;
use crate::source::FrameEvent;

/// Parse one capture line without its `\n`. Blank lines and comments yield
/// `None`.
pub(crate) fn parse_line(line: usize, raw: &[u8]) -> Result<Option<FrameEvent>, CaptureError> {
    let content = raw.strip_suffix(b"\r").unwrap_or(raw).trim_ascii_start();
    if content.is_empty() || content.first() == Some(&layout::COMMENT) {
        return Ok(None);
    }

    let (first, rest) = split_field(content);
    let (ts, tag, payload) = if first.first().is_some_and(u8::is_ascii_digit) {
        let ts = parse_timestamp(line, first)?;
        let (tag, payload) = split_field(rest.trim_ascii_start());
        (Some(ts), tag, payload)
    } else {
        (None, first, rest)
    };

    let (protocol, data) = match tag {
        layout::TAG_BINARY => {
            let hex = std::str::from_utf8(payload).map_err(|_| CaptureError::InvalidLine {
                line,
                reason: "binary payload is not valid UTF-8".to_string(),
            })?;
            let data =
                parse_hex_frame(hex).map_err(|source| CaptureError::InvalidHex { line, source })?;
            (FrameProtocol::Binary, data)
        }
        layout::TAG_TEXT => (FrameProtocol::Text, payload.to_vec()),
        [] => {
            return Err(CaptureError::InvalidLine {
                line,
                reason: "missing frame tag".to_string(),
            });
        }
        other => {
            return Err(CaptureError::InvalidLine {
                line,
                reason: format!(
                    "unknown frame tag '{}', expected 'bin' or 'txt'",
                    String::from_utf8_lossy(other)
                ),
            });
        }
    };

    Ok(Some(FrameEvent {
        line,
        ts,
        protocol,
        data,
    }))
}

/// Parse hex bytes such as `00 01`, `0001`, `00:01` or `0x00,0x01`.
///
/// # Examples
/// ```
/// use uartled_core::parse_hex_frame;
///
/// assert_eq!(parse_hex_frame("03 01").unwrap(), vec![0x03, 0x01]);
/// assert_eq!(parse_hex_frame("0x03:0x01").unwrap(), vec![0x03, 0x01]);
/// assert_eq!(parse_hex_frame("0301").unwrap(), vec![0x03, 0x01]);
/// assert!(parse_hex_frame("").unwrap().is_empty());
/// assert!(parse_hex_frame("zz").is_err());
/// ```
pub fn parse_hex_frame(input: &str) -> Result<Vec<u8>, HexError> {
    let mut bytes = Vec::new();
    let tokens = input
        .split(|c: char| c.is_whitespace() || layout::HEX_SEPARATORS.contains(&c))
        .filter(|token| !token.is_empty());

    for token in tokens {
        let invalid = || HexError {
            token: token.to_string(),
        };
        let digits = layout::HEX_PREFIXES
            .iter()
            .find_map(|prefix| token.strip_prefix(prefix))
            .unwrap_or(token);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        if digits.len() > 2 && digits.len() % 2 != 0 {
            return Err(invalid());
        }

        let width = digits.len().min(2);
        for start in (0..digits.len()).step_by(width) {
            let pair = &digits[start..start + width];
            bytes.push(u8::from_str_radix(pair, 16).map_err(|_| invalid())?);
        }
    }

    Ok(bytes)
}

fn split_field(input: &[u8]) -> (&[u8], &[u8]) {
    match input
        .iter()
        .position(|b| layout::FIELD_SEPARATORS.contains(b))
    {
        Some(pos) => (&input[..pos], &input[pos + 1..]),
        None => (input, &[]),
    }
}

fn parse_timestamp(line: usize, token: &[u8]) -> Result<f64, CaptureError> {
    let ts = std::str::from_utf8(token)
        .ok()
        .and_then(|token| token.parse::<f64>().ok());
    match ts {
        Some(ts) if ts.is_finite() => Ok(ts),
        _ => Err(CaptureError::InvalidLine {
            line,
            reason: format!("invalid timestamp '{}'", String::from_utf8_lossy(token)),
        }),
    }
}
