use core::fmt;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while};
use nom::combinator::value;

use super::error::TextError;
use super::layout;
use crate::command::{Command, Led, LedCommand, LedState};

type ParseResult<'a, O> = IResult<&'a [u8], O>;

fn keyword(input: &[u8]) -> ParseResult<'_, &[u8]> {
    tag(layout::KEYWORD)(input)
}

fn led(input: &[u8]) -> ParseResult<'_, Led> {
    alt((
        value(Led::Led1, tag(layout::LED1)),
        value(Led::Led2, tag(layout::LED2)),
        value(Led::Led3, tag(layout::LED3)),
        value(Led::Led4, tag(layout::LED4)),
    ))(input)
}

fn separator(input: &[u8]) -> ParseResult<'_, &[u8]> {
    tag(layout::SEPARATOR)(input)
}

fn state(input: &[u8]) -> ParseResult<'_, LedState> {
    alt((
        value(LedState::On, tag(layout::STATE_ON)),
        value(LedState::Off, tag(layout::STATE_OFF)),
    ))(input)
}

fn trailer(input: &[u8]) -> ParseResult<'_, &[u8]> {
    take_while(|byte: u8| layout::TRAILER.contains(&byte))(input)
}

/// Decode an ASCII command such as `esp led2 off`, reporting why it was
/// rejected.
pub fn parse_text_command(input: &[u8]) -> Result<LedCommand, TextError> {
    if input.len() > layout::MAX_LEN {
        return Err(TextError::TooLong {
            max: layout::MAX_LEN,
            actual: input.len(),
        });
    }

    let (rest, _) = keyword(input).map_err(|_| TextError::MissingKeyword)?;
    let (rest, led) = led(rest).map_err(|_| TextError::UnknownLed)?;
    let (rest, _) = separator(rest).map_err(|_| TextError::MissingSeparator)?;
    let (rest, state) = state(rest).map_err(|_| TextError::UnknownState)?;
    let rest = trailer(rest).map_or(rest, |(rest, _)| rest);
    if !rest.is_empty() {
        return Err(TextError::TrailingBytes { count: rest.len() });
    }

    Ok(LedCommand::new(led, state))
}

/// Decode an ASCII command into the C-compatible result.
pub fn decode_text_command(input: &[u8]) -> Command {
    parse_text_command(input).into()
}

/// Text rendering of a command, e.g. `esp led1 on`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCommand(pub LedCommand);

impl fmt::Display for TextCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            layout::KEYWORD,
            layout::led_token(self.0.led),
            layout::SEPARATOR,
            layout::state_token(self.0.state)
        )
    }
}

pub fn format_text_command(command: LedCommand) -> TextCommand {
    TextCommand(command)
}
