mod add;
mod filter;

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag_no_case};
use nom::character::complete::{char, multispace0, multispace1};
use nom::combinator::{all_consuming, map, value};
use nom::error::ErrorKind;
use nom::sequence::{delimited, preceded, terminated};
use nom::{IResult, InputTakeAtPosition};
use crate::common::Error;

/// A single line of user input.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    /// ADD amount category
    Add(f64, String),
    /// FILTER AMOUNT value
    FilterAmount(f64),
    /// FILTER CATEGORY name
    FilterCategory(String),
    /// SELECT serial, as shown in the table's first column
    Select(usize),
    Undo,
    List,
    Help,
    Quit,
}

pub(crate) fn parse(line: &str) -> Result<Command, Error> {
    let result = all_consuming(delimited(
        multispace0,
        alt((add::add, filter::filter, select, keyword)),
        multispace0,
    ))(line);

    match result {
        Ok((_, command)) => Ok(command),
        Err(_) => Err(Error::UnrecognisedCommand(line.trim().to_string()))
    }
}

/// Parse `SELECT 3`
fn select(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("SELECT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, serial) = nom::character::complete::u32(input)?;
    Ok((input, Command::Select(serial as usize)))
}

/// Commands without arguments
fn keyword(input: &str) -> IResult<&str, Command> {
    alt((
        value(Command::Undo, tag_no_case("UNDO")),
        value(Command::List, alt((tag_no_case("LIST"), tag_no_case("LS")))),
        value(Command::Help, alt((tag_no_case("HELP"), tag_no_case("?")))),
        value(Command::Quit, alt((tag_no_case("QUIT"), tag_no_case("EXIT")))),
    ))(input)
}

pub(crate) fn non_space1(input: &str) -> IResult<&str, &str> {
    input.split_at_position1_complete(char::is_whitespace, ErrorKind::Alpha)
}

/// A bare word, or anything between single quotes, e.g. `food` or `' '`
pub(crate) fn word(input: &str) -> IResult<&str, String> {
    map(
        alt((delimited(char('\''), is_not("'"), char('\'')), non_space1)),
        |s: &str| s.to_string(),
    )(input)
}

/// Keyword followed by at least one whitespace
pub(crate) fn keyword_space<'a>(keyword: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(tag_no_case(keyword), multispace1)
}

/// Number preceded by whitespace
pub(crate) fn amount(input: &str) -> IResult<&str, f64> {
    preceded(multispace0, nom::number::complete::double)(input)
}
