use nom::branch::alt;
use nom::combinator::map;
use nom::IResult;
use crate::parser::{amount, keyword_space, word, Command};

/// Parse `FILTER AMOUNT 100` and `FILTER CATEGORY food` patterns.
pub(crate) fn filter(input: &str) -> IResult<&str, Command> {
    let (input, _) = keyword_space("FILTER")(input)?;
    alt((filter_amount, filter_category))(input)
}

fn filter_amount(input: &str) -> IResult<&str, Command> {
    let (input, _) = keyword_space("AMOUNT")(input)?;
    map(amount, Command::FilterAmount)(input)
}

fn filter_category(input: &str) -> IResult<&str, Command> {
    let (input, _) = keyword_space("CATEGORY")(input)?;
    map(word, Command::FilterCategory)(input)
}
