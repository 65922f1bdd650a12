use nom::IResult;
use crate::parser::{amount, keyword_space, word, Command};
use nom::character::complete::multispace1;

/// Parse `ADD 12.50 food` pattern.
pub(crate) fn add(input: &str) -> IResult<&str, Command> {
    let (input, _) = keyword_space("ADD")(input)?;
    let (input, amount) = amount(input)?;
    let (input, _) = multispace1(input)?;
    let (input, category) = word(input)?;
    Ok((input, Command::Add(amount, category)))
}

#[cfg(test)]
mod tests {
    use crate::parser::{parse, Command};

    #[test]
    fn test() {
        assert_eq!(parse("add 50 food"), Ok(Command::Add(50.0, "food".to_string())));
        assert_eq!(parse("ADD 12.5   bills "), Ok(Command::Add(12.5, "bills".to_string())));
        assert_eq!(parse("add -50 food"), Ok(Command::Add(-50.0, "food".to_string())));
        // validation happens later, so odd categories still parse
        assert_eq!(parse("add 50 ' '"), Ok(Command::Add(50.0, " ".to_string())));
        assert_eq!(parse("add 50 0123"), Ok(Command::Add(50.0, "0123".to_string())));

        assert!(parse("add food 50").is_err());
        assert!(parse("add 50").is_err());
        assert!(parse("add 50 fast food").is_err());
    }
}
