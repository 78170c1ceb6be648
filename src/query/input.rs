use crate::core::QueryError;
use crate::table::{EARLIEST_YEAR, LATEST_YEAR};

pub const SENTINEL: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    Year(i32),
}

/// Only the leading integer of a token counts (`1795abc` asks for 1795).
/// Zero-valued tokens other than exactly `0` are invalid, and any leading
/// integer outside 1790..=2010 is out of range, however long it is.
pub fn parse_input(token: &str) -> Result<Input, QueryError> {
    if token == SENTINEL {
        return Ok(Input::Quit);
    }

    let Some((negative, digits)) = leading_integer(token) else {
        return Err(QueryError::InvalidInput(token.to_string()));
    };
    let magnitude = digits.trim_start_matches('0');
    if magnitude.is_empty() {
        return Err(QueryError::InvalidInput(token.to_string()));
    }

    let shown = if negative {
        format!("-{magnitude}")
    } else {
        magnitude.to_string()
    };
    match shown.parse::<i32>() {
        Ok(year) if (EARLIEST_YEAR..=LATEST_YEAR).contains(&year) => Ok(Input::Year(year)),
        _ => Err(QueryError::OutOfRange(shown)),
    }
}

/// Sign and digit run at the start of the token.
fn leading_integer(token: &str) -> Option<(bool, &str)> {
    let trimmed = token.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    (digits_len > 0).then(|| (negative, &rest[..digits_len]))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_sentinel_quits() {
        assert_eq!(parse_input("0"), Ok(Input::Quit));
    }

    #[rstest]
    #[case::decade("1790", 1790)]
    #[case::between("2005", 2005)]
    #[case::upper_bound("2010", 2010)]
    #[case::plus_sign("+1850", 1850)]
    #[case::trailing_garbage("1795abc", 1795)]
    #[case::leading_zeros("01800", 1800)]
    fn test_parse_year(#[case] token: &str, #[case] year: i32) {
        assert_eq!(parse_input(token), Ok(Input::Year(year)));
    }

    #[rstest]
    #[case::word("hello")]
    #[case::letters("abc")]
    #[case::double_zero("00")]
    #[case::zero_with_suffix("0abc")]
    #[case::negative_zero("-0")]
    #[case::sign_only("-")]
    #[case::letter_first("a1800")]
    fn test_parse_invalid(#[case] token: &str) {
        assert_eq!(
            parse_input(token),
            Err(QueryError::InvalidInput(token.to_string()))
        );
    }

    #[rstest]
    #[case::just_before("1789", "1789")]
    #[case::just_after("2011", "2011")]
    #[case::negative("-1800", "-1800")]
    #[case::leading_zeros("001789", "1789")]
    #[case::plus_sign("+2020x", "2020")]
    #[case::past_i32("123456789012", "123456789012")]
    #[case::past_i64("99999999999999999999999", "99999999999999999999999")]
    #[case::negative_past_i64("-99999999999999999999999", "-99999999999999999999999")]
    fn test_parse_out_of_range(#[case] token: &str, #[case] shown: &str) {
        assert_eq!(
            parse_input(token),
            Err(QueryError::OutOfRange(shown.to_string()))
        );
    }
}
