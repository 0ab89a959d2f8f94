//! Conversions between letters, numbers, and card values.

use alloc::string::ToString;

use crate::card::Card;
use crate::error::ValueError;

/// Number assigned to any character that is not an ASCII letter ("X").
pub const NON_LETTER: u8 = 24;

/// Converts a letter to its position in the alphabet: `A`/`a` is 1, `Z`/`z` is 26.
///
/// Anything other than an ASCII letter is treated as `X`.
#[must_use]
pub const fn to_number(c: char) -> u8 {
    if c.is_ascii_alphabetic() {
        c.to_ascii_uppercase() as u8 - b'A' + 1
    } else {
        NON_LETTER
    }
}

/// Converts a number to a letter, wrapping in both directions: 1 is `A`,
/// 26 is `Z`, 27 is `A` again, and 0 is `Z`.
#[must_use]
pub const fn to_character(n: i32) -> char {
    (b'A' + (n - 1).rem_euclid(26) as u8) as char
}

/// Wraps any integer into `1..=26`.
const fn wrap(n: i32) -> u8 {
    (n - 1).rem_euclid(26) as u8 + 1
}

/// Reads a decimal integer of any length and wraps it into `1..=26`.
///
/// A leading sign is allowed, as are `_` separators between digits.
fn parse_wrapped_integer(s: &str) -> Option<u8> {
    let s = s.trim();
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return None;
    }

    let mut residue: u32 = 0;
    for c in digits.chars().filter(|&c| c != '_') {
        residue = (residue * 10 + c.to_digit(10)?) % 26;
    }
    let residue = i32::from(residue as u8);
    Some(wrap(if negative { -residue } else { residue }))
}

/// Reads a calculator value.
///
/// Accepted forms, tried in order:
/// - a ranked card identifier such as `"Ace of Clubs"`, read as its deck value
/// - an integer
/// - a single character, read with [`to_number`]
///
/// Card and integer values are wrapped into `1..=26`. Integers may have any
/// number of digits.
///
/// # Errors
///
/// Returns [`ValueError::Unrecognized`] if the text matches none of the forms.
///
/// # Example
///
/// ```
/// use solrs::codec::parse_value;
///
/// assert_eq!(parse_value("Ace of Diamonds"), Ok(14));
/// assert_eq!(parse_value("Ace of Hearts"), Ok(1));
/// assert_eq!(parse_value("30"), Ok(4));
/// assert_eq!(parse_value("c"), Ok(3));
/// ```
pub fn parse_value(s: &str) -> Result<u8, ValueError> {
    if let Ok(card @ Card::Standard { .. }) = s.parse::<Card>() {
        return Ok(wrap(i32::from(card.deck_value())));
    }

    if let Some(value) = parse_wrapped_integer(s) {
        return Ok(value);
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(to_number(c)),
        _ => Err(ValueError::Unrecognized(s.to_string())),
    }
}

/// Adds two calculator values and returns the resulting letter.
///
/// # Errors
///
/// Returns an error if either value cannot be read.
pub fn add_values(n: &str, m: &str) -> Result<char, ValueError> {
    Ok(to_character(
        i32::from(parse_value(n)?) + i32::from(parse_value(m)?),
    ))
}

/// Subtracts the second calculator value from the first and returns the
/// resulting letter.
///
/// # Errors
///
/// Returns an error if either value cannot be read.
pub fn subtract_values(n: &str, m: &str) -> Result<char, ValueError> {
    Ok(to_character(
        i32::from(parse_value(n)?) - i32::from(parse_value(m)?),
    ))
}
