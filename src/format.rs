//! Message formatting for encryption.

use alloc::string::String;

/// Number of letters per output group.
pub const GROUP_SIZE: usize = 5;

/// Prepares text for encryption.
///
/// Spaces are dropped, letters are uppercased, and every other character
/// becomes `X`. The result is padded with `X` to a whole number of groups and
/// written as groups of five letters separated by single spaces.
///
/// # Example
///
/// ```
/// use solrs::format_str;
///
/// assert_eq!(format_str("Meet at 9!"), "MEETA TXXXX");
/// ```
#[must_use]
pub fn format_str(input: &str) -> String {
    let mut letters: String = input
        .chars()
        .filter(|&c| c != ' ')
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_uppercase()
            } else {
                'X'
            }
        })
        .collect();

    while letters.len() % GROUP_SIZE != 0 {
        letters.push('X');
    }

    let mut grouped = String::with_capacity(letters.len() + letters.len() / GROUP_SIZE);
    for (i, c) in letters.chars().enumerate() {
        if i > 0 && i % GROUP_SIZE == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_messages() {
        assert_eq!(format_str("test"), format_str("TESTX"));
        assert_eq!(format_str("abc"), "ABCXX");
    }

    #[test]
    fn replaces_non_letters() {
        assert_eq!(format_str("TeST! WItH'"), "TESTX WITHX");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(format_str(""), "");
        assert_eq!(format_str("   "), "");
    }

    #[test]
    fn formatted_text_is_stable() {
        let once = format_str("solitaire is a hand cipher");
        assert_eq!(once, "SOLIT AIREI SAHAN DCIPH ERXXX");
        assert_eq!(format_str(&once), once);
    }
}
