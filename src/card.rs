//! Card types, canonical identifiers, and deck values.

use alloc::string::{String, ToString};
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Number of ranked cards per suit.
pub const SUIT_SIZE: u8 = 13;

/// Deck value assigned to either joker.
pub const JOKER_VALUE: u8 = 53;

/// Accepted spellings for each rank, indexed by `rank - 1`.
///
/// The first entry of each group is the canonical name.
const RANK_NAMES: [&[&str]; SUIT_SIZE as usize] = [
    &["Ace", "one", "1"],
    &["Two", "2", "deuce"],
    &["Three", "3"],
    &["Four", "4"],
    &["Five", "5"],
    &["Six", "6"],
    &["Seven", "7"],
    &["Eight", "8"],
    &["Nine", "9"],
    &["Ten", "10"],
    &["Jack", "11"],
    &["Queen", "12"],
    &["King", "13"],
];

/// Card suit, declared in bridge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in bridge order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the canonical name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }

    /// Returns the amount added to a rank to get a deck value.
    #[must_use]
    pub const fn offset(self) -> u8 {
        self as u8 * SUIT_SIZE
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    /// Parses a suit name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(CardError::InvalidSuit)
    }
}

/// One of the two distinguishable jokers.
///
/// The label only tells the jokers apart; it never takes part in ordering or
/// value computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joker {
    /// The joker labelled "A".
    A,
    /// The joker labelled "B".
    B,
}

impl Joker {
    /// Returns the label used in the joker's identifier.
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
        }
    }
}

impl fmt::Display for Joker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Joker {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            _ => Err(CardError::InvalidJoker),
        }
    }
}

/// A card in a Solitaire deck.
///
/// Identifiers take the form `"<Rank> of <Suit>"` (for example
/// `"Ace of Clubs"`) or `"Joker (<label>)"`.
///
/// # Example
///
/// ```
/// use solrs::{Card, Suit};
///
/// let card: Card = "deuce of hearts".parse().unwrap();
/// assert_eq!(card, Card::new(Suit::Hearts, 2).unwrap());
/// assert_eq!(card.to_string(), "Two of Hearts");
/// assert_eq!(card.deck_value(), 28);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Card {
    /// A ranked card.
    ///
    /// Building this variant directly skips rank validation; prefer
    /// [`Card::new`].
    Standard {
        /// The suit of the card.
        suit: Suit,
        /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
        rank: u8,
    },
    /// A joker.
    Joker(Joker),
}

impl Card {
    /// Creates a ranked card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank == 0 || rank > SUIT_SIZE {
            return Err(CardError::InvalidRank);
        }
        Ok(Self::Standard { suit, rank })
    }

    /// Parses a rank from a number or one of its names, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the text names no rank.
    pub fn parse_rank(s: &str) -> Result<u8, CardError> {
        let s = s.trim();
        RANK_NAMES
            .iter()
            .position(|names| names.iter().any(|name| name.eq_ignore_ascii_case(s)))
            .map(|index| index as u8 + 1)
            .ok_or(CardError::InvalidRank)
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self, Self::Joker(_))
    }

    /// Returns the suit of a ranked card.
    ///
    /// # Errors
    ///
    /// Jokers have no suit and yield [`CardError::IncomparableJoker`].
    pub const fn suit(&self) -> Result<Suit, CardError> {
        match self {
            Self::Standard { suit, .. } => Ok(*suit),
            Self::Joker(_) => Err(CardError::IncomparableJoker),
        }
    }

    /// Returns the card's deck value: suit offset plus rank, or 53 for a joker.
    #[must_use]
    pub const fn deck_value(&self) -> u8 {
        match self {
            Self::Standard { suit, rank } => suit.offset() + *rank,
            Self::Joker(_) => JOKER_VALUE,
        }
    }

    /// Compares two ranked cards by suit in bridge order, then by rank.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::IncomparableJoker`] if either card is a joker.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, CardError> {
        match (self, other) {
            (
                Self::Standard { suit, rank },
                Self::Standard {
                    suit: other_suit,
                    rank: other_rank,
                },
            ) => Ok(suit.cmp(other_suit).then(rank.cmp(other_rank))),
            _ => Err(CardError::IncomparableJoker),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard { suit, rank } => {
                match RANK_NAMES.get(usize::from(*rank).wrapping_sub(1)) {
                    Some(names) => write!(f, "{} of {suit}", names[0]),
                    None => write!(f, "{rank} of {suit}"),
                }
            }
            Self::Joker(joker) => write!(f, "Joker ({joker})"),
        }
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix("Joker") {
            let label = rest
                .trim()
                .strip_prefix('(')
                .and_then(|rest| rest.strip_suffix(')'))
                .ok_or(CardError::MalformedIdentifier)?;
            return Ok(Self::Joker(label.parse()?));
        }

        let (rank, suit) = s.split_once(" of ").ok_or(CardError::MalformedIdentifier)?;
        Self::new(suit.parse()?, Self::parse_rank(rank)?)
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_aliases_parse_case_insensitively() {
        assert_eq!(Card::parse_rank("ace"), Ok(1));
        assert_eq!(Card::parse_rank("ONE"), Ok(1));
        assert_eq!(Card::parse_rank("Deuce"), Ok(2));
        assert_eq!(Card::parse_rank("10"), Ok(10));
        assert_eq!(Card::parse_rank("king"), Ok(13));
        assert_eq!(Card::parse_rank("14"), Err(CardError::InvalidRank));
        assert_eq!(Card::parse_rank("knight"), Err(CardError::InvalidRank));
    }

    #[test]
    fn suits_parse_case_insensitively() {
        assert_eq!("spades".parse(), Ok(Suit::Spades));
        assert_eq!("DIAMONDS".parse(), Ok(Suit::Diamonds));
        assert_eq!("Cups".parse::<Suit>(), Err(CardError::InvalidSuit));
    }

    #[test]
    fn new_rejects_out_of_range_ranks() {
        assert_eq!(Card::new(Suit::Clubs, 0), Err(CardError::InvalidRank));
        assert_eq!(Card::new(Suit::Clubs, 14), Err(CardError::InvalidRank));
    }

    #[test]
    fn deck_values_follow_bridge_order() {
        assert_eq!(Card::new(Suit::Clubs, 1).unwrap().deck_value(), 1);
        assert_eq!(Card::new(Suit::Diamonds, 1).unwrap().deck_value(), 14);
        assert_eq!(Card::new(Suit::Hearts, 13).unwrap().deck_value(), 39);
        assert_eq!(Card::new(Suit::Spades, 13).unwrap().deck_value(), 52);
        assert_eq!(Card::Joker(Joker::B).deck_value(), JOKER_VALUE);
    }

    #[test]
    fn ordering_uses_suit_then_rank() {
        let king_of_clubs = Card::new(Suit::Clubs, 13).unwrap();
        let two_of_diamonds = Card::new(Suit::Diamonds, 2).unwrap();
        let ace_of_diamonds = Card::new(Suit::Diamonds, 1).unwrap();

        assert_eq!(king_of_clubs.try_cmp(&two_of_diamonds), Ok(Ordering::Less));
        assert_eq!(
            two_of_diamonds.try_cmp(&ace_of_diamonds),
            Ok(Ordering::Greater)
        );
        assert_eq!(
            king_of_clubs.try_cmp(&Card::Joker(Joker::A)),
            Err(CardError::IncomparableJoker)
        );
        assert_eq!(
            Card::Joker(Joker::A).suit(),
            Err(CardError::IncomparableJoker)
        );
    }

    #[test]
    fn identifiers_parse_and_render() {
        let card: Card = "queen of spades".parse().unwrap();
        assert_eq!(card.to_string(), "Queen of Spades");

        let joker: Card = "Joker (B)".parse().unwrap();
        assert_eq!(joker, Card::Joker(Joker::B));
        assert_eq!(joker.to_string(), "Joker (B)");

        assert_eq!(
            "Queen Spades".parse::<Card>(),
            Err(CardError::MalformedIdentifier)
        );
        assert_eq!("Joker (C)".parse::<Card>(), Err(CardError::InvalidJoker));
        assert_eq!("Joker B".parse::<Card>(), Err(CardError::MalformedIdentifier));
    }

    #[test]
    fn unvalidated_ranks_render_as_numbers() {
        let card = Card::Standard {
            suit: Suit::Hearts,
            rank: 14,
        };
        assert_eq!(card.to_string(), "14 of Hearts");
        assert_eq!(
            Card::Standard {
                suit: Suit::Clubs,
                rank: 0,
            }
            .to_string(),
            "0 of Clubs"
        );
        assert_eq!(card.to_string().parse::<Card>(), Err(CardError::InvalidRank));
    }

    #[test]
    fn jokers_are_equal_only_by_label() {
        assert_eq!(Card::Joker(Joker::A), Card::Joker(Joker::A));
        assert_ne!(Card::Joker(Joker::A), Card::Joker(Joker::B));
    }
}
