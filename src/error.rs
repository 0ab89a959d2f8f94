//! Error types for card, deck, and cipher operations.

#[cfg(feature = "std")]
use alloc::vec::Vec;
use alloc::string::String;

use thiserror::Error;

use crate::card::{Card, Joker};

/// Errors that can occur when building or comparing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is not a number in 1..=13 or a recognized rank name.
    #[error("not a recognized card rank")]
    InvalidRank,
    /// Suit is not one of Clubs, Diamonds, Hearts, or Spades.
    #[error("not a recognized suit")]
    InvalidSuit,
    /// Joker label is not "A" or "B".
    #[error("not a recognized joker label")]
    InvalidJoker,
    /// Jokers have no suit and cannot be ordered.
    #[error("jokers cannot be compared")]
    IncomparableJoker,
    /// Identifier is neither `<Rank> of <Suit>` nor `Joker (<label>)`.
    #[error("malformed card identifier")]
    MalformedIdentifier,
}

/// Errors that can occur when building a deck from supplied cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck does not hold exactly 54 cards.
    #[error("malformed deck: expected 54 cards, found {0}")]
    WrongSize(usize),
    /// A card appears more than once.
    #[error("malformed deck: duplicate card {0}")]
    DuplicateCard(Card),
    /// One of the jokers is missing.
    #[error("malformed deck: missing joker {0}")]
    MissingJoker(Joker),
    /// A card identifier could not be parsed.
    #[error("malformed deck: {0}")]
    Card(#[from] CardError),
}

/// Errors that can occur while drawing a keystream value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeystreamError {
    /// The card selected by the top card is a joker; the round yields no value.
    #[error("selected card is a joker")]
    JokerSelected,
}

/// Errors that can occur when reading a calculator value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The text is not a card, an integer, or a single character.
    #[error("unrecognized value: {0:?}")]
    Unrecognized(String),
}

/// Errors that can occur when reading or writing serialized decks.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading or writing a deck file failed.
    #[error("deck file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The text is not a JSON list of card identifiers.
    #[error("invalid deck json: {0}")]
    Json(#[from] serde_json::Error),
    /// The cards do not form a valid deck.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// No supported format could read the source.
    #[error("unrecognized deck format ({} formats tried)", .attempts.len())]
    Unrecognized {
        /// Each format tried, in order, with the reason it failed.
        attempts: Vec<(crate::serial::DeckSource, Self)>,
    },
}
