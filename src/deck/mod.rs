//! The Solitaire deck: construction, shuffling, and inspection.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::Rng;
use rand::seq::SliceRandom;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, Joker, SUIT_SIZE, Suit};
use crate::error::DeckError;

mod cipher;
mod moves;

pub use cipher::Keystream;

/// Number of cards in a Solitaire deck, both jokers included.
pub const DECK_SIZE: usize = 54;

/// An ordered Solitaire deck.
///
/// The order of the cards is the cipher's entire state: every keying and
/// keystream step rearranges it in place. The deck always holds the 52 ranked
/// cards once each plus jokers A and B. Clone the deck to keep a snapshot.
///
/// # Example
///
/// ```
/// use solrs::{Deck, format_str};
///
/// let mut sender = Deck::new();
/// let mut receiver = sender.clone();
///
/// let ciphertext = sender.encrypt(&format_str("AAAAAAAAAAAAAAA"));
/// assert_eq!(ciphertext, "EXKYI ZSGEH UNTIQ");
/// assert_eq!(receiver.decrypt(&ciphertext), "AAAAA AAAAA AAAAA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Card>", into = "Vec<Card>")
)]
pub struct Deck {
    /// Cards from top (index 0) to bottom.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck in bridge order (Clubs, Diamonds, Hearts,
    /// Spades; Ace to King) followed by joker A and joker B.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=SUIT_SIZE {
                cards.push(Card::Standard { suit, rank });
            }
        }
        cards.push(Card::Joker(Joker::A));
        cards.push(Card::Joker(Joker::B));

        Self { cards }
    }

    /// Creates a deck shuffled from operating-system entropy.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn shuffled() -> Self {
        let mut deck = Self::new();
        deck.shuffle();
        deck
    }

    /// Builds a deck from cards listed top to bottom.
    ///
    /// # Errors
    ///
    /// Returns an error unless the list holds exactly the 52 ranked cards and
    /// both jokers, each once. Ranks outside `1..=13` are rejected.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize(cards.len()));
        }

        for card in &cards {
            if let Card::Standard { suit, rank } = *card {
                Card::new(suit, rank)?;
            }
        }

        for joker in [Joker::A, Joker::B] {
            if !cards.contains(&Card::Joker(joker)) {
                return Err(DeckError::MissingJoker(joker));
            }
        }

        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for card in &cards {
            if !seen.insert(*card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        Ok(Self { cards })
    }

    /// Builds a deck from card identifiers listed top to bottom, such as
    /// `"Ace of Clubs"` or `"Joker (A)"`.
    ///
    /// # Errors
    ///
    /// Returns an error if an identifier cannot be parsed or the cards do not
    /// form a complete deck.
    pub fn from_identifiers<I, S>(identifiers: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cards = identifiers
            .into_iter()
            .map(|id| id.as_ref().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(cards)
    }

    /// Returns the canonical identifiers of the cards, top to bottom.
    #[must_use]
    pub fn to_identifiers(&self) -> Vec<String> {
        self.cards.iter().map(ToString::to_string).collect()
    }

    /// Returns the cards, top to bottom.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the top card.
    #[must_use]
    pub fn top(&self) -> Card {
        self.cards[0]
    }

    /// Returns the bottom card.
    #[must_use]
    pub fn bottom(&self) -> Card {
        self.cards[DECK_SIZE - 1]
    }

    /// Returns the position of a joker, counting the top card as 0.
    #[expect(
        clippy::missing_panics_doc,
        reason = "both jokers are present in every constructed deck"
    )]
    #[must_use]
    pub fn joker_position(&self, joker: Joker) -> usize {
        self.cards
            .iter()
            .position(|card| *card == Card::Joker(joker))
            .expect("deck always holds both jokers")
    }

    /// Shuffles the deck with a ChaCha20 generator seeded from operating-system
    /// entropy.
    ///
    /// The generator is never seeded from caller-supplied material: a shuffled
    /// deck cannot be reproduced.
    #[cfg(feature = "std")]
    pub fn shuffle(&mut self) {
        use rand::SeedableRng;
        use rand_chacha::ChaCha20Rng;

        let mut rng = ChaCha20Rng::from_os_rng();
        self.shuffle_with(&mut rng);
    }

    /// Shuffles the deck with a caller-supplied generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = DeckError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_cards(cards)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}
