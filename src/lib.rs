//! Bruce Schneier's Solitaire cipher with optional `no_std` support.
//!
//! The cipher's state is a [`Deck`] of 52 ranked cards and two jokers. Each
//! keystream value is produced by rearranging the deck, and letters are
//! enciphered by adding (or, to decipher, subtracting) that value modulo 26.
//! A [`Session`] pairs a deck with a passphrase and formatting options.
//!
//! # Example
//!
//! ```
//! use solrs::{Deck, format_str};
//!
//! let mut deck = Deck::new();
//! deck.key("cryptonomicon");
//! assert_eq!(deck.encrypt(&format_str("solitaire")), "KIRAK SFJAN");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod codec;
pub mod deck;
pub mod error;
pub mod format;
pub mod options;
#[cfg(feature = "std")]
pub mod serial;
pub mod session;

// Re-export main types
pub use card::{Card, JOKER_VALUE, Joker, SUIT_SIZE, Suit};
pub use codec::{to_character, to_number};
pub use deck::{DECK_SIZE, Deck, Keystream};
#[cfg(feature = "std")]
pub use error::LoadError;
pub use error::{CardError, DeckError, KeystreamError, ValueError};
pub use format::format_str;
pub use options::CipherOptions;
#[cfg(feature = "std")]
pub use serial::{DeckFormat, DeckSource, load_deck};
pub use session::Session;
