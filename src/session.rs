//! A deck paired with the options it was set up with.

use alloc::string::String;

use crate::deck::Deck;
use crate::format::format_str;
use crate::options::CipherOptions;

/// A cipher session that owns its deck.
///
/// Creating a session applies the configured passphrase. Every call to
/// [`encrypt`](Self::encrypt) or [`decrypt`](Self::decrypt) continues the same
/// keystream.
///
/// # Example
///
/// ```
/// use solrs::{CipherOptions, Deck, Session};
///
/// let options = CipherOptions::default().with_key("cryptonomicon");
/// let mut sender = Session::new(Deck::new(), options.clone());
/// let mut receiver = Session::new(Deck::new(), options);
///
/// let ciphertext = sender.encrypt("solitaire");
/// assert_eq!(ciphertext, "KIRAK SFJAN");
/// assert_eq!(receiver.decrypt(&ciphertext), "SOLIT AIREX");
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    deck: Deck,
    options: CipherOptions,
}

impl Session {
    /// Starts a session, keying the deck if a passphrase is configured.
    #[must_use]
    pub fn new(mut deck: Deck, options: CipherOptions) -> Self {
        if let Some(key) = &options.key {
            deck.key(key);
        }
        Self { deck, options }
    }

    /// Encrypts a message, formatting it first unless disabled.
    pub fn encrypt(&mut self, message: &str) -> String {
        if self.options.format_message {
            self.deck.encrypt(&format_str(message))
        } else {
            self.deck.encrypt(message)
        }
    }

    /// Decrypts a message.
    pub fn decrypt(&mut self, message: &str) -> String {
        self.deck.decrypt(message)
    }

    /// Returns the current deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &CipherOptions {
        &self.options
    }

    /// Ends the session and returns the deck in its current state.
    #[must_use]
    pub fn into_deck(self) -> Deck {
        self.deck
    }
}
