use alloc::string::String;
use core::iter::{FusedIterator, Take};

use crate::codec::{to_character, to_number};

use super::Deck;

/// An endless keystream drawn from a deck.
///
/// Each value advances the deck it borrows; the stream cannot be restarted
/// except by starting again from a clone of the earlier deck.
#[derive(Debug)]
pub struct Keystream<'a> {
    deck: &'a mut Deck,
}

impl Iterator for Keystream<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.deck.next_key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Keystream<'_> {}

impl Deck {
    /// Advances the deck until it yields a keystream value in `1..=52`.
    ///
    /// Rounds that select a joker are discarded without rolling back the
    /// moves they made.
    pub fn next_key(&mut self) -> u8 {
        loop {
            self.step();
            match self.get_keynum() {
                Ok(value) => return value,
                Err(err) => tracing::trace!(%err, "discarding keystream round"),
            }
        }
    }

    /// Returns an endless keystream that advances this deck.
    pub const fn keystream(&mut self) -> Keystream<'_> {
        Keystream { deck: self }
    }

    /// Returns a lazy keystream of `length` values.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::Deck;
    ///
    /// let mut deck = Deck::new();
    /// let values: Vec<u8> = deck.gen_keystream(4).collect();
    /// assert_eq!(values, [4, 49, 10, 24]);
    /// ```
    pub fn gen_keystream(&mut self, length: usize) -> Take<Keystream<'_>> {
        self.keystream().take(length)
    }

    /// Keys the deck with a passphrase.
    ///
    /// Each character runs one round of moves followed by a second count cut
    /// by the character's letter number. Non-letters count as `X`. No
    /// keystream values are produced.
    pub fn key(&mut self, passphrase: &str) {
        for c in passphrase.chars() {
            self.step();
            self.count_cut_at(to_number(c));
        }
        tracing::debug!(
            characters = passphrase.chars().count(),
            "keyed deck with passphrase"
        );
    }

    /// Encrypts a message, drawing one keystream value per non-space character.
    ///
    /// Spaces are copied through unchanged and draw no value. Any other
    /// non-letter is enciphered as `X`; see [`format_str`](crate::format_str)
    /// for preparing input.
    pub fn encrypt(&mut self, message: &str) -> String {
        self.transform(message, |letter, key| letter + key)
    }

    /// Decrypts a message, reversing [`encrypt`](Self::encrypt) for a deck in
    /// the same starting state.
    pub fn decrypt(&mut self, message: &str) -> String {
        self.transform(message, |letter, key| letter - key)
    }

    fn transform(&mut self, message: &str, combine: impl Fn(i32, i32) -> i32) -> String {
        message
            .chars()
            .map(|c| {
                if c == ' ' {
                    return ' ';
                }
                let key = i32::from(self.next_key());
                to_character(combine(i32::from(to_number(c)), key))
            })
            .collect()
    }
}
