use alloc::vec::Vec;

use crate::card::{Card, Joker};
use crate::error::KeystreamError;

use super::{DECK_SIZE, Deck};

impl Deck {
    /// Moves a joker one card down, treating the deck as circular.
    ///
    /// A joker on the bottom moves to just below the top card.
    pub fn move_down_1(&mut self, joker: Joker) {
        if self.bottom() == Card::Joker(joker) {
            self.cards.rotate_right(1);
        }
        let position = self.joker_position(joker);
        self.cards.swap(position, position + 1);
    }

    /// Swaps the cards above the first joker with the cards below the second.
    ///
    /// The jokers and the cards between them keep their place in the middle;
    /// order within each block is preserved.
    pub fn triple_cut(&mut self) {
        let a = self.joker_position(Joker::A);
        let b = self.joker_position(Joker::B);
        let (upper, lower) = (a.min(b), a.max(b));

        let mut cut = Vec::with_capacity(DECK_SIZE);
        cut.extend_from_slice(&self.cards[lower + 1..]);
        cut.extend_from_slice(&self.cards[upper..=lower]);
        cut.extend_from_slice(&self.cards[..upper]);
        self.cards = cut;
    }

    /// Count cut using the deck value of the bottom card.
    ///
    /// Does nothing when the bottom card is a joker.
    pub fn count_cut(&mut self) {
        let bottom = self.bottom();
        if bottom.is_joker() {
            return;
        }
        self.count_cut_at(bottom.deck_value());
    }

    /// Moves the top `count` cards to just above the bottom card.
    ///
    /// The bottom card never moves. Counts past 53 wrap around the 53 cards
    /// above it.
    pub fn count_cut_at(&mut self, count: u8) {
        let above_bottom = &mut self.cards[..DECK_SIZE - 1];
        let count = usize::from(count) % above_bottom.len();
        above_bottom.rotate_left(count);
    }

    /// Reads the output card without changing the deck.
    ///
    /// The top card's deck value (53 for a joker) counts down from the top to
    /// select a card; the selected card's deck value is returned.
    ///
    /// # Errors
    ///
    /// Returns [`KeystreamError::JokerSelected`] if the selected card is a
    /// joker. The round then produces no output.
    pub fn get_keynum(&self) -> Result<u8, KeystreamError> {
        let selected = self.cards[usize::from(self.top().deck_value())];
        if selected.is_joker() {
            return Err(KeystreamError::JokerSelected);
        }
        Ok(selected.deck_value())
    }

    /// Runs one round of deck moves: joker A down one, joker B down two,
    /// triple cut, count cut.
    pub fn step(&mut self) {
        self.move_down_1(Joker::A);
        self.move_down_1(Joker::B);
        self.move_down_1(Joker::B);
        self.triple_cut();
        self.count_cut();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn ranked(suit: Suit, rank: u8) -> Card {
        Card::new(suit, rank).unwrap()
    }

    #[test]
    fn joker_wraps_below_top_card() {
        let mut deck = Deck::new();
        deck.move_down_1(Joker::B);

        assert_eq!(deck.cards()[0], ranked(Suit::Clubs, 1));
        assert_eq!(deck.cards()[1], Card::Joker(Joker::B));
        assert_eq!(deck.bottom(), Card::Joker(Joker::A));
    }

    #[test]
    fn joker_swaps_with_next_card() {
        let mut deck = Deck::new();
        deck.move_down_1(Joker::A);

        assert_eq!(deck.joker_position(Joker::A), 53);
        assert_eq!(deck.joker_position(Joker::B), 52);
    }

    #[test]
    fn triple_cut_ignores_joker_labels() {
        let mut deck = Deck::new();
        deck.move_down_1(Joker::B);
        // B now sits at position 1 and A at the bottom.
        deck.triple_cut();

        assert_eq!(deck.cards()[0], Card::Joker(Joker::B));
        assert_eq!(deck.bottom(), ranked(Suit::Clubs, 1));
        assert_eq!(deck.joker_position(Joker::A), 52);
    }

    #[test]
    fn count_cut_keeps_bottom_card() {
        let mut deck = Deck::new();
        deck.count_cut_at(3);

        assert_eq!(deck.top(), ranked(Suit::Clubs, 4));
        assert_eq!(deck.cards()[50], ranked(Suit::Clubs, 1));
        assert_eq!(deck.cards()[52], ranked(Suit::Clubs, 3));
        assert_eq!(deck.bottom(), Card::Joker(Joker::B));
    }

    #[test]
    fn count_cut_skips_joker_bottom() {
        let mut deck = Deck::new();
        deck.count_cut();
        assert_eq!(deck, Deck::new());
    }

    #[test]
    fn keynum_counts_from_top_card() {
        let deck = Deck::new();
        // Ace of Clubs on top selects the second card.
        assert_eq!(deck.get_keynum(), Ok(2));
    }

    #[test]
    fn keynum_reports_selected_joker() {
        let mut deck = Deck::new();
        // Moving the top 52 ranked cards puts Joker A on top, selecting Joker B.
        deck.count_cut_at(52);
        assert_eq!(deck.top(), Card::Joker(Joker::A));
        assert_eq!(deck.get_keynum(), Err(KeystreamError::JokerSelected));
    }
}
