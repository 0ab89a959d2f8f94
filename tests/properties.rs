//! Property tests for the cipher and deck invariants.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use solrs::{Card, DECK_SIZE, Deck, Joker, format_str};

/// A deck shuffled from a generated seed.
fn arb_deck() -> impl Strategy<Value = Deck> {
    any::<u64>().prop_map(|seed| {
        let mut deck = Deck::new();
        deck.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed));
        deck
    })
}

fn assert_complete(deck: &Deck) {
    assert_eq!(deck.cards().len(), DECK_SIZE);
    assert!(Deck::from_cards(deck.cards().to_vec()).is_ok());
    let jokers = deck.cards().iter().filter(|card| card.is_joker()).count();
    assert_eq!(jokers, 2);
}

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(deck in arb_deck(), key in "[a-zA-Z ]{0,12}", message in ".{0,80}") {
        let mut sender = deck.clone();
        let mut receiver = deck;
        sender.key(&key);
        receiver.key(&key);

        let plaintext = format_str(&message);
        let ciphertext = sender.encrypt(&plaintext);
        prop_assert_eq!(receiver.decrypt(&ciphertext), plaintext);
        prop_assert_eq!(sender, receiver);
    }

    #[test]
    fn keystream_is_deterministic(deck in arb_deck(), length in 0usize..64) {
        let mut first = deck.clone();
        let mut second = deck;

        let a: Vec<u8> = first.gen_keystream(length).collect();
        let b: Vec<u8> = second.gen_keystream(length).collect();
        prop_assert_eq!(a.len(), length);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn keystream_never_emits_joker_values(deck in arb_deck()) {
        let mut deck = deck;
        for value in deck.gen_keystream(100) {
            prop_assert!((1..=52).contains(&value));
        }
    }

    #[test]
    fn moves_preserve_the_deck(deck in arb_deck(), key in ".{0,20}", cut in any::<u8>()) {
        let mut deck = deck;
        deck.key(&key);
        assert_complete(&deck);

        for joker in [Joker::A, Joker::B] {
            deck.move_down_1(joker);
            assert_complete(&deck);
        }
        deck.triple_cut();
        assert_complete(&deck);

        let bottom = deck.bottom();
        deck.count_cut_at(cut);
        assert_complete(&deck);
        prop_assert_eq!(deck.bottom(), bottom);
    }

    #[test]
    fn triple_cut_twice_restores_order_with_adjacent_jokers(deck in arb_deck()) {
        let mut deck = deck;
        // Put A directly above B so the middle block is exactly the two jokers.
        while deck.joker_position(Joker::B) != deck.joker_position(Joker::A) + 1 {
            deck.move_down_1(Joker::B);
        }
        let before = deck.clone();
        deck.triple_cut();
        deck.triple_cut();
        prop_assert_eq!(deck, before);
    }

    #[test]
    fn formatted_text_is_grouped(message in ".{0,80}") {
        let formatted = format_str(&message);
        for (i, group) in formatted.split(' ').enumerate() {
            if formatted.is_empty() {
                break;
            }
            prop_assert_eq!(group.len(), 5, "group {}", i);
            prop_assert!(group.chars().all(|c| c.is_ascii_uppercase()));
        }
        prop_assert_eq!(format_str(&formatted), formatted.clone());
    }

    #[test]
    fn serialization_round_trips(deck in arb_deck()) {
        let json = deck.to_json_str().unwrap();
        prop_assert_eq!(Deck::from_json_str(&json).unwrap(), deck.clone());

        let listing = deck.to_newline_delimited_str();
        prop_assert_eq!(Deck::from_newline_delimited_str(&listing).unwrap(), deck.clone());

        let cards: Vec<Card> = deck.clone().into();
        prop_assert_eq!(Deck::try_from(cards).unwrap(), deck);
    }
}
