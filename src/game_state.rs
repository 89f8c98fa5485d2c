use crate::cards::Card;
use rand::seq::SliceRandom;
use rand::Rng;

/// The live piles, left to right in play order. Each pile shows exactly one
/// card, so the number of piles still in play is simply `len()`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// A full deck in canonical order.
    pub fn init() -> Self {
        Self::from_cards(Card::ordered_deck())
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        assert!(
            cards.len() <= Card::DECK_SIZE,
            "a deck holds at most {} cards",
            Card::DECK_SIZE
        );
        Self(cards)
    }

    /// Uniform in-place Fisher–Yates permutation driven by `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.0.get(index).copied()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// Puts the card at `from` onto the pile at `to` and closes the gap that
    /// `from` leaves behind. Caller guarantees `to < from < len()`.
    pub(crate) fn collapse(&mut self, from: usize, to: usize) {
        debug_assert!(to < from && from < self.0.len());
        let card = self.0.remove(from);
        self.0[to] = card;
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub deck: Deck,
    /// Index of the pile under the cursor, always within `[0, deck.len())`
    /// while the deck is non-empty.
    pub cursor: usize,
}

impl GameState {
    pub fn init(deck: Deck) -> Self {
        Self { deck, cursor: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::tests::cards;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_deck_init() {
        let deck = Deck::init();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck.cards(), Card::ordered_deck().as_slice());
    }

    #[test]
    fn test_game_state_init() {
        let a = GameState::init(Deck::init());
        assert_eq!(a.cursor, 0);
        assert_eq!(a.deck.len(), 52);
    }

    #[test]
    fn test_shuffle_reorders() {
        let mut deck = Deck::init();
        deck.shuffle(&mut StdRng::seed_from_u64(7));
        assert_eq!(deck.len(), 52);
        assert_ne!(deck, Deck::init());
    }

    #[test]
    fn test_shuffle_is_deterministic_for_a_seed() {
        let mut a = Deck::init();
        let mut b = Deck::init();
        a.shuffle(&mut StdRng::seed_from_u64(99));
        b.shuffle(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_single_and_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty = Deck::from_cards(vec![]);
        empty.shuffle(&mut rng);
        assert_eq!(empty.len(), 0);

        let mut one = Deck::from_cards(cards("QS"));
        one.shuffle(&mut rng);
        assert_eq!(one.cards(), cards("QS").as_slice());
    }

    #[test]
    fn test_collapse_closes_gap() {
        let mut deck = Deck::from_cards(cards("AC 2C 3C 4C 5C 6C"));
        deck.collapse(4, 1);
        assert_eq!(deck.cards(), cards("AC 5C 3C 4C 6C").as_slice());
    }

    #[test]
    #[should_panic]
    fn test_from_cards_rejects_oversized_deck() {
        let mut too_many = Card::ordered_deck();
        too_many.push(too_many[0]);
        Deck::from_cards(too_many);
    }

    proptest! {
        #[test]
        fn shuffle_preserves_cards(seed in any::<u64>()) {
            let mut deck = Deck::init();
            deck.shuffle(&mut StdRng::seed_from_u64(seed));

            let ordered = Card::ordered_deck();
            prop_assert_eq!(deck.len(), ordered.len());
            for card in &ordered {
                prop_assert_eq!(deck.cards().iter().filter(|c| *c == card).count(), 1);
            }
        }
    }
}
