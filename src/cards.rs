use std::fmt::{Display, Formatter};
use strum::{EnumIter, IntoEnumIterator};

#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    R2 = 2,
    R3 = 3,
    R4 = 4,
    R5 = 5,
    R6 = 6,
    R7 = 7,
    R8 = 8,
    R9 = 9,
    R10 = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    /// One-character code used in the 2-character card code.
    pub fn code(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::R2 => '2',
            Rank::R3 => '3',
            Rank::R4 => '4',
            Rank::R5 => '5',
            Rank::R6 => '6',
            Rank::R7 => '7',
            Rank::R8 => '8',
            Rank::R9 => '9',
            Rank::R10 => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub fn is_red(self) -> bool {
        match self {
            Self::Hearts | Self::Diamonds => true,
            Self::Spades | Self::Clubs => false,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

/// Always exactly 2 characters: rank code then suit code, e.g. `TH`.
impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl Card {
    pub const DECK_SIZE: usize = 52;

    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// All 52 cards, suit-major (clubs, diamonds, hearts, spades), ace to king
    /// within each suit.
    pub fn ordered_deck() -> Vec<Self> {
        let mut cards = Vec::with_capacity(Self::DECK_SIZE);
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use test_case::test_case;

    /// Parses a 2-character card code like `AC` or `TH`.
    pub(crate) fn card(code: &str) -> Card {
        let mut chars = code.chars();
        let rank_code = chars.next().expect("code should have a rank");
        let suit_code = chars.next().expect("code should have a suit");
        let rank = Rank::iter()
            .find(|r| r.code() == rank_code)
            .expect("rank code should be valid");
        let suit = Suit::iter()
            .find(|s| s.code() == suit_code)
            .expect("suit code should be valid");
        Card::new(rank, suit)
    }

    pub(crate) fn cards(codes: &str) -> Vec<Card> {
        codes.split_whitespace().map(card).collect()
    }

    #[test_case(Rank::Ace, Suit::Clubs => "AC")]
    #[test_case(Rank::R10, Suit::Hearts => "TH")]
    #[test_case(Rank::R7, Suit::Diamonds => "7D")]
    #[test_case(Rank::King, Suit::Spades => "KS")]
    fn test_card_code(rank: Rank, suit: Suit) -> String {
        Card::new(rank, suit).to_string()
    }

    #[test]
    fn test_every_card_code_is_two_chars() {
        for card in Card::ordered_deck() {
            assert_eq!(card.to_string().chars().count(), 2, "{card:?}");
        }
    }

    #[test]
    fn test_ordered_deck() {
        let cards = Card::ordered_deck();
        assert_eq!(cards.len(), 52);

        for (i, a) in cards.iter().enumerate() {
            for b in &cards[i + 1..] {
                assert_ne!(a, b);
            }
        }
        for suit in Suit::iter() {
            assert_eq!(cards.iter().filter(|c| c.suit == suit).count(), 13);
        }
        for rank in Rank::iter() {
            assert_eq!(cards.iter().filter(|c| c.rank == rank).count(), 4);
        }
    }

    #[test]
    fn test_ordered_deck_is_suit_major() {
        let cards = Card::ordered_deck();
        assert_eq!(cards[0], card("AC"));
        assert_eq!(cards[12], card("KC"));
        assert_eq!(cards[13], card("AD"));
        assert_eq!(cards[26], card("AH"));
        assert_eq!(cards[51], card("KS"));
    }

    #[test_case(Suit::Hearts => true)]
    #[test_case(Suit::Diamonds => true)]
    #[test_case(Suit::Clubs => false)]
    #[test_case(Suit::Spades => false)]
    fn test_suit_is_red(suit: Suit) -> bool {
        suit.is_red()
    }
}
