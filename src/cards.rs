//! Playing cards for card-deck memorisation drills.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{MajorError, MajorResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suit {
    Club,
    Spade,
    Heart,
    Diamond,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Spade, Suit::Heart, Suit::Diamond];

    pub fn symbol(self) -> char {
        match self {
            Suit::Club => '\u{2663}',
            Suit::Spade => '\u{2660}',
            Suit::Heart => '\u{2764}',
            Suit::Diamond => '\u{2666}',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    value: u8,
    suit: Suit,
}

impl Card {
    /// `value` runs from 1 (ace) to 13 (king).
    pub fn new(value: u8, suit: Suit) -> MajorResult<Self> {
        if !(1..=13).contains(&value) {
            return Err(MajorError::InvalidCard(value));
        }
        Ok(Self { value, suit })
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    fn rank(&self) -> String {
        match self.value {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit.symbol())
    }
}

pub fn random_card<R: Rng + ?Sized>(rng: &mut R) -> Card {
    let value = rng.gen_range(1..=13);
    let suit = *Suit::ALL.choose(rng).unwrap_or(&Suit::Spade);
    Card { value, suit }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_display() {
        assert_eq!(Card::new(1, Suit::Club).unwrap().to_string(), "A\u{2663}");
        assert_eq!(Card::new(10, Suit::Heart).unwrap().to_string(), "10\u{2764}");
        assert_eq!(Card::new(13, Suit::Spade).unwrap().to_string(), "K\u{2660}");
        assert_eq!(Card::new(7, Suit::Diamond).unwrap().to_string(), "7\u{2666}");
    }

    #[test]
    fn test_value_range() {
        assert!(matches!(Card::new(0, Suit::Club), Err(MajorError::InvalidCard(0))));
        assert!(matches!(Card::new(14, Suit::Club), Err(MajorError::InvalidCard(14))));
    }

    #[test]
    fn test_random_cards_are_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let card = random_card(&mut rng);
            assert!((1..=13).contains(&card.value()));
            assert!(Card::new(card.value(), card.suit()).is_ok());
        }
    }
}
