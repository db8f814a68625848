//! Card instances - runtime card state.
//!
//! A `Card` pairs an immutable identity (id, rank, suit) with the mutable
//! attributes the engine updates as the card moves: its layout coordinate
//! and face-up flag. Zone membership is *not* stored here; the `ZoneSet`
//! is the single source of truth for where a card is.

use serde::{Deserialize, Serialize};

use super::rank::{Rank, Suit};
use crate::core::config::Coordinate;
use crate::core::entity::CardId;

/// A card in a session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    rank: Rank,
    suit: Suit,

    /// Layout position. Stored and restored, never interpreted.
    pub coordinate: Coordinate,

    /// Is this card face-up? Always true once dealt.
    pub face_up: bool,
}

impl Card {
    /// Create a face-up card at the origin.
    #[must_use]
    pub fn new(id: CardId, rank: Rank, suit: Suit) -> Self {
        Self {
            id,
            rank,
            suit,
            coordinate: Coordinate::ZERO,
            face_up: true,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Can this card be matched onto `other`?
    #[must_use]
    pub fn can_match(&self, other: &Card) -> bool {
        self.rank.is_adjacent(other.rank)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_new() {
        let card = Card::new(CardId(7), Rank::Queen, Suit::Hearts);

        assert_eq!(card.id(), CardId(7));
        assert_eq!(card.rank(), Rank::Queen);
        assert_eq!(card.suit(), Suit::Hearts);
        assert_eq!(card.coordinate, Coordinate::ZERO);
        assert!(card.face_up);
    }

    #[test]
    fn test_can_match() {
        let ace = Card::new(CardId(1), Rank::Ace, Suit::Clubs);
        let king = Card::new(CardId(2), Rank::King, Suit::Spades);
        let five = Card::new(CardId(3), Rank::Five, Suit::Hearts);

        assert!(ace.can_match(&king));
        assert!(king.can_match(&ace));
        assert!(!five.can_match(&king));
    }

    #[test]
    fn test_display() {
        let card = Card::new(CardId(1), Rank::King, Suit::Spades);
        assert_eq!(card.to_string(), "K♠");
        let card = Card::new(CardId(2), Rank::Ten, Suit::Diamonds);
        assert_eq!(card.to_string(), "10♦");
    }

    #[test]
    fn test_serialization() {
        let mut card = Card::new(CardId(4), Rank::Three, Suit::Clubs);
        card.coordinate = Coordinate::new(12.0, 34.0);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
