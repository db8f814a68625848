//! Ranks, suits and the circular adjacency rule.
//!
//! A Playfield card may be matched onto Base only when its rank is
//! *circularly adjacent* to the Base top: ranks one apart match, and
//! Ace/King wrap around to match each other.
//!
//! ```
//! use tripeaks_engine::cards::Rank;
//!
//! assert!(Rank::Five.is_adjacent(Rank::Six));
//! assert!(Rank::Ace.is_adjacent(Rank::King));
//! assert!(!Rank::Queen.is_adjacent(Rank::Ace));
//! ```

use serde::{Deserialize, Serialize};

/// Card rank, Ace = 1 through King = 13.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All thirteen ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Ordinal value, 1..=13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank from its ordinal value (1..=13).
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// Circular adjacency: values differ by exactly 1, or by 12 (Ace/King).
    #[must_use]
    pub const fn is_adjacent(self, other: Rank) -> bool {
        let diff = (self as u8).abs_diff(other as u8);
        diff == 1 || diff == 12
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Ace => f.write_str("A"),
            Rank::Jack => f.write_str("J"),
            Rank::Queen => f.write_str("Q"),
            Rank::King => f.write_str("K"),
            other => write!(f, "{}", other.value()),
        }
    }
}

/// Card suit.
///
/// Discriminants follow the level-file encoding (Clubs = 0 .. Spades = 3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits in encoding order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Suit from its level-file index (0..=3).
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Diamonds and hearts are red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        };
        f.write_str(symbol)
    }
}
