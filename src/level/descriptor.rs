//! Level descriptors: the static input a session is dealt from.
//!
//! A level is two ordered lists of card placements. `Playfield` cards are
//! dealt face-up onto the Playfield; the `Stack` list supplies the Reserve
//! and the initial Base card (its last entry).
//!
//! ## JSON format
//!
//! ```json
//! {
//!   "Playfield": [ { "CardFace": 12, "CardSuit": 0, "Position": { "x": 250, "y": 1000 } } ],
//!   "Stack":     [ { "CardFace": 2,  "CardSuit": 0, "Position": { "x": 0,   "y": 0 } } ]
//! }
//! ```
//!
//! `CardFace` is 0-based (0 = Ace .. 12 = King); `CardSuit` is
//! 0 = Clubs, 1 = Diamonds, 2 = Hearts, 3 = Spades. Missing lists are
//! empty and a missing `Position` is the origin. Values are checked when
//! the level is generated, not when it is parsed.

use serde::{Deserialize, Serialize};

use super::error::GenerationError;
use crate::cards::{Rank, Suit};
use crate::core::config::Coordinate;

/// One card of a level: face, suit and layout position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardPlacement {
    /// 0-based face index, 0 = Ace.
    #[serde(rename = "CardFace")]
    pub face: i32,

    /// Suit index, 0 = Clubs.
    #[serde(rename = "CardSuit")]
    pub suit: i32,

    #[serde(rename = "Position", default)]
    pub position: Coordinate,
}

impl CardPlacement {
    /// Build a placement from typed values.
    #[must_use]
    pub fn new(rank: Rank, suit: Suit, position: Coordinate) -> Self {
        Self {
            face: i32::from(rank.value()) - 1,
            suit: i32::from(suit as u8),
            position,
        }
    }

    /// The rank, if `face` is in range.
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        let value = u8::try_from(self.face.checked_add(1)?).ok()?;
        Rank::from_value(value)
    }

    /// The suit, if `suit` is in range.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        Suit::from_index(u8::try_from(self.suit).ok()?)
    }
}

/// A complete level.
///
/// ## Example
///
/// ```
/// use tripeaks_engine::cards::{Rank, Suit};
/// use tripeaks_engine::level::{CardPlacement, LevelDescriptor};
///
/// let level = LevelDescriptor::from_json(
///     r#"{"Playfield":[{"CardFace":0,"CardSuit":3}],"Stack":[]}"#,
/// ).unwrap();
///
/// assert_eq!(level.playfield[0].rank(), Some(Rank::Ace));
/// assert_eq!(level.playfield[0].suit(), Some(Suit::Spades));
/// assert!(level.stack.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    #[serde(rename = "Playfield", default)]
    pub playfield: Vec<CardPlacement>,

    /// Reserve cards followed by the initial Base card.
    #[serde(rename = "Stack", default)]
    pub stack: Vec<CardPlacement>,
}

impl LevelDescriptor {
    /// Create a level from its two lists.
    #[must_use]
    pub fn new(playfield: Vec<CardPlacement>, stack: Vec<CardPlacement>) -> Self {
        Self { playfield, stack }
    }

    /// Parse a level from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, GenerationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Total number of cards in the level.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.playfield.len() + self.stack.len()
    }
}
