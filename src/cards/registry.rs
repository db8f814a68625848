//! Card registry: the arena that owns every card in a session.
//!
//! The `CardRegistry` allocates ids and stores cards by id. Ids come from
//! a counter owned by the registry instance, so two sessions never share
//! an allocator and never collide.

use rustc_hash::FxHashMap;

use super::instance::Card;
use super::rank::{Rank, Suit};
use crate::core::config::Coordinate;
use crate::core::entity::CardId;

/// Arena of cards, addressed by `CardId`.
///
/// ## Example
///
/// ```
/// use tripeaks_engine::cards::{CardRegistry, Rank, Suit};
/// use tripeaks_engine::core::Coordinate;
///
/// let mut registry = CardRegistry::new();
/// let id = registry.create(Rank::Seven, Suit::Diamonds);
/// registry.set_coordinate(id, Coordinate::new(100.0, 50.0));
///
/// let card = registry.get(id).unwrap();
/// assert_eq!(card.rank(), Rank::Seven);
/// assert_eq!(card.coordinate, Coordinate::new(100.0, 50.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    next_id: CardId,
}

impl Default for CardRegistry {
    fn default() -> Self {
        Self {
            cards: FxHashMap::default(),
            next_id: CardId::FIRST,
        }
    }
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a face-up card and return its freshly allocated id.
    pub fn create(&mut self, rank: Rank, suit: Suit) -> CardId {
        let id = self.next_id;
        self.next_id = id.next();
        self.cards.insert(id, Card::new(id, rank, suit));
        id
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Set a card's layout coordinate.
    ///
    /// Returns false if the card doesn't exist.
    pub fn set_coordinate(&mut self, id: CardId, coordinate: Coordinate) -> bool {
        match self.cards.get_mut(&id) {
            Some(card) => {
                card.coordinate = coordinate;
                true
            }
            None => false,
        }
    }

    /// Set a card's face-up flag.
    ///
    /// Returns false if the card doesn't exist.
    pub fn set_flipped(&mut self, id: CardId, face_up: bool) -> bool {
        match self.cards.get_mut(&id) {
            Some(card) => {
                card.face_up = face_up;
                true
            }
            None => false,
        }
    }

    /// Check if a card ID exists.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of cards created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards (arbitrary order).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// All card ids, ascending.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        let mut ids: Vec<_> = self.cards.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
