//! Zone set: where every card currently lives.
//!
//! The `ZoneSet` tracks three containers:
//! - Playfield: unordered set of matchable cards
//! - Reserve: ordered sequence, any element may be removed
//! - Base: stack whose top is the only live card
//!
//! plus a location index so "which zone is this card in" is O(1).
//! A card id is in exactly one zone or, briefly inside a transition,
//! in none. Adding a card that is already placed is a programming error
//! and panics.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;

/// The three card containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Playfield,
    Reserve,
    Base,
}

impl Zone {
    pub const fn as_str(self) -> &'static str {
        match self {
            Zone::Playfield => "Playfield",
            Zone::Reserve => "Reserve",
            Zone::Base => "Base",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card membership across Playfield, Reserve and Base.
///
/// ## Usage
///
/// ```
/// use tripeaks_engine::core::CardId;
/// use tripeaks_engine::zones::{Zone, ZoneSet};
///
/// let mut zones = ZoneSet::new();
/// zones.reserve_append(CardId(1));
/// zones.reserve_append(CardId(2));
/// zones.base_push(CardId(3));
///
/// assert_eq!(zones.reserve(), &[CardId(1), CardId(2)]);
/// assert_eq!(zones.base_top(), Some(CardId(3)));
/// assert_eq!(zones.zone_of(CardId(2)), Some(Zone::Reserve));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZoneSet {
    /// Card locations: card_id -> zone
    locations: FxHashMap<CardId, Zone>,

    playfield: FxHashSet<CardId>,

    reserve: Vec<CardId>,

    /// Bottom at index 0, top is last.
    base: Vec<CardId>,
}

impl ZoneSet {
    /// Create an empty zone set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn place(&mut self, card: CardId, zone: Zone) {
        if let Some(existing) = self.locations.get(&card) {
            panic!("{} already placed in {}, cannot add to {}", card, existing, zone);
        }
        self.locations.insert(card, zone);
    }

    // === Playfield ===

    /// Add a card to the Playfield.
    ///
    /// Panics if the card is already in any zone.
    pub fn playfield_add(&mut self, card: CardId) {
        self.place(card, Zone::Playfield);
        self.playfield.insert(card);
    }

    /// Remove a card from the Playfield.
    ///
    /// Returns false if the card wasn't there.
    pub fn playfield_remove(&mut self, card: CardId) -> bool {
        if !self.playfield.remove(&card) {
            return false;
        }
        self.locations.remove(&card);
        true
    }

    /// Playfield cards, ascending by id.
    #[must_use]
    pub fn playfield(&self) -> Vec<CardId> {
        let mut cards: Vec<_> = self.playfield.iter().copied().collect();
        cards.sort_unstable();
        cards
    }

    #[must_use]
    pub fn playfield_len(&self) -> usize {
        self.playfield.len()
    }

    // === Reserve ===

    /// Append a card to the end of the Reserve.
    ///
    /// Panics if the card is already in any zone.
    pub fn reserve_append(&mut self, card: CardId) {
        self.reserve_insert(self.reserve.len(), card);
    }

    /// Insert a card into the Reserve at `index` (clamped to the end).
    ///
    /// Panics if the card is already in any zone.
    pub fn reserve_insert(&mut self, index: usize, card: CardId) {
        self.place(card, Zone::Reserve);
        let idx = index.min(self.reserve.len());
        self.reserve.insert(idx, card);
    }

    /// Remove a card from anywhere in the Reserve, keeping the order of the rest.
    ///
    /// Returns false if the card wasn't there.
    pub fn reserve_remove(&mut self, card: CardId) -> bool {
        self.reserve_take(card).is_some()
    }

    /// Like `reserve_remove`, but returns the index the card was at.
    pub fn reserve_take(&mut self, card: CardId) -> Option<usize> {
        let index = self.reserve_position(card)?;
        self.reserve.remove(index);
        self.locations.remove(&card);
        Some(index)
    }

    /// Position of a card within the Reserve.
    #[must_use]
    pub fn reserve_position(&self, card: CardId) -> Option<usize> {
        if self.locations.get(&card) != Some(&Zone::Reserve) {
            return None;
        }
        self.reserve.iter().position(|&c| c == card)
    }

    /// Reserve cards, in order.
    #[must_use]
    pub fn reserve(&self) -> &[CardId] {
        &self.reserve
    }

    // === Base ===

    /// The live Base card, if any.
    #[must_use]
    pub fn base_top(&self) -> Option<CardId> {
        self.base.last().copied()
    }

    /// Push a card onto Base, making it the new top.
    ///
    /// Panics if the card is already in any zone.
    pub fn base_push(&mut self, card: CardId) {
        self.place(card, Zone::Base);
        self.base.push(card);
    }

    /// Remove and return the Base top.
    pub fn base_pop(&mut self) -> Option<CardId> {
        let card = self.base.pop()?;
        self.locations.remove(&card);
        Some(card)
    }

    /// Base cards, bottom to top.
    #[must_use]
    pub fn base(&self) -> &[CardId] {
        &self.base
    }

    // === Queries ===

    /// The zone a card is in.
    #[must_use]
    pub fn zone_of(&self, card: CardId) -> Option<Zone> {
        self.locations.get(&card).copied()
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in_zone(&self, card: CardId, zone: Zone) -> bool {
        self.locations.get(&card) == Some(&zone)
    }

    /// Every placed card (arbitrary order).
    pub fn cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.locations.keys().copied()
    }

    /// Total number of placed cards.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }
}
