//! Session state.
//!
//! `GameState` is one play session: the card registry, the zone set, the
//! move history and the table config. Presentation code reads it through
//! the query methods below and changes it only through the transition
//! methods in `rules::engine` (`match_playfield`, `replace_from_reserve`,
//! `undo`).
//!
//! All data is owned, so `GameState` is `Send + Sync`. A caller sharing a
//! session across threads puts the whole `GameState` behind one lock.

use super::config::TableConfig;
use super::entity::CardId;
use crate::cards::{Card, CardRegistry};
use crate::history::{History, HistoryRecord};
use crate::level::GenerationError;
use crate::zones::{Zone, ZoneSet};

/// A play session.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub(crate) registry: CardRegistry,
    pub(crate) zones: ZoneSet,
    pub(crate) history: History,
    pub(crate) config: TableConfig,
}

impl GameState {
    /// Create a session from an already-dealt registry and zone set.
    ///
    /// The registry and the zone set must hold the same ids: every
    /// registered card placed, and nothing placed that isn't registered.
    pub fn from_parts(
        registry: CardRegistry,
        zones: ZoneSet,
        config: TableConfig,
    ) -> Result<Self, GenerationError> {
        if let Some(card) = registry.ids().into_iter().find(|&id| zones.zone_of(id).is_none()) {
            return Err(GenerationError::Unplaced(card));
        }
        if let Some(card) = zones.cards().filter(|&id| !registry.contains(id)).min() {
            return Err(GenerationError::Unregistered(card));
        }
        Ok(Self {
            registry,
            zones,
            history: History::new(),
            config,
        })
    }

    /// Create an empty session with no cards.
    #[must_use]
    pub fn empty(config: TableConfig) -> Self {
        Self {
            registry: CardRegistry::new(),
            zones: ZoneSet::new(),
            history: History::new(),
            config,
        }
    }

    // === Queries ===

    /// Get a card by ID.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.registry.get(id)
    }

    /// The card registry.
    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// The zone set.
    #[must_use]
    pub fn zones(&self) -> &ZoneSet {
        &self.zones
    }

    /// The table config.
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Playfield cards, ascending by id.
    #[must_use]
    pub fn playfield(&self) -> Vec<CardId> {
        self.zones.playfield()
    }

    /// Reserve cards, in order.
    #[must_use]
    pub fn reserve(&self) -> &[CardId] {
        self.zones.reserve()
    }

    /// The live Base card.
    #[must_use]
    pub fn base_top(&self) -> Option<CardId> {
        self.zones.base_top()
    }

    /// Base cards, bottom to top.
    #[must_use]
    pub fn base(&self) -> &[CardId] {
        self.zones.base()
    }

    /// The zone a card is in.
    #[must_use]
    pub fn zone_of(&self, id: CardId) -> Option<Zone> {
        self.zones.zone_of(id)
    }

    /// Is there a move to undo?
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.has_any()
    }

    /// Number of undoable moves.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The most recent undoable move.
    #[must_use]
    pub fn last_record(&self) -> Option<&HistoryRecord> {
        self.history.last()
    }

    // === History ===

    /// Forget the undo trail. The current layout becomes the new baseline.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
