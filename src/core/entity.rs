//! Card identification.
//!
//! Every card dealt into a session gets a `CardId` from that session's
//! `CardRegistry`. Ids are allocated monotonically starting at 1 and are
//! never reused, so a `CardId` stays valid for the lifetime of its session.
//!
//! ## Usage
//!
//! ```
//! use tripeaks_engine::cards::{CardRegistry, Rank, Suit};
//!
//! let mut registry = CardRegistry::new();
//! let first = registry.create(Rank::Ace, Suit::Spades);
//! let second = registry.create(Rank::Two, Suit::Spades);
//!
//! assert_eq!(first.raw(), 1);
//! assert!(second > first);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one session.
///
/// Other components never hold a reference to a card, only its id; the
/// registry is the single owner of card data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// The first id a fresh registry hands out.
    pub const FIRST: CardId = CardId(1);

    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated right after this one.
    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
