//! # tripeaks-engine
//!
//! Game-state engine for a single-player card-matching game.
//!
//! Cards sit in three zones: a **Playfield**, an ordered **Reserve** and a
//! **Base** stack of which only the top card is live. A player either
//! matches a Playfield card onto Base (its rank must be circularly adjacent
//! to the Base top, Ace/King wrap) or moves any Reserve card onto Base, and
//! may undo the most recent move.
//!
//! ## Design Principles
//!
//! 1. **Arena + ids**: The `CardRegistry` owns every card; everything else
//!    refers to cards by `CardId`.
//!
//! 2. **Explicit outcomes**: Every mutating call returns why it did nothing
//!    (`MoveError`), and rejected calls leave the session untouched.
//!
//! 3. **Exact undo**: Each accepted move records enough to restore zone
//!    membership, Base order, Reserve order and coordinates.
//!
//! ## Modules
//!
//! - `core`: Card ids, configuration, moves, session state
//! - `cards`: Ranks, suits, card instances, the registry
//! - `zones`: Playfield / Reserve / Base membership
//! - `history`: Move records consumed by undo
//! - `rules`: The transition engine and its errors
//! - `level`: Level descriptors and the generator
//!
//! ## Example
//!
//! ```
//! use tripeaks_engine::{GameState, LevelDescriptor, TableConfig, UndoOutcome};
//!
//! let json = r#"{
//!     "Playfield": [{"CardFace": 0, "CardSuit": 1, "Position": {"x": 100, "y": 800}}],
//!     "Stack":     [{"CardFace": 12, "CardSuit": 3}]
//! }"#;
//! let mut game = GameState::from_level(&LevelDescriptor::from_json(json).unwrap(), TableConfig::default()).unwrap();
//!
//! let ace = game.playfield()[0];
//! game.match_playfield(ace).unwrap(); // A on K wraps
//! assert_eq!(game.base_top(), Some(ace));
//!
//! let outcome = game.undo().unwrap();
//! assert!(matches!(outcome, UndoOutcome::Undone(_)));
//! assert_eq!(game.playfield(), vec![ace]);
//! ```

pub mod cards;
pub mod core;
pub mod history;
pub mod level;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{CardId, Coordinate, GameState, Move, TableConfig};

pub use crate::cards::{Card, CardRegistry, Rank, Suit};

pub use crate::zones::{Zone, ZoneSet};

pub use crate::history::{History, HistoryRecord};

pub use crate::rules::{ErrorSeverity, MoveError, UndoOutcome};

pub use crate::level::{generate, CardPlacement, GenerationError, LevelDescriptor, LevelSection};
