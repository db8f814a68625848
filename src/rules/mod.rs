//! Transition rules for the matching game.
//!
//! Implements the forward moves and undo as methods on `GameState`:
//! - What moves are legal (`check`, `legal_moves`)
//! - How moves change zones (`match_playfield`, `replace_from_reserve`)
//! - How the last move is inverted (`undo`)
//!
//! Rejected moves never change state; see `MoveError`.

pub mod engine;
pub mod error;

pub use engine::UndoOutcome;
pub use error::{ErrorSeverity, MoveError};
