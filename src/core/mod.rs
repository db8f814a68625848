//! Core engine types: card ids, configuration, moves and session state.
//!
//! The transition rules that mutate `GameState` live in `rules`; this
//! module only holds the data they act on.

pub mod action;
pub mod config;
pub mod entity;
pub mod state;

pub use action::Move;
pub use config::{Coordinate, TableConfig};
pub use entity::CardId;
pub use state::GameState;
