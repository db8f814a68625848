//! Zone system for card locations.
//!
//! Every card is in exactly one of three zones:
//! Playfield (unordered), Reserve (ordered) or Base (stack, top is live).
//!
//! ## Key Types
//!
//! - `Zone`: Which container a card is in
//! - `ZoneSet`: Card location tracking for one session

pub mod manager;

pub use manager::{Zone, ZoneSet};
