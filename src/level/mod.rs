//! Levels: static descriptions and the generator that deals them.
//!
//! ## Key Types
//!
//! - `LevelDescriptor`: Playfield and Stack card lists, parsed from JSON
//! - `CardPlacement`: One card's face, suit and position
//! - `generate`: Pure descriptor -> (registry, zones) transform

pub mod descriptor;
pub mod error;
pub mod generator;

pub use descriptor::{CardPlacement, LevelDescriptor};
pub use error::{GenerationError, LevelSection};
pub use generator::generate;
