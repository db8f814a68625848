//! Card system: ranks, instances, and the registry.
//!
//! ## Key Types
//!
//! - `Rank` / `Suit`: Card faces, with the circular adjacency rule on `Rank`
//! - `Card`: Runtime card state (coordinate, face-up flag)
//! - `CardRegistry`: Session-owned arena that allocates ids and stores cards

pub mod instance;
pub mod rank;
pub mod registry;

pub use instance::Card;
pub use rank::{Rank, Suit};
pub use registry::CardRegistry;
