//! Table configuration.
//!
//! The engine stores layout coordinates on cards but never reads them to
//! make a decision. The only coordinate it has to *produce* is the Base
//! slot, which every card takes when it lands on Base. That value comes
//! from `TableConfig` so the presentation layer decides where Base is.

use serde::{Deserialize, Serialize};

/// Opaque 2D layout position, meaningful only to the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f32,
    pub y: f32,
}

impl Coordinate {
    /// The origin.
    pub const ZERO: Coordinate = Coordinate { x: 0.0, y: 0.0 };

    /// Create a coordinate.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Coordinate {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Session-wide configuration, fixed at construction.
///
/// ## Example
///
/// ```
/// use tripeaks_engine::core::{Coordinate, TableConfig};
///
/// let config = TableConfig::default();
/// assert_eq!(config.base_slot, Coordinate::new(270.0, 290.0));
///
/// let custom: TableConfig = serde_json::from_str(r#"{"base_slot":{"x":10.0,"y":20.0}}"#).unwrap();
/// assert_eq!(custom.base_slot, Coordinate::new(10.0, 20.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Coordinate assigned to a card when it is pushed onto Base.
    pub base_slot: Coordinate,
}

impl TableConfig {
    /// Default Base slot, the center of the base area in the reference layout.
    pub const DEFAULT_BASE_SLOT: Coordinate = Coordinate::new(270.0, 290.0);

    /// Config with a custom Base slot.
    #[must_use]
    pub fn with_base_slot(base_slot: Coordinate) -> Self {
        Self { base_slot }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            base_slot: Self::DEFAULT_BASE_SLOT,
        }
    }
}
