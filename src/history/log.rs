//! Append-only move log, consumed last-in-first-out by undo.

use im::Vector;

use super::record::HistoryRecord;

/// Ordered log of applied moves.
///
/// Uses an `im` persistent vector so cloning a whole session stays cheap.
///
/// ## Example
///
/// ```
/// use tripeaks_engine::core::{CardId, Coordinate};
/// use tripeaks_engine::history::{History, HistoryRecord};
///
/// let mut history = History::new();
/// assert!(!history.has_any());
///
/// history.append(HistoryRecord::PlayfieldMatch {
///     card: CardId(2),
///     from: Coordinate::ZERO,
///     previous_top: Some(CardId(1)),
/// });
/// assert!(history.has_any());
/// assert_eq!(history.pop_last().map(|r| r.card()), Some(CardId(2)));
/// assert!(history.pop_last().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    records: Vector<HistoryRecord>,
}

impl History {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an applied move.
    pub fn append(&mut self, record: HistoryRecord) {
        self.records.push_back(record);
    }

    /// Remove and return the most recent record.
    pub fn pop_last(&mut self) -> Option<HistoryRecord> {
        self.records.pop_back()
    }

    /// The most recent record, without consuming it.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryRecord> {
        self.records.back()
    }

    /// Is there anything to undo?
    #[must_use]
    pub fn has_any(&self) -> bool {
        !self.records.is_empty()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }
}
