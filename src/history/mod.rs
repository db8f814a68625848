//! Move history for undo.
//!
//! Each accepted move appends one `HistoryRecord`; undo consumes them
//! strictly from the most recent end. There is no redo: an undone record
//! is gone, and the next forward move writes a fresh one.

pub mod log;
pub mod record;

pub use log::History;
pub use record::HistoryRecord;
