//! Board storage.
//!
//! A fixed 7×7 array of [`Marble`](crate::core::Marble) values with raw
//! and bounds-aware accessors, counting and text rendering. The board has
//! no rules of its own; all mutation goes through the push in
//! [`rules`](crate::rules).

mod grid;

pub use grid::{Board, Cells, MarbleCounts, STARTING_LAYOUT};
