// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Screen-sets and the set manager.
//!
//! A screenset is one page of the live grid: `rows × columns` pattern
//! slots. Set numbers are laid out column-major, matching the slot layout
//! inside a set:
//!
//! ```text
//!     0   4   8   12  16  20  24  28
//!     1   5   9   13  17  21  25  29
//!     2   6   10  14  18  22  26  30
//!     3   7   11  15  19  23  27  31
//! ```
//!
//! Set `SET_LIMIT` is an inert dummy that always exists and is never the
//! play-screen.

pub mod manager;
pub mod screenset;
pub mod slot;

use thiserror::Error;

pub use manager::SetManager;
pub use screenset::Screenset;
pub use slot::{Pattern, Slot};

/// Set number (key and own identity of a screenset)
pub type SetNumber = i32;

/// Global pattern (sequence) number
pub type SeqNumber = i32;

/// Set number reserved for the dummy set
pub const SET_LIMIT: SetNumber = 2048;

/// Default slot rows per set
pub const DEFAULT_ROWS: i32 = 4;

/// Default slot columns per set
pub const DEFAULT_COLUMNS: i32 = 8;

/// Largest supported row count
pub const MAX_ROWS: i32 = 32;

/// Largest supported column count
pub const MAX_COLUMNS: i32 = 32;

/// True for set numbers that may hold a real (non-dummy) set.
pub fn is_valid_set(setno: SetNumber) -> bool {
    (0..SET_LIMIT).contains(&setno)
}

/// True when the grid dimensions are supported.
pub fn is_valid_geometry(rows: i32, columns: i32) -> bool {
    (1..=MAX_ROWS).contains(&rows) && (1..=MAX_COLUMNS).contains(&columns)
}

/// Set-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// Grid dimensions outside the supported range
    #[error("invalid set geometry {rows}x{columns}")]
    InvalidGeometry { rows: i32, columns: i32 },
    /// Set number outside [0, SET_LIMIT)
    #[error("set number {0} is out of range")]
    InvalidSet(SetNumber),
    /// Slot index outside the set's grid
    #[error("slot {index} is out of range for set {set}")]
    SlotOutOfRange { set: SetNumber, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_set_range() {
        assert!(is_valid_set(0));
        assert!(is_valid_set(SET_LIMIT - 1));
        assert!(!is_valid_set(SET_LIMIT));
        assert!(!is_valid_set(-1));
    }

    #[test]
    fn test_geometry_limits() {
        assert!(is_valid_geometry(DEFAULT_ROWS, DEFAULT_COLUMNS));
        assert!(is_valid_geometry(1, 1));
        assert!(!is_valid_geometry(0, 8));
        assert!(!is_valid_geometry(4, MAX_COLUMNS + 1));
    }

    #[test]
    fn test_error_messages() {
        let err = SetError::InvalidGeometry { rows: 0, columns: 8 };
        assert_eq!(err.to_string(), "invalid set geometry 0x8");
        assert_eq!(SetError::InvalidSet(-3).to_string(), "set number -3 is out of range");
    }
}
