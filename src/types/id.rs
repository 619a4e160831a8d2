// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Row identity types.

use crate::config::{FIRST_DATA_ROW, HEADER_ROWS};

/// Zero-based position of a record inside the fetched data range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct RowIndex(pub usize);

impl RowIndex {
    pub fn address(&self) -> RowAddress {
        RowAddress::from_index(*self)
    }
}

/// Where a record lives in the sheet.
///
/// The same row is addressed two ways upstream: value writes use one-based
/// A1 rows, structural edits use zero-based dimension indices. Both count
/// the header row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowAddress {
    index: RowIndex,
}

impl RowAddress {
    pub fn from_index(index: RowIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> RowIndex {
        self.index
    }

    /// One-based row number, as used in `Sheet1!A{row}`.
    pub fn sheet_row(&self) -> u64 {
        self.index.0 as u64 + FIRST_DATA_ROW
    }

    /// Zero-based row offset, as used by `deleteDimension`.
    pub fn dimension_index(&self) -> u64 {
        self.index.0 as u64 + HEADER_ROWS
    }
}
