// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! A1 range notation for the fixed two-column layout.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;

use crate::config::{
    DEFAULT_SHEET_ID, DEFAULT_SHEET_NAME, FIRST_COLUMN, FIRST_DATA_ROW, LAST_COLUMN,
};
use crate::types::id::RowAddress;

/// Which tab the records live in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetLayout {
    /// Tab title, used in A1 ranges.
    pub sheet_name: String,
    /// Numeric tab id, used by structural edits.
    pub sheet_id: u32,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            sheet_name: String::from(DEFAULT_SHEET_NAME),
            sheet_id: DEFAULT_SHEET_ID,
        }
    }
}

impl SheetLayout {
    pub fn new(sheet_name: impl Into<String>, sheet_id: u32) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            sheet_id,
        }
    }

    /// The tab name as it appears before `!`. Anything other than a plain
    /// identifier is single-quoted, with embedded quotes doubled.
    pub fn sheet_ref(&self) -> Cow<'_, str> {
        let mut chars = self.sheet_name.chars();
        let plain = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if plain {
            Cow::Borrowed(&self.sheet_name)
        } else {
            Cow::Owned(format!("'{}'", self.sheet_name.replace('\'', "''")))
        }
    }

    /// Every record row, header excluded: `Sheet1!A2:B`.
    pub fn data_range(&self) -> String {
        format!(
            "{}!{}{}:{}",
            self.sheet_ref(),
            FIRST_COLUMN,
            FIRST_DATA_ROW,
            LAST_COLUMN
        )
    }

    /// The whole table, used as the append target: `Sheet1!A:B`.
    pub fn table_range(&self) -> String {
        format!("{}!{}:{}", self.sheet_ref(), FIRST_COLUMN, LAST_COLUMN)
    }

    /// Both cells of one row: `Sheet1!A5:B5`.
    pub fn row_range(&self, address: RowAddress) -> String {
        let row = address.sheet_row();
        format!(
            "{}!{}{}:{}{}",
            self.sheet_ref(),
            FIRST_COLUMN,
            row,
            LAST_COLUMN,
            row
        )
    }

    /// The first cell of one row: `Sheet1!A5`. Writes anchored here spill
    /// to the right.
    pub fn row_anchor(&self, address: RowAddress) -> String {
        format!("{}!{}{}", self.sheet_ref(), FIRST_COLUMN, address.sheet_row())
    }
}
