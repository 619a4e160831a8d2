// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Layout constants.

/// Rows reserved at the top of the sheet. Never read or written.
pub const HEADER_ROWS: u64 = 1;

/// One-based sheet row holding the first record.
pub const FIRST_DATA_ROW: u64 = HEADER_ROWS + 1;

/// Column holding the record name (the lookup key).
pub const FIRST_COLUMN: &str = "A";

/// Column holding the record email.
pub const LAST_COLUMN: &str = "B";

/// Number of cells that make up one record.
pub const RECORD_WIDTH: usize = 2;

/// Tab name used when none is configured.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Numeric tab id used by structural (row deletion) requests.
pub const DEFAULT_SHEET_ID: u32 = 0;
