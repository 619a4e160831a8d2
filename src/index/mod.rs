// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Name lookup over a fetched record collection.

use crate::types::id::RowIndex;
use crate::types::record::Record;

/// Linear scan for the first record whose name equals `key`.
///
/// Comparison is exact (case and whitespace sensitive). With duplicate
/// names the topmost row wins.
pub fn find_index_by_name(records: &[Record], key: &str) -> Option<RowIndex> {
    records
        .iter()
        .position(|record| record.name == key)
        .map(RowIndex)
}
