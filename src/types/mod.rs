// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod id;
pub mod record;

pub use id::{RowAddress, RowIndex};
pub use record::{Field, Record, RecordFields};
