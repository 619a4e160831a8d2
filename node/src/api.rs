// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

pub use sheetrow_kernel::types::{Record, RecordFields};

pub const SUCCESS: &str = "success";

/// `{"status": "..."}`: the only shape write endpoints ever answer with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }

    pub fn success() -> Self {
        Self::new(SUCCESS)
    }
}

/// `GET /api` body.
pub type ListResponse = Vec<Record>;
