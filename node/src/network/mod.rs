// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Outbound side: the spreadsheet service.

use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::UpstreamError;

pub mod auth;
pub mod client;

pub use auth::TokenSource;
pub use client::SheetsClient;

/// How the service interprets written strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueInputOption {
    /// Stored verbatim.
    Raw,
    /// Parsed as if typed into the UI (numbers, dates, formulas).
    UserEntered,
}

impl ValueInputOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

/// Wire form of a values read. `values` is omitted upstream for empty ranges.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

/// The four upstream operations the record store is built on.
///
/// Ranges are A1 strings (`Sheet1!A2:B`); rows are lists of cells.
pub trait SheetsApi: Send + Sync {
    fn read_range(
        &self,
        range: &str,
    ) -> impl Future<Output = Result<Vec<Vec<String>>, UpstreamError>> + Send;

    fn append_rows(
        &self,
        range: &str,
        rows: Vec<Vec<String>>,
        input: ValueInputOption,
    ) -> impl Future<Output = Result<(), UpstreamError>> + Send;

    fn update_range(
        &self,
        range: &str,
        rows: Vec<Vec<String>>,
        input: ValueInputOption,
    ) -> impl Future<Output = Result<(), UpstreamError>> + Send;

    /// Removes rows `[start, end)` (zero-based) and shifts the rest up.
    fn delete_rows(
        &self,
        sheet_id: u32,
        start: u64,
        end: u64,
    ) -> impl Future<Output = Result<(), UpstreamError>> + Send;
}

impl<T: SheetsApi> SheetsApi for Arc<T> {
    fn read_range(
        &self,
        range: &str,
    ) -> impl Future<Output = Result<Vec<Vec<String>>, UpstreamError>> + Send {
        (**self).read_range(range)
    }

    fn append_rows(
        &self,
        range: &str,
        rows: Vec<Vec<String>>,
        input: ValueInputOption,
    ) -> impl Future<Output = Result<(), UpstreamError>> + Send {
        (**self).append_rows(range, rows, input)
    }

    fn update_range(
        &self,
        range: &str,
        rows: Vec<Vec<String>>,
        input: ValueInputOption,
    ) -> impl Future<Output = Result<(), UpstreamError>> + Send {
        (**self).update_range(range, rows, input)
    }

    fn delete_rows(
        &self,
        sheet_id: u32,
        start: u64,
        end: u64,
    ) -> impl Future<Output = Result<(), UpstreamError>> + Send {
        (**self).delete_rows(sheet_id, start, end)
    }
}

/// Renders a returned cell as text. Formatted reads yield strings, but
/// numbers and booleans show up when a render option changes.
pub fn cell_text(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
