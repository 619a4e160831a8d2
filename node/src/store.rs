// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Record store: CRUD over rows of one sheet.
//!
//! The sheet only supports position-addressed writes, so every mutation
//! except append is a read-modify-write. A request first [`resolve`]s its key
//! against a fresh read and then writes to the resolved address. Nothing is
//! cached between requests and nothing guards the gap between the two steps:
//! a concurrent writer can shift rows underneath a resolved address.
//!
//! [`resolve`]: RecordStore::resolve

use sheetrow_kernel::error::KernelError;
use sheetrow_kernel::index::find_index_by_name;
use sheetrow_kernel::range::SheetLayout;
use sheetrow_kernel::types::{Record, RecordFields, RowAddress, RowIndex};

use crate::errors::StoreError;
use crate::network::{SheetsApi, ValueInputOption};

/// A key resolved against one read of the sheet.
///
/// Only valid for the request that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRow {
    pub key: String,
    pub address: RowAddress,
    /// Row content as seen by the resolving read.
    pub current: Record,
}

impl ResolvedRow {
    pub fn index(&self) -> RowIndex {
        self.address.index()
    }
}

#[derive(Debug)]
pub struct RecordStore<S> {
    sheets: S,
    layout: SheetLayout,
}

impl<S: SheetsApi> RecordStore<S> {
    pub fn new(sheets: S, layout: SheetLayout) -> Self {
        Self { sheets, layout }
    }

    /// Every record below the header, in row order.
    pub async fn list(&self) -> Result<Vec<Record>, StoreError> {
        let rows = self.sheets.read_range(&self.layout.data_range()).await?;
        Ok(rows.into_iter().map(Record::from_cells).collect())
    }

    /// Adds a row after the last non-empty row of the table.
    pub async fn append(&self, record: Record) -> Result<(), StoreError> {
        self.sheets
            .append_rows(
                &self.layout.table_range(),
                vec![record.into_cells()],
                ValueInputOption::UserEntered,
            )
            .await?;
        Ok(())
    }

    pub fn find_index_by_name(records: &[Record], key: &str) -> Option<RowIndex> {
        find_index_by_name(records, key)
    }

    /// Step one of every keyed mutation: read the sheet and locate `key`.
    pub async fn resolve(&self, key: &str) -> Result<ResolvedRow, StoreError> {
        let mut records = self.list().await?;
        let index = find_index_by_name(&records, key)
            .ok_or_else(|| StoreError::from_kernel(KernelError::NotFound, key))?;

        Ok(ResolvedRow {
            key: key.to_string(),
            address: index.address(),
            current: records.swap_remove(index.0),
        })
    }

    /// Overwrites both cells of the resolved row.
    pub async fn replace_resolved(&self, row: &ResolvedRow, record: Record) -> Result<(), StoreError> {
        self.sheets
            .update_range(
                &self.layout.row_range(row.address),
                vec![record.into_cells()],
                ValueInputOption::Raw,
            )
            .await?;
        Ok(())
    }

    /// Writes the supplied fields starting at the row's first column.
    pub async fn patch_resolved(&self, row: &ResolvedRow, fields: RecordFields) -> Result<(), StoreError> {
        self.sheets
            .update_range(
                &self.layout.row_anchor(row.address),
                vec![fields.patch_cells()],
                ValueInputOption::Raw,
            )
            .await?;
        Ok(())
    }

    /// Removes the resolved row; every later row moves up by one.
    pub async fn delete_resolved(&self, row: &ResolvedRow) -> Result<(), StoreError> {
        let start = row.address.dimension_index();
        self.sheets
            .delete_rows(self.layout.sheet_id, start, start + 1)
            .await?;
        Ok(())
    }

    /// Full replace. The key must exist, then both fields must be present.
    pub async fn replace(&self, key: &str, fields: RecordFields) -> Result<(), StoreError> {
        let row = self.resolve(key).await?;
        let record = fields
            .complete()
            .map_err(|e| StoreError::from_kernel(e, key))?;
        self.replace_resolved(&row, record).await
    }

    pub async fn patch(&self, key: &str, fields: RecordFields) -> Result<(), StoreError> {
        let row = self.resolve(key).await?;
        if fields.is_empty() {
            tracing::debug!("Patch of {:?} carries no fields, nothing to write", row.key);
            return Ok(());
        }
        if fields.email.is_some() && fields.name.is_none() {
            tracing::warn!(
                "Patch of {:?} without a name writes the email into the name column",
                key
            );
        }
        self.patch_resolved(&row, fields).await
    }

    pub async fn delete_by_name(&self, key: &str) -> Result<(), StoreError> {
        let row = self.resolve(key).await?;
        tracing::debug!("Deleting {:?} at sheet row {}", row.key, row.address.sheet_row());
        self.delete_resolved(&row).await
    }
}
