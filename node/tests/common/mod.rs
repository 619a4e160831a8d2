#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use sheetrow_kernel::range::SheetLayout;
use sheetrow_kernel::types::Record;
use sheetrow_node::errors::UpstreamError;
use sheetrow_node::network::{SheetsApi, ValueInputOption};
use sheetrow_node::store::RecordStore;

/// In-process stand-in for one spreadsheet tab. Row 0 is the header.
#[derive(Default)]
pub struct MemorySheet {
    rows: Mutex<Vec<Vec<String>>>,
    failing: AtomicBool,
    writes: AtomicUsize,
    pub last_input: Mutex<Option<ValueInputOption>>,
    pub last_range: Mutex<Option<String>>,
}

impl MemorySheet {
    pub fn with_records(records: &[(&str, &str)]) -> Self {
        let mut rows = vec![vec!["name".to_string(), "email".to_string()]];
        rows.extend(
            records
                .iter()
                .map(|(name, email)| vec![name.to_string(), email.to_string()]),
        );
        Self {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn header(&self) -> Vec<String> {
        self.rows.lock().unwrap()[0].clone()
    }

    /// Raw data rows below the header.
    pub fn data_rows(&self) -> Vec<Vec<String>> {
        self.rows.lock().unwrap()[1..].to_vec()
    }

    pub fn records(&self) -> Vec<Record> {
        self.data_rows()
            .into_iter()
            .map(Record::from_cells)
            .collect()
    }

    fn check(&self) -> Result<(), UpstreamError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(UpstreamError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                body: "backend unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn record_write(&self, range: &str, input: Option<ValueInputOption>) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        *self.last_range.lock().unwrap() = Some(range.to_string());
        *self.last_input.lock().unwrap() = input;
    }
}

/// One-based start row of an A1 range (`Sheet1!A5:B5` -> 5), if it has one.
fn start_row(range: &str) -> Option<usize> {
    let cells = range.split_once('!').map_or(range, |(_, cells)| cells);
    let first = cells.split(':').next().unwrap_or_default();
    let digits: String = first.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

impl SheetsApi for MemorySheet {
    async fn read_range(&self, range: &str) -> Result<Vec<Vec<String>>, UpstreamError> {
        self.check()?;
        let skip = start_row(range).map_or(0, |row| row - 1);
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().skip(skip).map(|r| r.iter().take(2).cloned().collect()).collect())
    }

    async fn append_rows(
        &self,
        range: &str,
        rows: Vec<Vec<String>>,
        input: ValueInputOption,
    ) -> Result<(), UpstreamError> {
        self.check()?;
        self.record_write(range, Some(input));
        self.rows.lock().unwrap().extend(rows);
        Ok(())
    }

    async fn update_range(
        &self,
        range: &str,
        rows: Vec<Vec<String>>,
        input: ValueInputOption,
    ) -> Result<(), UpstreamError> {
        self.check()?;
        self.record_write(range, Some(input));
        let first = start_row(range).expect("update range has a row") - 1;
        let mut sheet = self.rows.lock().unwrap();
        for (offset, cells) in rows.into_iter().enumerate() {
            let row = &mut sheet[first + offset];
            for (col, value) in cells.into_iter().enumerate() {
                if col < row.len() {
                    row[col] = value;
                } else {
                    row.push(value);
                }
            }
        }
        Ok(())
    }

    async fn delete_rows(&self, _sheet_id: u32, start: u64, end: u64) -> Result<(), UpstreamError> {
        self.check()?;
        self.record_write(&format!("rows {}..{}", start, end), None);
        let mut rows = self.rows.lock().unwrap();
        for _ in start..end {
            rows.remove(start as usize);
        }
        Ok(())
    }
}

pub type MemoryStore = RecordStore<Arc<MemorySheet>>;

pub fn store_with(records: &[(&str, &str)]) -> (Arc<MemorySheet>, MemoryStore) {
    let sheet = Arc::new(MemorySheet::with_records(records));
    let store = RecordStore::new(sheet.clone(), SheetLayout::default());
    (sheet, store)
}
