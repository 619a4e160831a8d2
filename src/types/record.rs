// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Record definition.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::config::RECORD_WIDTH;
use crate::error::{KernelError, KernelResult};

/// One row of the table. `name` is the lookup key and is not unique.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub email: String,
}

impl Record {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Builds a record from the leading cells of a row.
    /// Short rows are padded with empty strings, extra cells are ignored.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut cells = cells.into_iter();
        let name = cells.next().unwrap_or_default();
        let email = cells.next().unwrap_or_default();
        Self { name, email }
    }

    pub fn into_cells(self) -> Vec<String> {
        let mut cells = Vec::with_capacity(RECORD_WIDTH);
        cells.push(self.name);
        cells.push(self.email);
        cells
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => f.write_str("name"),
            Field::Email => f.write_str("email"),
        }
    }
}

/// A partially specified record, as it arrives in a request body.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordFields {
    #[serde(default, deserialize_with = "cell_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "cell_text")]
    pub email: Option<String>,
}

/// Accepts any scalar for a field and keeps it as cell text.
/// `null` reads as an absent field.
fn cell_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CellText;

    impl<'de> Visitor<'de> for CellText {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, number, boolean or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(String::from(v)))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(CellText)
        }
    }

    deserializer.deserialize_any(CellText)
}

impl RecordFields {
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self { name, email }
    }

    /// Both fields must be present and non-empty. Name is checked first.
    pub fn complete(self) -> KernelResult<Record> {
        let name = self
            .name
            .filter(|v| !v.is_empty())
            .ok_or(KernelError::MissingField(Field::Name))?;
        let email = self
            .email
            .filter(|v| !v.is_empty())
            .ok_or(KernelError::MissingField(Field::Email))?;
        Ok(Record { name, email })
    }

    /// Missing fields become empty cells.
    pub fn into_record_lenient(self) -> Record {
        Record {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        }
    }

    /// Supplied fields in column order, absent ones dropped.
    ///
    /// The cells are written starting at the row's first column, so a lone
    /// email lands in the name column. Callers that need positional writes
    /// should go through [`RecordFields::complete`] instead.
    pub fn patch_cells(self) -> Vec<String> {
        self.name.into_iter().chain(self.email).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

impl From<Record> for RecordFields {
    fn from(record: Record) -> Self {
        Self {
            name: Some(record.name),
            email: Some(record.email),
        }
    }
}
