// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use core::fmt;

use crate::types::record::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// No record matches the requested name.
    NotFound,
    /// A field required for a full write was absent or empty.
    MissingField(Field),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::NotFound => f.write_str("no matching record"),
            KernelError::MissingField(field) => write!(f, "missing field `{}`", field),
        }
    }
}

pub type KernelResult<T> = core::result::Result<T, KernelError>;
