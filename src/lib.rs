// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
#![no_std]

//! sheetrow-kernel: the I/O-free data model behind the sheetrow node.
//!
//! A spreadsheet tab is treated as a row-oriented table of `(name, email)`
//! records. This crate owns the record types, the name lookup and the
//! row-address arithmetic; it never talks to the network.

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod error;
pub mod types;
pub mod index;
pub mod range;

#[cfg(test)]
pub mod tests;
