// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Printable ASCII frequency counting.
//!
//! Bytes 32 (space) through 126 (tilde) are tallied; everything else is
//! ignored. Input is never decoded, so any byte stream can be counted.

pub mod cli;
mod count;
mod table;

pub use count::count_files;
pub use table::{is_printable, ByteFrequencyTable, PRINTABLE};
