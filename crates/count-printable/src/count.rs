// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::table::ByteFrequencyTable;
use pcc_common::{read_bytes, SourceError};
use std::path::Path;

/// Count printable bytes across all `paths` into one table.
///
/// Stops at the first file that cannot be read.
pub fn count_files<P: AsRef<Path>>(paths: &[P]) -> Result<ByteFrequencyTable, SourceError> {
    let mut table = ByteFrequencyTable::new();
    for path in paths {
        let data = read_bytes(path.as_ref())?;
        table.add_bytes(&data);
    }
    Ok(table)
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
