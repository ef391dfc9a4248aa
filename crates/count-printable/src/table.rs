// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-character tally of printable ASCII bytes.

use std::io::Write;
use std::ops::RangeInclusive;

/// Byte values that are counted.
pub const PRINTABLE: RangeInclusive<u8> = 32..=126;

const FIRST: u8 = *PRINTABLE.start();
const SLOTS: usize = (*PRINTABLE.end() - *PRINTABLE.start()) as usize + 1;

/// Whether a byte falls in the printable ASCII range.
pub fn is_printable(byte: u8) -> bool {
    PRINTABLE.contains(&byte)
}

/// Occurrence counts indexed by printable byte value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteFrequencyTable {
    counts: [u64; SLOTS],
}

impl Default for ByteFrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteFrequencyTable {
    pub fn new() -> Self {
        Self {
            counts: [0; SLOTS],
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = Self::new();
        table.add_bytes(bytes);
        table
    }

    /// Tally every printable byte in `bytes`, returning how many were counted.
    pub fn add_bytes(&mut self, bytes: &[u8]) -> u64 {
        let mut added = 0;
        for &byte in bytes.iter().filter(|&&b| is_printable(b)) {
            self.counts[usize::from(byte - FIRST)] += 1;
            added += 1;
        }
        added
    }

    /// Add another table's counts into this one.
    pub fn merge(&mut self, other: &ByteFrequencyTable) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }

    /// Count for a byte value. Non-printable bytes are always zero.
    pub fn get(&self, byte: u8) -> u64 {
        if is_printable(byte) {
            self.counts[usize::from(byte - FIRST)]
        } else {
            0
        }
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Non-zero entries in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        PRINTABLE
            .zip(self.counts.iter().copied())
            .filter(|&(_, count)| count > 0)
    }

    /// Write one `char '<c>' : <n> times` line per non-zero entry.
    pub fn write_table<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for (byte, count) in self.iter() {
            writeln!(writer, "char '{}' : {} times", char::from(byte), count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
