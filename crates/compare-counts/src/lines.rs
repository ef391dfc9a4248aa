// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line normalization.

use std::fmt;

/// A non-blank line with surrounding whitespace stripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineRecord(String);

impl LineRecord {
    /// Normalize a single raw line. Returns `None` if nothing but whitespace remains.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split text into normalized lines, preserving file order.
///
/// `\n`, `\r\n` and a lone `\r` all end a line, so line-ending style never
/// affects the result.
pub fn normalize(text: &str) -> Vec<LineRecord> {
    text.split(['\n', '\r']).filter_map(LineRecord::new).collect()
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
