// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered comparison of two normalized line sequences and its report.

use crate::lines::{normalize, LineRecord};
use pcc_common::{exit_codes, read_text, SourceError};
use std::io::Write;
use std::path::Path;

/// Header printed when both sequences are equal.
pub const PASS_MESSAGE: &str = "Tests Passed - Output PCC_TOTAL matches!";
/// Header printed before the positional diff.
pub const FAIL_MESSAGE: &str = "Files differ!";

/// Outcome of a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch,
}

impl Verdict {
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Match => exit_codes::SUCCESS,
            Verdict::Mismatch => exit_codes::FAILURE,
        }
    }
}

/// A position where both sequences have a line but the lines differ.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineDifference {
    /// Zero-based index into the normalized sequences
    pub index: usize,
    pub expected: LineRecord,
    pub actual: LineRecord,
}

/// Result of comparing two normalized sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    differences: Vec<LineDifference>,
    expected_len: usize,
    actual_len: usize,
}

impl Comparison {
    pub fn verdict(&self) -> Verdict {
        if self.differences.is_empty() && self.expected_len == self.actual_len {
            Verdict::Match
        } else {
            Verdict::Mismatch
        }
    }

    /// Differing lines within the shared prefix, in file order.
    pub fn differences(&self) -> &[LineDifference] {
        &self.differences
    }

    /// Both sequence lengths, when they differ.
    pub fn length_mismatch(&self) -> Option<(usize, usize)> {
        (self.expected_len != self.actual_len).then_some((self.expected_len, self.actual_len))
    }

    /// Write the human-readable report.
    ///
    /// A match is a single pass line. A mismatch is a header, one `-`/`+`
    /// pair per differing index, then the length note if the lengths differ.
    pub fn write_report<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        if self.verdict() == Verdict::Match {
            return writeln!(writer, "{}", PASS_MESSAGE);
        }

        writeln!(writer, "{}", FAIL_MESSAGE)?;
        for diff in &self.differences {
            writeln!(writer, "- {}", diff.expected)?;
            writeln!(writer, "+ {}", diff.actual)?;
        }
        if let Some((expected, actual)) = self.length_mismatch() {
            writeln!(writer, "File lengths differ: {} vs {}", expected, actual)?;
        }
        Ok(())
    }
}

/// Compare two normalized sequences position by position.
///
/// No realignment is attempted: an inserted or deleted line shifts every
/// later pair and shows up in the length note.
pub fn compare_lines(expected: &[LineRecord], actual: &[LineRecord]) -> Comparison {
    let differences = expected
        .iter()
        .zip(actual)
        .enumerate()
        .filter(|(_, (e, a))| e != a)
        .map(|(index, (e, a))| LineDifference {
            index,
            expected: e.clone(),
            actual: a.clone(),
        })
        .collect();

    Comparison {
        differences,
        expected_len: expected.len(),
        actual_len: actual.len(),
    }
}

/// Read, normalize and compare two files.
///
/// Both files are read before anything is compared; either one failing to
/// load aborts the comparison.
pub fn compare_files(expected: &Path, actual: &Path) -> Result<Comparison, SourceError> {
    let expected_lines = normalize(&read_text(expected)?);
    let actual_lines = normalize(&read_text(actual)?);
    Ok(compare_lines(&expected_lines, &actual_lines))
}

#[cfg(test)]
#[path = "comparison_tests.rs"]
mod tests;
