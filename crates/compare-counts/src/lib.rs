// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-based comparison of an expected and an actual test output.
//!
//! Both files are reduced to their non-blank lines with surrounding
//! whitespace removed, then compared as ordered sequences. Reordered, extra
//! or missing lines are all mismatches; only blank lines and whitespace at
//! either end of a line are ignored.
//!
//! ```
//! use compare_counts::{compare_lines, normalize, Verdict};
//!
//! let expected = normalize("char 'A' : 2 times\n\n");
//! let actual = normalize("  char 'A' : 2 times\r\n");
//! assert_eq!(compare_lines(&expected, &actual).verdict(), Verdict::Match);
//! ```

pub mod cli;
mod comparison;
mod lines;

pub use comparison::{
    compare_files, compare_lines, Comparison, LineDifference, Verdict, FAIL_MESSAGE, PASS_MESSAGE,
};
pub use lines::{normalize, LineRecord};
