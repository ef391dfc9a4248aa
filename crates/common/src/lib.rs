// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared plumbing for the pcc tester tools.
//!
//! Every binary in the workspace reports problems the same way: a single
//! `Error: ...` line on stderr and an exit code from [`exit_codes`]. Input
//! files are loaded through [`source`], which attaches the offending path to
//! any I/O failure.

pub mod output_diagnostic;
pub mod source;

pub use output_diagnostic::{print_error, print_info, print_warning};
pub use source::{read_bytes, read_text, SourceError};

/// Process exit codes shared by the tester binaries.
pub mod exit_codes {
    /// Successful execution (or a matching comparison)
    pub const SUCCESS: i32 = 0;
    /// Verdict failure (comparison mismatch) or fatal runtime error
    pub const FAILURE: i32 = 1;
    /// Input could not be read
    pub const IO_ERROR: i32 = 2;
}
