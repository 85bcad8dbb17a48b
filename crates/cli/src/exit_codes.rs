//! CLI exit code registry.
//!
//! Single source of truth for process exit codes — scripts rely on them.
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | Success (including zero discrepancies)    |
//! | 1    | General error (bad input data, IO)        |
//! | 2    | CLI usage error                           |
//! | 3    | Required input file missing or unreadable |

/// Success - the run completed; discrepancies are an output, not an error.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unreadable CSV data, output write failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments.
pub const EXIT_USAGE: u8 = 2;

/// A required input file (`members.csv`, `filtered_by_fee.csv`) is missing
/// or unreadable. Nothing is written in this case.
pub const EXIT_INPUT_MISSING: u8 = 3;
