//! Process exit codes for the binforge CLI.

/// Successful run.
pub const EXIT_SUCCESS: i32 = 0;

/// Fatal error; output may be incomplete.
pub const EXIT_ERROR: i32 = 1;

/// Run completed but some input files were skipped.
pub const EXIT_WARNING: i32 = 2;
