//! Process exit codes. Part of the CLI contract.

pub const SUCCESS: i32 = 0;
pub const BELOW_MIN_SCORE: i32 = 1; // Mean score under --min-score
pub const CONFIG_ERROR: i32 = 2; // Bad flags, dataset or judge config
pub const RUN_FAILED: i32 = 3; // Pipeline or judge failure on some example
pub const OUTPUT_FAILED: i32 = 4; // Run finished but the --output artifact could not be written
