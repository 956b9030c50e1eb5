//! Configuration constants.

/// Input path that means "read from stdin".
pub const STDIN_MARKER: &str = "-";

/// Prefix of comment lines in input files.
pub const COMMENT_PREFIX: &str = "#";

/// Written in CSV/TSV cells for a missing value.
pub const MISSING_MARKER: &str = "NA";

/// Number of processed inputs between progress log lines.
pub const LOGGING_INTERVAL: usize = 100_000;

/// Batches smaller than this run sequentially even when parallelism is on.
pub const PARALLEL_THRESHOLD: usize = 1_024;
