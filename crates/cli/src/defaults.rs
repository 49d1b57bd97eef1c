//! Shared default values for the command-line surface.

/// Appended to the input file name to form the output file name.
pub const OUTPUT_EXTENSION: &str = ".cx";

/// Appended to the output path while it is being written.
pub const PARTIAL_SUFFIX: &str = ".partial";

pub const INVALID_GROUP_POLICY: &str = "validate";

/// Log filter used when `RUST_LOG` is unset, indexed by `-v` count.
pub const LOG_LEVELS: [&str; 4] = ["warn", "info", "debug", "trace"];
