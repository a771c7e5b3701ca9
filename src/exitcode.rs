//! Process exit codes (BSD sysexits.h compatible where one applies)

/// Successful termination
pub const OK: i32 = 0;

/// `--check` found the README out of date
pub const STALE: i32 = 1;

/// README has no Table of Contents marker; nothing was written
pub const MISSING_MARKER: i32 = 2;

/// Data format error (conflicting section names)
pub const DATAERR: i32 = 65;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
