//! Standard exit codes for CLI operations
//!
//! These exit codes follow Unix conventions and sysexits.h where applicable.

/// General error - unspecified failure
pub const ERROR: i32 = 1;

/// IO error - writing output failed
pub const IO_ERROR: i32 = 5;

/// Usage error - invalid arguments or options (following sysexits.h convention)
pub const USAGE_ERROR: i32 = 64;

/// Service unavailable - the release server could not be reached (sysexits.h EX_UNAVAILABLE)
pub const UNAVAILABLE: i32 = 69;
