//! Positional argument checks

use crate::error::{CliError, Result};

/// Require exactly `expected` positional arguments
///
/// Returns the first argument on success; `label` names what the
/// arguments are for in the error message.
pub fn check_args_length<'a>(
    expected: usize,
    args: &'a [String],
    label: &'static str,
) -> Result<&'a str> {
    if args.len() != expected {
        return Err(CliError::InvalidArgumentCount {
            expected,
            actual: args.len(),
            label,
        });
    }

    Ok(args.first().map(String::as_str).unwrap_or_default())
}
