//! Stable exit codes for the `subst` binary.

use crate::error::SubstError;

/// Substitution completed (or dry run reported).
pub const OK: i32 = 0;
/// Invalid config/usage or an unclassified I/O failure.
pub const INVALID: i32 = 1;
/// Target file does not exist.
pub const NOT_FOUND: i32 = 2;
/// Read or write access to the target was refused.
pub const PERMISSION_DENIED: i32 = 3;
/// Target content is not valid UTF-8.
pub const ENCODING: i32 = 4;

/// Map a substitution error to its exit code.
pub fn for_error(err: &SubstError) -> i32 {
    match err {
        SubstError::FileNotFound { .. } => NOT_FOUND,
        SubstError::PermissionDenied { .. } => PERMISSION_DENIED,
        SubstError::Encoding { .. } => ENCODING,
        SubstError::InvalidConfig(_) | SubstError::Io { .. } => INVALID,
    }
}
