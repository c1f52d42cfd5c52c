//! Literal token substitution for a single text file.
//!
//! Reads one file, replaces every occurrence of a literal search token with a
//! replacement token, and writes the result back to the same path. The crate
//! keeps the usual split:
//!
//! - **[`core`]**: Pure replacement logic. No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config loading, target read/write).
//!
//! [`substitute`] coordinates the two for the `subst` binary.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod substitute;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
