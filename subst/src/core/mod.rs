//! Pure substitution logic. No I/O.

pub mod replace;
