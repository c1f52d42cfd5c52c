//! I/O helpers for `subst`.

pub mod config;
pub mod target;
