//! Command-line arguments for the `token-geometry` binary.

pub mod args;
