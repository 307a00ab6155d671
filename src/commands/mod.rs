//! # CLI Command Implementations
//!
//! Each command module contains:
//! - An `Args` struct that defines the command's arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args`, calls into the
//!   `aosp_merge` library and prints the result.

pub mod merge;
