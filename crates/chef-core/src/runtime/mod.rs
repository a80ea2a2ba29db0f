//! Runtime detection
//!
//! The generator shells out to npm, so Node.js and npm must be on PATH before
//! anything is written.

pub mod check;

pub use check::{check_node, check_npm, require_npm, RuntimeInfo};
