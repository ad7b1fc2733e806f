//! Environment utilities and constants for optbench
//!
//! The binaries shipped with the catalog write generated artifacts (plots)
//! below a project root named by the `OPTBENCH_DIR` environment variable.

pub mod constants;
pub mod env_utils;

pub use constants::*;
pub use env_utils::*;
