//! Command-line interface for legalview.

mod commands;
pub mod helpers;

pub use commands::{is_verbose, run};
