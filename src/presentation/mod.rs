//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Console confirmation lines
//!
//! ## Structure
//!
//! - `cli` - Positional arguments and override flags
//! - `output` - Event sink printing the user-facing lines

pub mod cli;
pub mod output;

pub use cli::Cli;
pub use output::{ConsoleEventSink, STARTUP_LINE};
