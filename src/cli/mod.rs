//! CLI module
//!
//! # Commands
//!
//! - `webcam <code>` - Show one webcam
//! - `webcams` - List every webcam
//! - `images <code>` - List the images of a webcam, optionally filtered

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
