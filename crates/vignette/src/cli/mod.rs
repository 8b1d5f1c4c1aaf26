//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the vignette binary.

mod captions;
mod commands;
mod generate;
mod iterate;
mod styles;

pub use captions::handle_captions_command;
pub use commands::{Cli, Commands};
pub use generate::handle_generate_command;
pub use iterate::handle_iterate_command;
pub use styles::handle_styles_command;
