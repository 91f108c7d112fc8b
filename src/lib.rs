//! ex-command - a parser for editor ex-style command lines.
//!
//! Parses lines such as `:1,5w! out.txt` into an address range, a command
//! resolved from a possibly abbreviated name, a force flag and named
//! arguments.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use commands::{
    is_only_range, match_range, parse_command, resolve, ArgMap, CommandArgs, CommandEntry,
    CommandLineParser, CommandTable, ParsedCommand,
};
pub use config::Config;
pub use error::{ExError, Result};
