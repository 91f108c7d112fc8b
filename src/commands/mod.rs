//! Ex command parsing.
//!
//! This module splits a command line into its range, resolved command and
//! bound arguments. Executing the result is left to the caller, which looks up
//! the collaborator named by [`ParsedCommand::handler`].

pub mod definitions;
pub mod parser;
pub mod range;
pub mod resolver;
pub mod tokenizer;

pub use definitions::{CommandDef, CommandEntry, CommandTable, COMMANDS};
pub use parser::{parse_command, CommandArgs, CommandLineParser, ParsedCommand};
pub use range::{is_only_range, match_range};
pub use resolver::resolve;
pub use tokenizer::ArgMap;
