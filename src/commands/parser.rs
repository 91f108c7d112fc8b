//! Command-line parsing for ex commands.
//!
//! Turns a line such as `:1,5w! out.txt` into a [`ParsedCommand`]: the range is
//! peeled off the front, the command name is resolved against a
//! [`CommandTable`], and the remaining words are bound to the command's
//! declared parameters.

use super::definitions::CommandTable;
use super::range::match_range;
use super::resolver::resolve;
use super::tokenizer::{bind_args, split_args, ArgMap};
use crate::error::{ExError, Result};
use serde::Serialize;
use tracing::debug;

/// Marker every ex command line starts with.
pub const COMMAND_MARKER: char = ':';

/// Command name used for shell escapes (`:!cmd`).
pub const SHELL_ESCAPE: &str = "!";

/// Arguments of a parsed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandArgs {
    /// Tokens bound to the command's declared parameter names.
    Bound(ArgMap),
    /// Untokenized text following a shell escape.
    Raw(String),
}

impl CommandArgs {
    /// Returns the bound arguments, if these are not raw shell-escape text.
    pub fn as_bound(&self) -> Option<&ArgMap> {
        match self {
            Self::Bound(args) => Some(args),
            Self::Raw(_) => None,
        }
    }

    /// Returns the raw text of a shell escape.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Raw(text) => Some(text),
            Self::Bound(_) => None,
        }
    }
}

/// A parsed ex command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCommand {
    /// Full command name, or `!` for a shell escape.
    pub name: String,
    /// Identifier of the collaborator that executes the command; `None` for a
    /// shell escape.
    pub handler: Option<String>,
    /// Whether the name carried a trailing `!`.
    pub forced: bool,
    /// Address range exactly as typed.
    pub range: Option<String>,
    /// Command arguments.
    pub args: CommandArgs,
}

impl ParsedCommand {
    /// Returns true if this is a shell escape (`:!cmd`).
    pub fn is_shell_escape(&self) -> bool {
        self.handler.is_none()
    }

    fn shell_escape(command: &str) -> Self {
        Self {
            name: SHELL_ESCAPE.to_string(),
            handler: None,
            forced: false,
            range: None,
            args: CommandArgs::Raw(command.to_string()),
        }
    }
}

/// Parses ex command lines against a command table.
#[derive(Debug, Clone, Copy)]
pub struct CommandLineParser<'a> {
    table: &'a CommandTable,
}

impl Default for CommandLineParser<'static> {
    fn default() -> Self {
        Self::new(CommandTable::builtin())
    }
}

impl<'a> CommandLineParser<'a> {
    /// Creates a parser that resolves names against `table`.
    pub fn new(table: &'a CommandTable) -> Self {
        Self { table }
    }

    /// Returns the table this parser resolves against.
    pub fn table(&self) -> &'a CommandTable {
        self.table
    }

    /// Parses a command line.
    ///
    /// Returns `Ok(None)` when the line names no known command. Fails only if
    /// the line does not start with `:`.
    pub fn parse(&self, line: &str) -> Result<Option<ParsedCommand>> {
        let rest = line
            .strip_prefix(COMMAND_MARKER)
            .ok_or_else(|| ExError::malformed_marker(line))?;

        if let Some(command) = rest.strip_prefix('!') {
            debug!(command, "shell escape");
            return Ok(Some(ParsedCommand::shell_escape(command)));
        }

        let range = match_range(rest);
        let rest = match range {
            Some(range) => {
                debug!(range, "matched range");
                &rest[range.len()..]
            }
            None => rest,
        };

        let (name, arg_text) = rest.split_once(' ').unwrap_or((rest, ""));
        let tokens = split_args(arg_text);

        let (name, forced) = match name.strip_suffix('!') {
            Some(name) => (name, true),
            None => (name, false),
        };

        let Some(entry) = resolve(self.table, name) else {
            debug!(name, "not an editor command");
            return Ok(None);
        };

        let args = bind_args(&entry.params, &tokens);

        debug!(command = %entry.name, forced, bound = args.len(), "parsed command");

        Ok(Some(ParsedCommand {
            name: entry.name.clone(),
            handler: Some(entry.handler.clone()),
            forced,
            range: range.map(str::to_string),
            args: CommandArgs::Bound(args),
        }))
    }
}

/// Parses a command line against the built-in command table.
pub fn parse_command(line: &str) -> Result<Option<ParsedCommand>> {
    CommandLineParser::default().parse(line)
}
