//! Configuration management for ex-command.
//!
//! Handles loading a TOML file that extends (or replaces) the built-in command
//! table with user-defined commands.

use crate::commands::{CommandEntry, CommandTable};
use crate::error::{ExError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Main configuration structure for ex-command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Whether the built-in commands come first in the table.
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,

    /// User-defined commands, in resolution order.
    #[serde(default)]
    pub commands: Vec<UserCommand>,
}

fn default_include_builtin() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_builtin: default_include_builtin(),
            commands: Vec::new(),
        }
    }
}

/// A command declared in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserCommand {
    /// Full command name.
    pub name: String,

    /// Shortest accepted abbreviation; defaults to the full name.
    #[serde(default)]
    pub abbreviation: Option<String>,

    /// Identifier of the collaborator that executes the command.
    pub handler: String,

    /// Names bound to positional arguments, in order.
    #[serde(default)]
    pub params: Vec<String>,

    /// Short description shown in help.
    #[serde(default)]
    pub description: String,
}

impl UserCommand {
    /// Validates the command and converts it into a table entry.
    fn to_entry(&self) -> Result<CommandEntry> {
        let name = self.name.as_str();
        if name.is_empty() {
            return Err(ExError::config("Command name must not be empty"));
        }
        // Anything else up front would be read as a range or a shell escape.
        if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(ExError::config(format!(
                "Invalid command name '{name}': must start with a letter"
            )));
        }
        if name.chars().any(|c| c.is_whitespace() || c == '!') {
            return Err(ExError::config(format!(
                "Invalid command name '{name}': whitespace and '!' are not allowed"
            )));
        }

        let abbreviation = self.abbreviation.as_deref().unwrap_or(name);
        if abbreviation.is_empty() || !name.starts_with(abbreviation) {
            return Err(ExError::config(format!(
                "Abbreviation '{abbreviation}' is not a prefix of '{name}'"
            )));
        }

        if self.handler.trim().is_empty() {
            return Err(ExError::config(format!("Command '{name}' has no handler")));
        }

        let mut seen = HashSet::new();
        for param in &self.params {
            if param.is_empty() {
                return Err(ExError::config(format!(
                    "Command '{name}' declares an empty parameter name"
                )));
            }
            if !seen.insert(param.as_str()) {
                return Err(ExError::config(format!(
                    "Command '{name}' declares parameter '{param}' twice"
                )));
            }
        }

        Ok(CommandEntry {
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            handler: self.handler.clone(),
            params: self.params.clone(),
            description: self.description.clone(),
        })
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ex-command")
            .join("commands.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file is not an error and yields the default configuration.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ExError::config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config = Self::parse_toml(&content, path)?;
        info!(
            "Loaded {} user command(s) from {}",
            config.commands.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            ExError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// Builds the command table: built-ins first (if included), then user
    /// commands in file order.
    pub fn command_table(&self) -> Result<CommandTable> {
        let mut entries: Vec<CommandEntry> = if self.include_builtin {
            CommandTable::builtin().iter().cloned().collect()
        } else {
            Vec::new()
        };

        let mut seen: HashSet<String> = entries.iter().map(|e| e.name.clone()).collect();
        for command in &self.commands {
            let entry = command.to_entry()?;
            if !seen.insert(entry.name.clone()) {
                return Err(ExError::config(format!("Duplicate command '{}'", entry.name)));
            }
            entries.push(entry);
        }

        Ok(CommandTable::new(entries))
    }
}
