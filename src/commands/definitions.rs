//! Command definitions for the ex command table.
//!
//! The built-in commands are declared statically, in the order the resolver
//! relies on when a name fragment matches more than one command. At runtime
//! the parser works against a [`CommandTable`], an owned copy of those
//! definitions that configuration may extend with user commands.

use std::sync::OnceLock;

/// Static definition of a built-in command.
#[derive(Debug, Clone)]
pub struct CommandDef {
    /// Full command name.
    pub name: &'static str,
    /// Shortest accepted abbreviation (may equal the full name).
    pub abbreviation: &'static str,
    /// Identifier of the collaborator that executes the command.
    pub handler: &'static str,
    /// Names bound to positional arguments, in order.
    pub params: &'static [&'static str],
    /// Short description shown in help.
    pub description: &'static str,
}

/// All built-in command definitions, in resolution order.
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        name: "write",
        abbreviation: "w",
        handler: "ex_write_file",
        params: &["file_name"],
        description: "Write the buffer to a file",
    },
    CommandDef {
        name: "wall",
        abbreviation: "wa",
        handler: "ex_write_all",
        params: &[],
        description: "Write all modified buffers",
    },
    CommandDef {
        name: "pwd",
        abbreviation: "pw",
        handler: "ex_print_working_dir",
        params: &[],
        description: "Print the working directory",
    },
    CommandDef {
        name: "buffers",
        abbreviation: "buffers",
        handler: "ex_prompt_select_open_file",
        params: &[],
        description: "Pick one of the open buffers",
    },
    CommandDef {
        name: "ls",
        abbreviation: "ls",
        handler: "ex_prompt_select_open_file",
        params: &[],
        description: "Pick one of the open buffers",
    },
    CommandDef {
        name: "map",
        abbreviation: "map",
        handler: "ex_map",
        params: &[],
        description: "List key mappings",
    },
    CommandDef {
        name: "abbreviate",
        abbreviation: "ab",
        handler: "ex_abbreviate",
        params: &[],
        description: "List abbreviations",
    },
    CommandDef {
        name: "read",
        abbreviation: "r",
        handler: "ex_read_shell_out",
        params: &["shell_cmd"],
        description: "Insert the output of a shell command",
    },
];

/// A command as seen by the resolver and parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// Full command name.
    pub name: String,
    /// Shortest accepted abbreviation.
    pub abbreviation: String,
    /// Identifier of the collaborator that executes the command.
    pub handler: String,
    /// Names bound to positional arguments, in order.
    pub params: Vec<String>,
    /// Short description shown in help.
    pub description: String,
}

impl CommandEntry {
    /// Returns true if `fragment` is exactly the full name or the abbreviation.
    pub fn is_exact(&self, fragment: &str) -> bool {
        self.name == fragment || self.abbreviation == fragment
    }
}

impl From<&CommandDef> for CommandEntry {
    fn from(def: &CommandDef) -> Self {
        Self {
            name: def.name.to_string(),
            abbreviation: def.abbreviation.to_string(),
            handler: def.handler.to_string(),
            params: def.params.iter().map(|p| p.to_string()).collect(),
            description: def.description.to_string(),
        }
    }
}

/// Ordered, read-only table of commands.
///
/// Order matters: when several commands match a fragment, the first one
/// declared wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTable {
    entries: Vec<CommandEntry>,
}

impl CommandTable {
    /// Creates a table from entries in resolution order.
    pub fn new(entries: Vec<CommandEntry>) -> Self {
        Self { entries }
    }

    /// Returns the shared table of built-in commands.
    pub fn builtin() -> &'static CommandTable {
        static BUILTIN: OnceLock<CommandTable> = OnceLock::new();
        BUILTIN.get_or_init(|| Self::new(COMMANDS.iter().map(CommandEntry::from).collect()))
    }

    /// Iterates over all entries in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    /// Number of commands in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no commands.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds a command by its exact full name.
    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Returns commands whose full name starts with `fragment`, in order.
    ///
    /// Used both for name resolution and for completion.
    pub fn candidates(&self, fragment: &str) -> Vec<&CommandEntry> {
        self.entries
            .iter()
            .filter(|e| e.name.starts_with(fragment))
            .collect()
    }

    /// Generates help text, one aligned line per command.
    pub fn help_text(&self) -> String {
        let usages: Vec<String> = self.entries.iter().map(usage).collect();
        let width = usages.iter().map(|u| u.len()).max().unwrap_or(0);

        usages
            .iter()
            .zip(&self.entries)
            .map(|(usage, entry)| format!("  {usage:<width$} - {}", entry.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Formats `:name[, :abbr] <param>...` for help output.
fn usage(entry: &CommandEntry) -> String {
    let mut usage = format!(":{}", entry.name);
    if entry.abbreviation != entry.name {
        usage.push_str(&format!(", :{}", entry.abbreviation));
    }
    for param in &entry.params {
        usage.push_str(&format!(" <{param}>"));
    }
    usage
}
