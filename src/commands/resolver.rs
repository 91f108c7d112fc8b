//! Command-name resolution with abbreviation matching.
//!
//! A fragment resolves against every command whose full name starts with it.
//! Among those, a command naming the fragment exactly (full name or declared
//! abbreviation) is preferred; otherwise the first one declared wins. Ambiguous
//! fragments are therefore never an error: `:w` is `write`, not `wall`.

use super::definitions::{CommandEntry, CommandTable};
use tracing::trace;

/// Resolves a possibly abbreviated command name against `table`.
///
/// Returns `None` for an empty fragment or when no command name starts with it.
pub fn resolve<'a>(table: &'a CommandTable, fragment: &str) -> Option<&'a CommandEntry> {
    if fragment.is_empty() {
        return None;
    }

    let mut first_partial = None;
    for entry in table.candidates(fragment) {
        if entry.is_exact(fragment) {
            trace!(fragment, command = %entry.name, "exact command match");
            return Some(entry);
        }
        if first_partial.is_none() {
            first_partial = Some(entry);
        }
    }

    if let Some(entry) = first_partial {
        trace!(fragment, command = %entry.name, "partial command match");
    }
    first_partial
}
