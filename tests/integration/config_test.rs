//! Integration tests for loading command tables from configuration files.

use ex_command::{Config, CommandLineParser, ExError};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

const USER_COMMANDS: &str = r#"
[[commands]]
name = "quit"
abbreviation = "q"
handler = "ex_quit"
description = "Close the current window"

[[commands]]
name = "edit"
abbreviation = "e"
handler = "ex_edit"
params = ["file_name"]
"#;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_from_file(&dir.path().join("absent.toml")).unwrap();
    assert!(config.include_builtin);
    assert!(config.commands.is_empty());
}

#[test]
fn test_user_commands_are_parsed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("commands.toml");
    fs::write(&path, USER_COMMANDS).unwrap();

    let table = Config::load_from_file(&path)
        .unwrap()
        .command_table()
        .unwrap();
    let parser = CommandLineParser::new(&table);

    let quit = parser.parse(":q!").unwrap().unwrap();
    assert_eq!(quit.name, "quit");
    assert_eq!(quit.handler.as_deref(), Some("ex_quit"));
    assert!(quit.forced);

    let edit = parser.parse(":e notes.md").unwrap().unwrap();
    assert_eq!(edit.name, "edit");
    assert_eq!(edit.args.as_bound().unwrap().get("file_name"), Some("notes.md"));

    // Built-ins still resolve first.
    assert_eq!(parser.parse(":w").unwrap().unwrap().name, "write");
    assert!(table.help_text().contains(":quit, :q"));
}

#[test]
fn test_invalid_toml_names_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[[commands]\nname = ").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ExError::Config(_)));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_builtins_can_be_excluded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("commands.toml");
    fs::write(
        &path,
        format!("include_builtin = false\n{USER_COMMANDS}"),
    )
    .unwrap();

    let table = Config::load_from_file(&path)
        .unwrap()
        .command_table()
        .unwrap();
    let parser = CommandLineParser::new(&table);

    assert_eq!(table.len(), 2);
    assert_eq!(parser.parse(":w"), Ok(None));
    assert_eq!(parser.parse(":e").unwrap().unwrap().name, "edit");
}

#[test]
fn test_unreadable_file_names_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("commands.toml");
    fs::create_dir(&path).unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ExError::Config(_)));
    assert!(err.to_string().contains("Failed to read config file"));
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn test_command_shadowed_by_range_syntax_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("commands.toml");
    fs::write(&path, "[[commands]]\nname = \"1up\"\nhandler = \"ex_up\"\n").unwrap();

    let err = Config::load_from_file(&path)
        .unwrap()
        .command_table()
        .unwrap_err();
    assert!(err.to_string().contains("must start with a letter"));
}
