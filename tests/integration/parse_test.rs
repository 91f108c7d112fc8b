//! Integration tests for command-line parsing with the built-in table.

use ex_command::{
    is_only_range, match_range, parse_command, resolve, ArgMap, CommandArgs, CommandTable,
    ExError, ParsedCommand,
};
use pretty_assertions::assert_eq;

fn bound(pairs: &[(&str, &str)]) -> CommandArgs {
    CommandArgs::Bound(pairs.iter().copied().collect::<ArgMap>())
}

#[test]
fn test_write_with_file_name() {
    assert_eq!(
        parse_command(":w myfile.txt").unwrap(),
        Some(ParsedCommand {
            name: "write".to_string(),
            handler: Some("ex_write_file".to_string()),
            forced: false,
            range: None,
            args: bound(&[("file_name", "myfile.txt")]),
        })
    );
}

#[test]
fn test_forced_write_all() {
    assert_eq!(
        parse_command(":wa!").unwrap(),
        Some(ParsedCommand {
            name: "wall".to_string(),
            handler: Some("ex_write_all".to_string()),
            forced: true,
            range: None,
            args: bound(&[]),
        })
    );
}

#[test]
fn test_read_with_range() {
    assert_eq!(
        parse_command(":1,5r !ls").unwrap(),
        Some(ParsedCommand {
            name: "read".to_string(),
            handler: Some("ex_read_shell_out".to_string()),
            forced: false,
            range: Some("1,5".to_string()),
            args: bound(&[("shell_cmd", "!ls")]),
        })
    );
}

#[test]
fn test_shell_escape() {
    assert_eq!(
        parse_command(":!echo hi").unwrap(),
        Some(ParsedCommand {
            name: "!".to_string(),
            handler: None,
            forced: false,
            range: None,
            args: CommandArgs::Raw("echo hi".to_string()),
        })
    );
}

#[test]
fn test_shell_escape_ignores_range_syntax() {
    let cmd = parse_command(":!1,5").unwrap().unwrap();
    assert_eq!(cmd.range, None);
    assert_eq!(cmd.args.as_raw(), Some("1,5"));
}

#[test]
fn test_unknown_command_is_absent() {
    assert_eq!(parse_command(":zzz"), Ok(None));
    assert_eq!(parse_command(":1,5zzz"), Ok(None));
}

#[test]
fn test_missing_marker_is_an_error() {
    assert!(matches!(
        parse_command("write"),
        Err(ExError::MalformedMarker(line)) if line == "write"
    ));
}

#[test]
fn test_buffers_and_ls_share_a_handler() {
    let buffers = parse_command(":buffers").unwrap().unwrap();
    let ls = parse_command(":ls").unwrap().unwrap();
    assert_eq!(buffers.name, "buffers");
    assert_eq!(ls.name, "ls");
    assert_eq!(buffers.handler, ls.handler);
    assert_eq!(
        buffers.handler.as_deref(),
        Some("ex_prompt_select_open_file")
    );
}

#[test]
fn test_args_never_exceed_declared_params() {
    let table = CommandTable::builtin();
    for line in [":w a b c", ":r x y", ":pwd extra", ":map a b", ":2;/x/w! f g"] {
        let cmd = parse_command(line).unwrap().unwrap();
        let entry = table.get(&cmd.name).unwrap();
        let args = cmd.args.as_bound().unwrap();
        assert!(args.len() <= entry.params.len(), "{line}");
        assert!(args.keys().all(|k| entry.params.iter().any(|p| p == k)));
    }
}

#[test]
fn test_range_is_prefix_of_input() {
    for line in [":.,$w", ":%w x", ":/a/;?b?+2r cmd", ":$-3ls", ":12pwd"] {
        let cmd = parse_command(line).unwrap().unwrap();
        let range = cmd.range.expect("range");
        assert!(!range.is_empty());
        assert!(line[1..].starts_with(&range), "{line}");
    }
}

#[test]
fn test_parse_is_repeatable() {
    let lines = [":w out", ":1,5r !ls", ":!make", ":abbrev", ":zzz", ":"];
    for line in lines {
        assert_eq!(parse_command(line), parse_command(line));
    }
}

#[test]
fn test_range_predicates() {
    assert_eq!(match_range(".,$"), Some(".,$"));
    assert_eq!(match_range("5"), Some("5"));
    assert_eq!(match_range("/foo/,/bar/"), Some("/foo/,/bar/"));
    assert_eq!(match_range("hello"), None);

    assert!(is_only_range("10,20"));
    assert!(!is_only_range("10,20d"));
}

#[test]
fn test_resolve_prefers_exact_abbreviation() {
    let table = CommandTable::builtin();
    assert_eq!(resolve(table, "w").unwrap().name, "write");
    assert_eq!(resolve(table, "wa").unwrap().name, "wall");
    assert!(resolve(table, "x").is_none());
}

#[test]
fn test_parsed_command_serializes_for_dispatch() {
    let cmd = parse_command(":1,5r !ls").unwrap().unwrap();
    let json = serde_json::to_value(&cmd).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "read",
            "handler": "ex_read_shell_out",
            "forced": false,
            "range": "1,5",
            "args": { "shell_cmd": "!ls" }
        })
    );

    let shell = parse_command(":!echo hi").unwrap().unwrap();
    let json = serde_json::to_value(&shell).unwrap();
    assert_eq!(json["args"], serde_json::json!("echo hi"));
    assert_eq!(json["handler"], serde_json::Value::Null);
}
