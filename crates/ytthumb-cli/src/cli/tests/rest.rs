//! Tests for lang, privacy, shell, completions and the global --lang flag.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_lang_list() {
    match parse(&["ytthumb", "lang"]) {
        CliCommand::Lang { code } => assert!(code.is_none()),
        _ => panic!("expected Lang"),
    }
}

#[test]
fn cli_parse_lang_set() {
    match parse(&["ytthumb", "lang", "hi"]) {
        CliCommand::Lang { code } => assert_eq!(code.as_deref(), Some("hi")),
        _ => panic!("expected Lang hi"),
    }
}

#[test]
fn cli_parse_privacy() {
    match parse(&["ytthumb", "privacy"]) {
        CliCommand::Privacy { source } => assert!(source.is_none()),
        _ => panic!("expected Privacy"),
    }
    match parse(&["ytthumb", "privacy", "--source", "https://example.com/p"]) {
        CliCommand::Privacy { source } => {
            assert_eq!(source.as_deref(), Some("https://example.com/p"))
        }
        _ => panic!("expected Privacy --source"),
    }
}

#[test]
fn cli_parse_shell() {
    assert!(matches!(parse(&["ytthumb", "shell"]), CliCommand::Shell));
}

#[test]
fn cli_parse_completions() {
    match parse(&["ytthumb", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
    assert!(Cli::try_parse_from(["ytthumb", "completions", "cmd.exe"]).is_err());
}

#[test]
fn cli_global_lang_before_and_after_subcommand() {
    let cli = Cli::try_parse_from(["ytthumb", "--lang", "ar", "show", "x"]).unwrap();
    assert_eq!(cli.lang.as_deref(), Some("ar"));
    let cli = Cli::try_parse_from(["ytthumb", "privacy", "--lang", "es"]).unwrap();
    assert_eq!(cli.lang.as_deref(), Some("es"));
    let cli = Cli::try_parse_from(["ytthumb", "shell"]).unwrap();
    assert!(cli.lang.is_none());
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["ytthumb"]).is_err());
}
