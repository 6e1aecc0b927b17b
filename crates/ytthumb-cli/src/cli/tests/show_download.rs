//! Tests for show and download subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_show() {
    match parse(&["ytthumb", "show", "https://youtu.be/abc123"]) {
        CliCommand::Show { url, check } => {
            assert_eq!(url, "https://youtu.be/abc123");
            assert!(!check);
        }
        _ => panic!("expected Show"),
    }
}

#[test]
fn cli_parse_show_check() {
    match parse(&["ytthumb", "show", "https://youtu.be/abc123", "--check"]) {
        CliCommand::Show { check, .. } => assert!(check),
        _ => panic!("expected Show --check"),
    }
}

#[test]
fn cli_parse_download_defaults() {
    match parse(&["ytthumb", "download", "https://youtu.be/abc"]) {
        CliCommand::Download {
            url,
            size,
            all,
            output_dir,
        } => {
            assert_eq!(url, "https://youtu.be/abc");
            assert!(size.is_none());
            assert!(!all);
            assert!(output_dir.is_none());
        }
        _ => panic!("expected Download"),
    }
}

#[test]
fn cli_parse_download_size_and_dir() {
    match parse(&[
        "ytthumb",
        "download",
        "https://youtu.be/abc",
        "--size",
        "480x360",
        "--output-dir",
        "/tmp/thumbs",
    ]) {
        CliCommand::Download {
            size, output_dir, ..
        } => {
            assert_eq!(size.as_deref(), Some("480x360"));
            assert_eq!(
                output_dir.as_deref(),
                Some(std::path::Path::new("/tmp/thumbs"))
            );
        }
        _ => panic!("expected Download with --size"),
    }
}

#[test]
fn cli_parse_download_all() {
    match parse(&["ytthumb", "download", "https://youtu.be/abc", "--all"]) {
        CliCommand::Download { all, size, .. } => {
            assert!(all);
            assert!(size.is_none());
        }
        _ => panic!("expected Download --all"),
    }
}

#[test]
fn cli_download_size_conflicts_with_all() {
    let res = Cli::try_parse_from([
        "ytthumb",
        "download",
        "https://youtu.be/abc",
        "--all",
        "--size",
        "120x90",
    ]);
    assert!(res.is_err());
}

#[test]
fn cli_show_requires_url() {
    assert!(Cli::try_parse_from(["ytthumb", "show"]).is_err());
}
