//! Tests for browse, completions, man and global options.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_browse() {
    match parse(&["choiceviz", "browse"]) {
        CliCommand::Browse { endpoint } => assert!(endpoint.is_none()),
        _ => panic!("expected Browse"),
    }
}

#[test]
fn cli_parse_browse_endpoint() {
    match parse(&["choiceviz", "browse", "--endpoint", "https://api.example.com/g"]) {
        CliCommand::Browse { endpoint } => {
            assert_eq!(endpoint.as_deref(), Some("https://api.example.com/g"))
        }
        _ => panic!("expected Browse"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["choiceviz", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    assert!(matches!(parse(&["choiceviz", "man"]), CliCommand::Man));
}

#[test]
fn cli_global_config_after_subcommand() {
    let cli = Cli::try_parse_from(["choiceviz", "url", "--config", "/etc/choiceviz.toml"]).unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/etc/choiceviz.toml"))
    );
}

#[test]
fn cli_command_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
