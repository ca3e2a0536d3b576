use super::super::Cli;
use super::{parse, CliCommand};
use clap::Parser;
use clap_complete::Shell;

#[test]
fn cli_parse_detect() {
    match parse(&["s3d", "detect", "s3.amazonaws.com/b/k"]) {
        CliCommand::Detect {
            candidates,
            pwd,
            json,
        } => {
            assert_eq!(candidates, vec!["s3.amazonaws.com/b/k".to_string()]);
            assert_eq!(pwd, "");
            assert!(!json);
        }
        _ => panic!("expected Detect"),
    }
}

#[test]
fn cli_parse_detect_many_with_flags() {
    match parse(&["s3d", "detect", "--json", "--pwd", "/srv", "a", "b"]) {
        CliCommand::Detect {
            candidates,
            pwd,
            json,
        } => {
            assert_eq!(candidates.len(), 2);
            assert_eq!(pwd, "/srv");
            assert!(json);
        }
        _ => panic!("expected Detect"),
    }
}

#[test]
fn cli_parse_detect_requires_candidate() {
    assert!(Cli::try_parse_from(["s3d", "detect"]).is_err());
}

#[test]
fn cli_parse_explain() {
    match parse(&["s3d", "explain", "x.amazonaws.com/k"]) {
        CliCommand::Explain { candidate } => assert_eq!(candidate, "x.amazonaws.com/k"),
        _ => panic!("expected Explain"),
    }
}

#[test]
fn cli_parse_batch_defaults_to_stdin() {
    match parse(&["s3d", "batch"]) {
        CliCommand::Batch {
            path,
            json,
            only_matched,
        } => {
            assert_eq!(path, "-");
            assert!(!json);
            assert!(!only_matched);
        }
        _ => panic!("expected Batch"),
    }
}

#[test]
fn cli_parse_batch_file_only_matched() {
    match parse(&["s3d", "batch", "urls.txt", "--only-matched"]) {
        CliCommand::Batch {
            path, only_matched, ..
        } => {
            assert_eq!(path, "urls.txt");
            assert!(only_matched);
        }
        _ => panic!("expected Batch"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["s3d", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    assert!(matches!(parse(&["s3d", "man"]), CliCommand::Man));
}

#[test]
fn cli_parse_unknown_subcommand_fails() {
    assert!(Cli::try_parse_from(["s3d", "fetch"]).is_err());
}
