//! CLI argument routing tests.
//!
//! These check that the public `Cli` parser maps user input onto the
//! commands and arguments the memory operations expect.

use chrono::NaiveDate;
use clap::Parser;
use secondbrain_cli::commands::{config::ConfigCommand, parse_date};
use secondbrain_cli::{Cli, Commands};

#[test]
fn test_remember_routes_image_and_summary() {
    let cli = Cli::try_parse_from([
        "secondbrain",
        "remember",
        "parking spot",
        "--image",
        "/tmp/spot.png",
        "--remind-in",
        "3",
        "--summarize",
    ])
    .unwrap();

    match cli.command {
        Commands::Remember(args) => {
            assert_eq!(args.text, "parking spot");
            assert_eq!(args.image.as_deref(), Some(std::path::Path::new("/tmp/spot.png")));
            assert_eq!(args.remind_in, Some(3));
            assert!(args.summarize);

            let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
            assert_eq!(
                args.reminder_date(today, 7),
                NaiveDate::from_ymd_opt(2025, 1, 4)
            );
        }
        _ => panic!("Expected Remember command"),
    }
}

#[test]
fn test_search_builds_date_filtered_query() {
    let cli = Cli::try_parse_from([
        "secondbrain",
        "search",
        "milk",
        "--due-by",
        "2025-01-15",
    ])
    .unwrap();

    match cli.command {
        Commands::Search(args) => {
            let query = args.to_query(10);
            assert_eq!(query.text, "milk");
            assert_eq!(query.due_by, NaiveDate::from_ymd_opt(2025, 1, 15));
            assert_eq!(query.limit, 10);
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_search_due_by_today() {
    let cli = Cli::try_parse_from(["secondbrain", "search", "--due-by", "today"]).unwrap();
    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.due_by, Some(parse_date("today").unwrap()));
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_verbose_counts() {
    let cli = Cli::try_parse_from(["secondbrain", "-vv", "list"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.command, Commands::List));
}

#[test]
fn test_config_subcommands() {
    for (arg, expected) in [("show", "show"), ("path", "path"), ("validate", "validate")] {
        let cli = Cli::try_parse_from(["secondbrain", "config", arg]).unwrap();
        let Commands::Config(args) = cli.command else {
            panic!("Expected Config command");
        };
        let name = match args.command {
            ConfigCommand::Show => "show",
            ConfigCommand::Path => "path",
            ConfigCommand::Validate => "validate",
            ConfigCommand::Init { .. } => "init",
        };
        assert_eq!(name, expected);
    }
}

#[test]
fn test_unknown_command_is_rejected() {
    assert!(Cli::try_parse_from(["secondbrain", "forget", "everything"]).is_err());
}
