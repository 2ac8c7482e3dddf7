use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_run_defaults() {
    let cli = parse(&["abr", "run"]);
    assert!(cli.config.is_none());
    match cli.command {
        CliCommand::Run { data_dir, threads } => {
            assert_eq!(data_dir, std::path::PathBuf::from("data"));
            assert!(threads.is_none());
        }
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_with_overrides() {
    let cli = parse(&[
        "abr",
        "run",
        "--data-dir",
        "/tmp/accounts",
        "--threads",
        "8",
    ]);
    match cli.command {
        CliCommand::Run { data_dir, threads } => {
            assert_eq!(data_dir, std::path::PathBuf::from("/tmp/accounts"));
            assert_eq!(threads, Some(8));
        }
        _ => panic!("expected Run with overrides"),
    }
}

#[test]
fn cli_parse_global_config_flag() {
    let cli = parse(&["abr", "--config", "/etc/abr.toml", "check"]);
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/etc/abr.toml"))
    );
    assert!(matches!(cli.command, CliCommand::Check { .. }));
}

#[test]
fn cli_parse_check_defaults() {
    let cli = parse(&["abr", "check"]);
    match cli.command {
        CliCommand::Check { data_dir } => {
            assert_eq!(data_dir, std::path::PathBuf::from("data"));
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_config() {
    let cli = parse(&["abr", "config"]);
    assert!(matches!(cli.command, CliCommand::Config));
}

#[test]
fn cli_rejects_zero_threads_value_at_run_time() {
    // clap accepts the value; run_batch rejects it. Parsing must still work.
    let cli = parse(&["abr", "run", "--threads", "0"]);
    match cli.command {
        CliCommand::Run { threads, .. } => assert_eq!(threads, Some(0)),
        _ => panic!("expected Run"),
    }
}
