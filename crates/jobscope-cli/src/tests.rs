use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["jobscope-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_collect_without_overrides() {
    let cli = Cli::try_parse_from(["jobscope-cli", "collect"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Collect {
            max_pages: None,
            max_records: None
        })
    ));
}

#[test]
fn parses_collect_caps() {
    let cli = Cli::try_parse_from([
        "jobscope-cli",
        "collect",
        "--max-pages",
        "3",
        "--max-records",
        "25",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Collect {
            max_pages: Some(3),
            max_records: Some(25)
        })
    ));
}

#[test]
fn collect_rejects_negative_page_count() {
    assert!(Cli::try_parse_from(["jobscope-cli", "collect", "--max-pages", "-1"]).is_err());
}

#[test]
fn parses_analyze_defaults() {
    let cli = Cli::try_parse_from(["jobscope-cli", "analyze"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Analyze {
            output: None,
            no_charts: false
        })
    ));
}

#[test]
fn parses_analyze_output_and_no_charts() {
    let cli = Cli::try_parse_from([
        "jobscope-cli",
        "analyze",
        "--output",
        "out/listings.csv",
        "--no-charts",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Analyze {
            output: Some(ref p),
            no_charts: true
        }) if p == &PathBuf::from("out/listings.csv")
    ));
}

#[test]
fn parses_db_init_command() {
    let cli = Cli::try_parse_from(["jobscope-cli", "db", "init"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Init
        })
    ));
}

#[test]
fn parses_db_ping_command() {
    let cli = Cli::try_parse_from(["jobscope-cli", "db", "ping"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Ping
        })
    ));
}

#[test]
fn db_requires_a_subcommand() {
    assert!(Cli::try_parse_from(["jobscope-cli", "db"]).is_err());
}
