//! Tests for command-line argument handling and configuration wiring.

use std::path::Path;

use clap::{CommandFactory, Parser};
use kunai_test::component::app::command::Cli;
use kunai_test::component::app::config::{
    self, LoggingConfig, OutputConfig, ParserConfig, Settings,
};

/// ## Summary
/// Test that each documented command is accepted.
#[test_log::test]
fn documented_commands_parse() {
    let help = Cli::command().render_long_help().to_string();
    for name in ["split", "parse", "normalize"] {
        assert!(help.contains(name));
        let cli = Cli::try_parse_from(["kunai", name, "contacts.vcf"]).unwrap();
        assert_eq!(cli.command.path(), Path::new("contacts.vcf"));
    }
}

/// ## Summary
/// Test that a missing file argument is a usage error with exit status 2.
#[test_log::test]
fn missing_file_is_usage_error() {
    let err = Cli::try_parse_from(["kunai", "split"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.render().to_string().contains("<FILE>"));
}

/// ## Summary
/// Test that the configured retry limit reaches the parser.
#[test_log::test]
fn configured_parser_honours_retry_limit() {
    let settings = Settings {
        logging: LoggingConfig {
            level: "warn".to_string(),
        },
        parser: ParserConfig {
            quote_retry_limit: 1,
        },
        output: OutputConfig { pretty: false },
    };
    let record = config::parser(&settings)
        .parse("X-A;LABEL=\"a:b:c\":v\n", "", "")
        .unwrap();

    assert_eq!(record.first_text(&"X-A".into()), Some("c\":v"));
}
