use std::io::Write;

use clap::Parser;
use kunai_app::command::{Cli, Command};
use kunai_app::config;
use kunai_app::import;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let command = Cli::parse().command;

    let config = config::load()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    tracing::debug!(command = ?command, "Running command");

    let blob = std::fs::read_to_string(command.path())?;
    let parser = config::parser(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Split { .. } => {
            let count = import::split(&parser, &blob, &mut out)?;
            tracing::info!(count, "Split finished");
        }
        Command::Parse { .. } => {
            import::parse(&parser, &blob, config.output.pretty, &mut out)?;
        }
        Command::Normalize { .. } => {
            import::normalize(&parser, &blob, &mut out)?;
        }
    }

    out.flush()?;

    Ok(())
}
