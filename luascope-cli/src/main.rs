mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Show luascope info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("luascope", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Decode {
            path,
            format,
            offset,
            count,
        } => commands::decode::run(path, format, offset.as_deref(), *count, &cli.global),
        Command::Encode {
            format,
            null,
            text,
        } => commands::encode::run(format, *null, text.as_deref(), &cli.global),
    }
}
