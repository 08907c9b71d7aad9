//! rinki CLI entry point: parses arguments, sets up logging and dispatches.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use rinki_cli::{cli, commands, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let mut stdout = std::io::stdout().lock();
    match &args.command {
        cli::Command::Print(print_args) => commands::print_execute(print_args, &mut stdout)?,
        cli::Command::Rule(rule_args) => commands::rule_execute(rule_args, &mut stdout)?,
    }
    stdout.flush()?;
    Ok(())
}
