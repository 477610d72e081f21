// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tudor Bosman

//! zcheck CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use zcheck::cli::{Cli, Command};
use zcheck::error::ExitCode;

mod cmd_check;

fn init_logging() {
    let filter = EnvFilter::try_from_env("ZCHECK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("zcheck: {}", e);
            match e.downcast_ref::<zcheck::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::Error,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Healthy)
        }
        Some(Command::Check(args)) => cmd_check::run(&cli, args),
    }
}
