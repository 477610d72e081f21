// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tudor Bosman

//! Check command implementation.

use zcheck::cli::{CheckArgs, Cli};
use zcheck::config;
use zcheck::error::ExitCode;
use zcheck::health;
use zcheck::zfs::{SystemRunner, Zfs, noun_count};

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let config = match config::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(&path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            config::Config::default()
        }
    };

    let Some(plan) = args.plan(&config) else {
        tracing::debug!("no pools to check");
        return Ok(ExitCode::Healthy);
    };

    if plan.pools.is_empty() {
        tracing::debug!("checking all pools");
    } else {
        tracing::debug!("checking {}", noun_count(plan.pools.len(), "pool", None));
    }

    let zfs = Zfs::new(SystemRunner).with_zpool(&plan.zpool);
    let report = health::check_pools(&zfs, &plan.pools, plan.removable)?;

    report.log_summary();
    println!("Summary: {}", report.summary());

    Ok(report.exit_code())
}
