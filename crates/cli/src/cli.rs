// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tudor Bosman

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

/// Check ZFS pool health and print a summary report
#[derive(Parser)]
#[command(name = "zcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "ZCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check pool health
    Check(CheckArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Pools to check
    #[arg(value_name = "POOL")]
    pub pools: Vec<String>,

    /// Check health for all pools
    #[arg(long)]
    pub all: bool,

    /// Allow pools in REMOVED status (removable media)
    #[arg(long)]
    pub removable: bool,

    /// zpool program to run
    #[arg(long, value_name = "PATH", env = "ZCHECK_ZPOOL")]
    pub zpool: Option<String>,
}

/// What a check invocation should do, after merging config and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckPlan {
    /// Pools to query; empty means every pool.
    pub pools: Vec<String>,
    pub removable: bool,
    pub zpool: String,
}

impl CheckArgs {
    /// Merge flags over config.
    ///
    /// Positional pools replace configured pools; boolean flags can only
    /// turn options on. Returns `None` when there is nothing to check.
    pub fn plan(&self, config: &Config) -> Option<CheckPlan> {
        let all = self.all || config.check.all;
        let pools = if all {
            Vec::new()
        } else if !self.pools.is_empty() {
            self.pools.clone()
        } else if !config.check.pools.is_empty() {
            config.check.pools.clone()
        } else {
            return None;
        };

        let zpool = self
            .zpool
            .clone()
            .or_else(|| config.commands.zpool.clone())
            .unwrap_or_else(|| crate::zfs::DEFAULT_ZPOOL.to_string());

        Some(CheckPlan {
            pools,
            removable: self.removable || config.check.removable,
            zpool,
        })
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
