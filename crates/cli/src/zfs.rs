// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tudor Bosman

//! ZFS utilities, implemented by executing `zfs` and `zpool`.

use std::collections::BTreeMap;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Default `zfs` program.
pub const DEFAULT_ZFS: &str = "zfs";

/// Default `zpool` program.
pub const DEFAULT_ZPOOL: &str = "zpool";

/// Runs an external command and returns its stdout, one element per line.
pub trait CommandRunner {
    fn execute(&self, program: &str, args: &[String]) -> Result<Vec<String>>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn execute(&self, program: &str, args: &[String]) -> Result<Vec<String>> {
        (**self).execute(program, args)
    }
}

/// Runs commands as child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn execute(&self, program: &str, args: &[String]) -> Result<Vec<String>> {
        let command = command_line(program, args);
        tracing::debug!("running {}", command);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::Command {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(String::from)
            .collect())
    }
}

/// Render a program and its arguments for diagnostics.
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Phrase for N counts of a noun: `noun_count(2, "disk", None)` → `"2 disks"`.
///
/// Without an explicit plural, an "s" is appended to the singular.
pub fn noun_count(n: usize, singular: &str, plural: Option<&str>) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        match plural {
            Some(plural) => format!("{n} {plural}"),
            None => format!("{n} {singular}s"),
        }
    }
}

/// Front end to the `zfs` and `zpool` commands.
#[derive(Debug, Clone)]
pub struct Zfs<R> {
    runner: R,
    zfs: String,
    zpool: String,
}

impl<R: CommandRunner> Zfs<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            zfs: DEFAULT_ZFS.to_string(),
            zpool: DEFAULT_ZPOOL.to_string(),
        }
    }

    /// Override the `zfs` program.
    pub fn with_zfs(mut self, program: impl Into<String>) -> Self {
        self.zfs = program.into();
        self
    }

    /// Override the `zpool` program.
    pub fn with_zpool(mut self, program: impl Into<String>) -> Self {
        self.zpool = program.into();
        self
    }

    fn run_zfs<I, S>(&self, args: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        self.runner.execute(&self.zfs, &args)
    }

    fn run_zpool<I, S>(&self, args: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        self.runner.execute(&self.zpool, &args)
    }

    /// List all ZFS filesystems.
    pub fn list_filesystems(&self) -> Result<Vec<String>> {
        self.run_zfs(["list", "-tfilesystem", "-H", "-oname"])
    }

    /// Retrieve a ZFS property on a filesystem.
    pub fn get_property(&self, fs: &str, property: &str) -> Result<String> {
        let args = ["get", "-H", "-ovalue", property, fs];
        let lines = self.run_zfs(args)?;
        first_line(&self.zfs, &args, lines)
    }

    /// Create a snapshot `fs@snapshot`.
    pub fn create_snapshot(&self, fs: &str, snapshot: &str) -> Result<()> {
        self.run_zfs(["snapshot".to_string(), format!("{fs}@{snapshot}")])?;
        Ok(())
    }

    /// Destroy the snapshot `fs@snapshot`.
    pub fn delete_snapshot(&self, fs: &str, snapshot: &str) -> Result<()> {
        self.run_zfs(["destroy".to_string(), format!("{fs}@{snapshot}")])?;
        Ok(())
    }

    /// Get the health of a pool, e.g. `ONLINE`.
    pub fn pool_health(&self, pool: &str) -> Result<String> {
        let args = ["list", "-H", "-ohealth", pool];
        let lines = self.run_zpool(args)?;
        first_line(&self.zpool, &args, lines)
    }

    /// Whether a pool is online.
    pub fn pool_is_online(&self, pool: &str) -> Result<bool> {
        Ok(self.pool_health(pool)? == "ONLINE")
    }

    /// Health of the given pools, or of every pool when `pools` is empty.
    pub fn list_pool_health(&self, pools: &[String]) -> Result<BTreeMap<String, String>> {
        let mut args = vec![
            "list".to_string(),
            "-H".to_string(),
            "-oname,health".to_string(),
        ];
        args.extend(pools.iter().cloned());

        let lines = self.runner.execute(&self.zpool, &args)?;
        let mut health = BTreeMap::new();
        for line in lines {
            match line.split_once('\t') {
                Some((name, state)) if !state.contains('\t') => {
                    health.insert(name.to_string(), state.to_string());
                }
                _ => {
                    return Err(Error::UnexpectedOutput {
                        command: command_line(&self.zpool, &args),
                        output: line,
                    });
                }
            }
        }
        Ok(health)
    }
}

fn first_line(program: &str, args: &[&str], lines: Vec<String>) -> Result<String> {
    lines.into_iter().next().ok_or_else(|| {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        Error::UnexpectedOutput {
            command: command_line(program, &args),
            output: String::new(),
        }
    })
}

#[cfg(test)]
#[path = "zfs_tests.rs"]
mod tests;
