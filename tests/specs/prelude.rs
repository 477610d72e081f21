//! Test helpers for behavioral specifications.
//!
//! Provides helpers for running the zcheck binary against a fake `zpool`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns a Command configured to run the zcheck binary, isolated from
/// the caller's zcheck environment variables.
pub fn zcheck_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("zcheck"));
    cmd.env_remove("ZCHECK_CONFIG")
        .env_remove("ZCHECK_ZPOOL")
        .env_remove("ZCHECK_LOG");
    cmd
}

/// Write an executable shell script standing in for `zpool`.
///
/// The script prints `output` verbatim and exits with `status`. Its
/// arguments are appended to `args.log` in the same directory.
#[cfg(unix)]
pub fn fake_zpool(dir: &Path, output: &str, status: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("zpool");
    let body = format!(
        "#!/bin/sh\necho \"$@\" >> \"{log}\"\nprintf '%b' '{output}'\nexit {status}\n",
        log = dir.join("args.log").display(),
        output = output.replace('\t', "\\t").replace('\n', "\\n"),
    );
    std::fs::write(&script, body).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}

/// Arguments the fake zpool was invoked with, one invocation per line.
pub fn zpool_calls(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("args.log")).unwrap_or_default()
}
