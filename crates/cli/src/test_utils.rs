// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tudor Bosman

//! Shared unit test utilities.
//!
//! Provides a scripted [`CommandRunner`] so `zfs`/`zpool` interactions can
//! be tested without the real tools.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::zfs::{CommandRunner, command_line};

enum Response {
    Output(Vec<String>),
    Failure(String),
}

/// Command runner that replays canned responses keyed by command line.
///
/// Unscripted commands fail as if the program did not exist.
#[derive(Default)]
pub struct FakeRunner {
    responses: HashMap<String, Response>,
    calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `command` to succeed with the given stdout lines.
    pub fn with_output(mut self, command: &str, lines: &[&str]) -> Self {
        let lines = lines.iter().map(|l| l.to_string()).collect();
        self.responses
            .insert(command.to_string(), Response::Output(lines));
        self
    }

    /// Script `command` to exit with status 1 and the given stderr.
    pub fn with_failure(mut self, command: &str, stderr: &str) -> Self {
        self.responses
            .insert(command.to_string(), Response::Failure(stderr.to_string()));
        self
    }

    /// Command lines executed so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn execute(&self, program: &str, args: &[String]) -> Result<Vec<String>> {
        let command = command_line(program, args);
        self.calls.borrow_mut().push(command.clone());

        match self.responses.get(&command) {
            Some(Response::Output(lines)) => Ok(lines.clone()),
            Some(Response::Failure(stderr)) => Err(Error::Command {
                command,
                status: "exit status: 1".to_string(),
                stderr: stderr.clone(),
            }),
            None => Err(Error::Spawn {
                command,
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }
}
