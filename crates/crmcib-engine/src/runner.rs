//! Command runner abstraction for the CRM utility
//!
//! `CommandRunner` executes one fixed command line, feeding it `stdin`.
//! `CrmCommand` is the production implementation that spawns the process.
//! `ScriptedRunner` is the test double that records payloads and replays
//! queued responses.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::io::Write;
use std::process::{Command, Stdio};
use std::rc::Rc;

/// A command that exited unsuccessfully or could not be started
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    /// `None` if the process never ran or was killed by a signal
    pub exit_code: Option<i32>,
    pub stderr: String,
}

impl CommandFailure {
    pub fn new(exit_code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// `exit code <n>:\n<stderr>`, or just stderr when there is no code
    pub fn describe(&self) -> String {
        match self.exit_code {
            Some(code) => format!("exit code {}:\n{}", code, self.stderr),
            None => self.stderr.clone(),
        }
    }
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl std::error::Error for CommandFailure {}

/// Trait for executing a CRM command with piped input
pub trait CommandRunner {
    /// Run the command with `stdin` as its input, returning its stdout
    fn execute(&self, stdin: &str) -> Result<String, CommandFailure>;
}

/// Production runner that spawns `executable arguments...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrmCommand {
    executable: String,
    arguments: Vec<String>,
}

impl CrmCommand {
    pub fn new(executable: impl Into<String>, arguments: &[&str]) -> Self {
        Self {
            executable: executable.into(),
            arguments: arguments.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// `<utility> --query`: fetch the whole CIB
    pub fn query(utility: &str) -> Self {
        Self::new(utility, &["--query"])
    }

    /// `<utility> --replace --xml-pipe`: replace the CIB with stdin
    pub fn replace(utility: &str) -> Self {
        Self::new(utility, &["--replace", "--xml-pipe"])
    }

    /// `<utility> --modify --allow-create --xml-pipe`: merge a fragment
    pub fn create(utility: &str) -> Self {
        Self::new(utility, &["--modify", "--allow-create", "--xml-pipe"])
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

impl CommandRunner for CrmCommand {
    fn execute(&self, stdin: &str) -> Result<String, CommandFailure> {
        let spawn_failure = |e: std::io::Error| {
            CommandFailure::new(None, format!("Failed to execute {}: {}", self.executable, e))
        };

        let mut child = Command::new(&self.executable)
            .args(&self.arguments)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_failure)?;

        // the pipe is dropped before waiting so the child sees EOF
        let written = match child.stdin.take() {
            Some(mut pipe) => pipe.write_all(stdin.as_bytes()),
            None => Ok(()),
        };

        let output = child.wait_with_output().map_err(spawn_failure)?;
        if !output.status.success() {
            return Err(CommandFailure::new(
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).to_string(),
            ));
        }
        written.map_err(spawn_failure)?;
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[derive(Debug, Default)]
struct Script {
    responses: VecDeque<Result<String, CommandFailure>>,
    fallback: Option<Result<String, CommandFailure>>,
    payloads: Vec<String>,
}

/// Test-double runner that records every stdin payload
///
/// Responses are replayed in order; once the queue is empty the repeating
/// response is returned (an empty stdout if none was set). Clones share the
/// same script, so a test can keep a handle after boxing one into an accessor.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRunner {
    script: Rc<RefCell<Script>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(responses: Vec<Result<String, CommandFailure>>) -> Self {
        let runner = Self::new();
        runner.script.borrow_mut().responses = responses.into();
        runner
    }

    /// Runner that answers every call with the same stdout
    pub fn always(stdout: impl Into<String>) -> Self {
        Self::new().repeating(Ok(stdout.into()))
    }

    /// Answer with `response` once the queue is exhausted
    pub fn repeating(self, response: Result<String, CommandFailure>) -> Self {
        self.script.borrow_mut().fallback = Some(response);
        self
    }

    pub fn push(&self, response: Result<String, CommandFailure>) {
        self.script.borrow_mut().responses.push_back(response);
    }

    /// Stdin payloads received so far, oldest first
    pub fn payloads(&self) -> Vec<String> {
        self.script.borrow().payloads.clone()
    }

    pub fn call_count(&self) -> usize {
        self.script.borrow().payloads.len()
    }
}

impl CommandRunner for ScriptedRunner {
    fn execute(&self, stdin: &str) -> Result<String, CommandFailure> {
        let mut script = self.script.borrow_mut();
        script.payloads.push(stdin.to_string());
        match script.responses.pop_front() {
            Some(response) => response,
            None => script.fallback.clone().unwrap_or_else(|| Ok(String::new())),
        }
    }
}
