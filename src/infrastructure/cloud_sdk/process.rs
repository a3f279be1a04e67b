//! Subprocess execution
//!
//! stdout and stderr are drained by two scoped threads so neither pipe can
//! fill up and stall the child. Each line reaches the listener as soon as it
//! is read.

use std::ffi::OsString;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{OutputListener, SdkError, SdkResult};

/// A program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl SdkCommand {
    pub fn new(program: impl Into<PathBuf>, args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Run to completion, streaming every output line to `listener`
    pub fn run(&self, listener: &dyn OutputListener) -> SdkResult<()> {
        debug!("running {}", self);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SdkError::Spawn {
                command: self.to_string(),
                source,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        std::thread::scope(|scope| {
            if let Some(stdout) = stdout {
                scope.spawn(move || forward_lines(stdout, listener));
            }
            if let Some(stderr) = stderr {
                scope.spawn(move || forward_lines(stderr, listener));
            }
        });

        let status = child.wait().map_err(|source| SdkError::Spawn {
            command: self.to_string(),
            source,
        })?;
        if !status.success() {
            return Err(SdkError::CommandFailed {
                command: self.to_string(),
                code: status.code(),
            });
        }
        Ok(())
    }

    /// Run to completion and return stdout; stderr goes to `listener`
    pub fn capture(&self, listener: &dyn OutputListener) -> SdkResult<String> {
        debug!("running {}", self);
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| SdkError::Spawn {
                command: self.to_string(),
                source,
            })?;

        for line in String::from_utf8_lossy(&output.stderr).lines() {
            listener.on_line(line);
        }
        if !output.status.success() {
            return Err(SdkError::CommandFailed {
                command: self.to_string(),
                code: output.status.code(),
            });
        }
        String::from_utf8(output.stdout).map_err(|e| SdkError::InvalidOutput {
            command: self.to_string(),
            message: e.to_string(),
        })
    }
}

impl std::fmt::Display for SdkCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

fn forward_lines(stream: impl Read, listener: &dyn OutputListener) {
    let reader = BufReader::new(stream);
    for line in reader.lines() {
        match line {
            Ok(line) => listener.on_line(line.trim_end_matches('\r')),
            Err(e) => {
                debug!("stopped reading subprocess output: {}", e);
                break;
            }
        }
    }
}
