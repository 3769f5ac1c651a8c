use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::process::{Command as Process, ExitStatus};

use log::{debug, warn};

use super::runnable::{ExecutionStatus, Runnable};
use crate::errors::{Result, ShellError};
use crate::eval::ArgumentVector;
use crate::state::ShellState;

/// How a child process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    Exited(i32),
    Signaled(i32),
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::Signaled(signal);
            }
        }

        // * Without a code or a signal there is nothing more specific to report
        Self::Exited(-1)
    }
}

impl Display for ChildExit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ChildExit::Exited(code) => write!(f, "exited with code {}", code),
            ChildExit::Signaled(signal) => write!(f, "was terminated by signal {}", signal),
        }
    }
}

/// Represents an external program, found through the PATH when it is run
pub struct Executable {
    name: String,
}

impl Executable {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    fn launch_error(&self, source: io::Error) -> ShellError {
        match source.kind() {
            io::ErrorKind::NotFound => ShellError::CommandNotFound(self.name.clone()),
            _ => ShellError::Launch {
                command: self.name.clone(),
                source,
            },
        }
    }
}

impl Runnable for Executable {
    // * The child inherits the environment, the working directory and all three standard streams
    fn run(&self, shell: &mut ShellState, arguments: &ArgumentVector) -> Result<ExecutionStatus> {
        // Anything the shell printed so far has to come out before the child's own output
        if let Err(e) = shell.stdout().flush() {
            warn!("Failed to flush stdout before running {}: {}", self.name, e);
        }

        // * `std::process::Command` passes the program name as the zeroth argument itself,
        // * so only the arguments after it are handed over
        let mut child = Process::new(&self.name)
            .args(arguments.args())
            .spawn()
            .map_err(|e| self.launch_error(e))?;

        let pid = child.id();
        debug!("Spawned {} as process {}", self.name, pid);

        // * Waiting only returns once the child has exited or was killed by a signal,
        // * a stopped child keeps the shell blocked
        let status = child.wait().map_err(|source| ShellError::Wait {
            command: self.name.clone(),
            source,
        })?;

        debug!("{} (process {}) {}", self.name, pid, ChildExit::from(status));
        Ok(ExecutionStatus::Continue)
    }
}
