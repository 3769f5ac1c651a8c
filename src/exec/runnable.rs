use crate::errors::Result;
use crate::eval::ArgumentVector;
use crate::state::ShellState;

/// What the main loop should do once a command has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    Continue,
    Terminate,
}

/// Represents either a builtin (internal command) or an executable (external command)
/// A `Runnable` may be executed by calling its `.run()` method
pub trait Runnable {
    fn run(&self, shell: &mut ShellState, arguments: &ArgumentVector) -> Result<ExecutionStatus>;
}
