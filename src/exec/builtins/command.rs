use crate::errors::Result;
use crate::eval::ArgumentVector;
use crate::exec::runnable::{ExecutionStatus, Runnable};
use crate::state::ShellState;

/// Represents a builtin function and the name it is invoked by
pub struct Builtin {
    pub name: String,
    #[allow(clippy::type_complexity)]
    function: Box<dyn Fn(&mut ShellState, &ArgumentVector) -> Result<ExecutionStatus>>,
}

impl Builtin {
    pub fn new<F>(name: &str, function: F) -> Self
    where
        F: Fn(&mut ShellState, &ArgumentVector) -> Result<ExecutionStatus> + 'static,
    {
        Self {
            name: name.to_string(),
            function: Box::new(function),
        }
    }
}

impl Runnable for Builtin {
    fn run(&self, shell: &mut ShellState, arguments: &ArgumentVector) -> Result<ExecutionStatus> {
        (self.function)(shell, arguments)
    }
}
