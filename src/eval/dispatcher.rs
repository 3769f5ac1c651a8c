use log::debug;

use super::{tokenize, ArgumentVector};
use crate::errors::Result;
use crate::exec::{builtin_funcs, Builtin, Executable, ExecutionStatus, Runnable};
use crate::state::ShellState;

/// Represents a collection of builtin commands
/// Allows for command resolution and execution, falling back to external programs
pub struct Dispatcher {
    builtins: Vec<Builtin>,
}

impl Default for Dispatcher {
    /// Initializes the `Dispatcher` with the default shell builtins
    fn default() -> Self {
        let mut dispatcher = Self::new();

        dispatcher.add_builtin("cd", builtin_funcs::change_directory);
        dispatcher.add_builtin("help", builtin_funcs::help);
        dispatcher.add_builtin("exit", builtin_funcs::exit);

        dispatcher
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            builtins: Vec::new(),
        }
    }

    /// Adds a builtin to the `Dispatcher`
    pub fn add_builtin<F>(&mut self, name: &str, function: F)
    where
        F: Fn(&mut ShellState, &ArgumentVector) -> Result<ExecutionStatus> + 'static,
    {
        self.builtins.push(Builtin::new(name, function))
    }

    /// Attempts to locate a builtin command by its exact name
    fn resolve(&self, command_name: &str) -> Option<&Builtin> {
        self.builtins
            .iter()
            .find(|builtin| builtin.name == command_name)
    }

    /// Names of every registered builtin, in registration order
    pub fn builtin_names(&self) -> Vec<String> {
        self.builtins.iter().map(|b| b.name.clone()).collect()
    }

    /// Evaluates and executes a command from a string
    pub fn eval(&self, shell: &mut ShellState, line: &str) -> Result<ExecutionStatus> {
        let args = tokenize(line)?;
        debug!("Tokenized line into {:?}", args.iter().collect::<Vec<_>>());
        self.dispatch(shell, &args)
    }

    /// Resolves and dispatches a command to the appropriate builtin or executable
    fn dispatch(&self, shell: &mut ShellState, args: &ArgumentVector) -> Result<ExecutionStatus> {
        // An empty line is not an error, the shell simply asks again
        let Some(command_name) = args.command() else {
            return Ok(ExecutionStatus::Continue);
        };

        if let Some(builtin) = self.resolve(command_name) {
            debug!("Running builtin {}", command_name);
            builtin.run(shell, args)
        } else {
            Executable::new(command_name).run(shell, args)
        }
    }
}
