use log::{debug, info};

use crate::errors::Result;
use crate::eval::{Dispatcher, LineSource};
use crate::exec::ExecutionStatus;
use crate::state::ShellState;

/// Ties the shell state to a dispatcher and drives the read-evaluate loop
pub struct Shell {
    pub state: ShellState,
    dispatcher: Dispatcher,
}

impl Shell {
    pub fn new(mut state: ShellState, dispatcher: Dispatcher) -> Self {
        state.builtin_names = dispatcher.builtin_names();
        Self { state, dispatcher }
    }

    /// Evaluates a single line of input
    pub fn eval(&mut self, line: &str) -> Result<ExecutionStatus> {
        self.dispatcher.eval(&mut self.state, line)
    }

    /// Repeatedly prompts for lines and executes them
    /// Returns once input runs out or `exit` is run, or with the first fatal error
    pub fn run(&mut self, source: &mut dyn LineSource) -> Result<()> {
        loop {
            let prompt = self.state.generate_prompt();
            let Some(line) = source.read_line(&prompt)? else {
                info!("End of input reached");
                return Ok(());
            };

            match self.eval(&line) {
                Ok(ExecutionStatus::Continue) => (),
                Ok(ExecutionStatus::Terminate) => {
                    debug!("Exit requested");
                    return Ok(());
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => self.state.report(&e),
            }
        }
    }
}
