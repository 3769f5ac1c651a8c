/*
A quick write-up on tsh builtins:
Builtins are commands that are included with the shell and run inside the shell process itself.
`cd` has to be a builtin, because a child process can only change its own working directory.
`exit` has to be a builtin, because only the shell can decide to stop reading input.
`help` lists every builtin, so it reads the names from the shell state.
 */

use std::env;
use std::io::Write;
use std::path::PathBuf;

use log::debug;

use crate::errors::{Result, ShellError};
use crate::eval::ArgumentVector;
use crate::exec::runnable::ExecutionStatus;
use crate::state::ShellState;

pub fn change_directory(_shell: &mut ShellState, args: &ArgumentVector) -> Result<ExecutionStatus> {
    // * Only the first argument is used, anything after it is ignored
    let Some(path) = args.arg(0) else {
        return Err(ShellError::MissingArgument {
            command: "cd",
            expected: "path",
        });
    };

    env::set_current_dir(path).map_err(|source| ShellError::ChangeDirectory {
        path: PathBuf::from(path),
        source,
    })?;

    debug!("Changed working directory to {}", path);
    Ok(ExecutionStatus::Continue)
}

pub fn help(shell: &mut ShellState, _args: &ArgumentVector) -> Result<ExecutionStatus> {
    let mut text = format!(
        "tsh v{}\nType a command name and its arguments, then hit Enter to run it.\n",
        env!("CARGO_PKG_VERSION")
    );
    text.push_str("The following commands are built in:\n");
    for name in &shell.builtin_names {
        text.push_str(&format!("  {}\n", name));
    }
    text.push_str("Use the man command for information on other programs.\n");

    let stdout = shell.stdout();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;

    Ok(ExecutionStatus::Continue)
}

pub fn exit(_shell: &mut ShellState, _args: &ArgumentVector) -> Result<ExecutionStatus> {
    Ok(ExecutionStatus::Terminate)
}
