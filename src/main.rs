mod errors;
mod eval;
mod exec;
mod shell;
mod state;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use log::{info, warn};

use eval::{Dispatcher, LineEditor, LineSource, StreamReader};
use shell::Shell;
use state::{Configuration, ShellState};

fn main() -> ExitCode {
    // Logging stays quiet unless RUST_LOG asks for more
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // The Configuration type holds every user-adjustable setting, read from the environment
    let config = Configuration::from_env();
    let interactive = io::stdin().is_terminal();

    // The LineSource is responsible for showing the prompt and reading lines of input,
    // either through the line editor or straight from the standard input stream
    let mut line_source = select_line_source(&config, interactive);

    // The ShellState type stores the configuration and the streams builtins write to
    let state = ShellState::new(
        config,
        interactive,
        Box::new(io::stdout()),
        Box::new(io::stderr()),
    );
    // The Dispatcher type is responsible for resolving command names to builtins,
    // or executables if needed, and then invoking them with the given arguments
    let mut shell = Shell::new(state, Dispatcher::default());

    info!("Starting tsh (interactive: {})", interactive);
    match shell.run(line_source.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            shell.state.report(&e);
            ExitCode::FAILURE
        }
    }
}

fn select_line_source(config: &Configuration, interactive: bool) -> Box<dyn LineSource> {
    if interactive && config.line_editing {
        match LineEditor::new() {
            Ok(editor) => return Box::new(editor),
            Err(e) => warn!("Line editor unavailable, reading plain input instead: {}", e),
        }
    }

    Box::new(StreamReader::new(io::stdin().lock(), io::stdout()))
}
