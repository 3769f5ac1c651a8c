mod config;
mod shell;

#[cfg(test)]
pub mod test_support;

pub use config::Configuration;
pub use shell::ShellState;
