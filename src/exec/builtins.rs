pub mod command;
pub mod functions;
