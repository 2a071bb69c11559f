mod args;
mod commands;
mod output;

pub use args::{Cli, OutputFormat};
pub use commands::run;
