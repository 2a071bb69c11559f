use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fieldcheck")]
#[command(about = "Run field acceptance health checks against a network device", long_about = None)]
#[command(version)]
pub struct Cli {
    /// IP or hostname to check
    pub node: String,

    /// SSH username
    #[arg(short = 'u', long)]
    pub username: String,

    /// SSH private key file
    #[arg(short = 'k', long)]
    pub keyfile: PathBuf,

    /// SSH port
    #[arg(long, default_value_t = 22)]
    pub port: u16,

    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Treat replies missing an expected envelope element as errors
    /// instead of negative results
    #[arg(long)]
    pub strict_replies: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}
