use crate::args::{Cli, OutputFormat};
use crate::output;
use anyhow::{bail, Result};
use fieldcheck_engine::{run_field_tests, RunnerOptions};
use fieldcheck_types::DeviceConfig;

pub fn run(cli: Cli) -> Result<()> {
    if !cli.keyfile.is_file() {
        bail!("keyfile not found: {}", cli.keyfile.display());
    }

    let config =
        DeviceConfig::new(cli.node, cli.username, cli.keyfile).with_port(cli.port);
    let options = RunnerOptions {
        strict_replies: cli.strict_replies,
    };

    let report = run_field_tests(config, options)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain => output::print_report(&report),
    }

    Ok(())
}
