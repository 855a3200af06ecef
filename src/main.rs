use std::process::ExitCode;

use calibration::{CLIArgs, CalibrationReport};
use clap::{error::ErrorKind, CommandFactory, Parser};
use tracing::{debug, error};

fn main() -> ExitCode {
    let args = match CLIArgs::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!(
                "Missing input file path.\n{}",
                CLIArgs::command().render_usage()
            );
            return ExitCode::from(1);
        }
        Err(e) => e.exit(),
    };

    calibration::logging::init_tracing();

    let equations = match calibration::read_equations(&args.input_path) {
        Ok(equations) => equations,
        Err(e) => {
            error!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };
    debug!(count = equations.len(), "loaded equations");

    println!("{}", CalibrationReport::compute(&equations));

    ExitCode::SUCCESS
}
