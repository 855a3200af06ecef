use std::path::PathBuf;

use clap::Parser;

pub mod calibration;
pub mod equation;
pub mod evaluator;
pub mod input;
pub mod logging;
pub mod operator;

pub use calibration::{calibration_result, CalibrationReport};
pub use equation::{Equation, ParseEquationError};
pub use evaluator::reachable_values;
pub use input::{parse_equations, read_equations};
pub use operator::{Operator, BASIC_OPERATORS, EXTENDED_OPERATORS};

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}
