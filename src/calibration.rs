use std::fmt::Display;

use tracing::debug;

use crate::{
    equation::Equation,
    operator::{Operator, BASIC_OPERATORS, EXTENDED_OPERATORS},
};

/// Sums the targets of the equations that `operators` can satisfy.
///
/// Targets are widened to `i128`, which can't overflow for any file that fits in memory.
pub fn calibration_result(equations: &[Equation], operators: &[Operator]) -> i128 {
    equations
        .iter()
        .filter(|e| e.is_valid(operators))
        .map(|e| i128::from(e.target()))
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationReport {
    pub total: i128,
    pub total_with_concatenation: i128,
}

impl CalibrationReport {
    pub fn compute(equations: &[Equation]) -> Self {
        let total = calibration_result(equations, &BASIC_OPERATORS);
        debug!(total = %total, "computed calibration result with add and multiply");
        let total_with_concatenation = calibration_result(equations, &EXTENDED_OPERATORS);
        debug!(
            total_with_concatenation = %total_with_concatenation,
            "computed calibration result with concatenation"
        );

        Self {
            total,
            total_with_concatenation,
        }
    }
}

impl Display for CalibrationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total calibration result: {}", self.total)?;
        write!(
            f,
            "Total calibration result with concatenation: {}",
            self.total_with_concatenation
        )
    }
}
