use std::str::FromStr;

use thiserror::Error;

use crate::{evaluator, operator::Operator};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseEquationError {
    #[error("Can't find separator(:) in equation text that separates the target and components.")]
    MissingColon,
    #[error("Invalid target text({0}).")]
    InvalidTarget(String),
    #[error("Invalid component text({0}).")]
    InvalidComponent(String),
    #[error("Equation has no components.")]
    NoComponents,
}

/// A calibration equation: a target value and the components that may combine into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    target: i64,
    components: Vec<i64>,
}

impl Equation {
    pub fn new(target: i64, components: Vec<i64>) -> Result<Self, ParseEquationError> {
        if components.is_empty() {
            return Err(ParseEquationError::NoComponents);
        }

        Ok(Self { target, components })
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn components(&self) -> &[i64] {
        &self.components
    }

    /// Checks whether some left-to-right placement of `operators` between the
    /// components produces the target.
    pub fn is_valid(&self, operators: &[Operator]) -> bool {
        evaluator::reachable_values(&self.components, operators).contains(&self.target)
    }
}

impl TryFrom<&str> for Equation {
    type Error = ParseEquationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (target_text, components_text) = value
            .split_once(':')
            .ok_or(ParseEquationError::MissingColon)?;
        let target = target_text
            .trim()
            .parse::<i64>()
            .map_err(|_| ParseEquationError::InvalidTarget(target_text.to_string()))?;
        let components = components_text
            .split_ascii_whitespace()
            .map(|s| {
                s.parse::<i64>()
                    .map_err(|_| ParseEquationError::InvalidComponent(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(target, components)
    }
}

impl FromStr for Equation {
    type Err = ParseEquationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
