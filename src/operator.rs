/// Binary operators that may be placed between two components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Multiply,
    Concatenate,
}

pub const BASIC_OPERATORS: [Operator; 2] = [Operator::Add, Operator::Multiply];
pub const EXTENDED_OPERATORS: [Operator; 3] =
    [Operator::Add, Operator::Multiply, Operator::Concatenate];

impl Operator {
    /// Returns `None` if the result doesn't fit in an `i64`, or if the right
    /// operand of a concatenation is negative.
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Concatenate => concatenate(lhs, rhs),
        }
    }
}

// Appends the digits of `rhs` after those of `lhs`, so -12 || 5 is -125.
fn concatenate(lhs: i64, rhs: i64) -> Option<i64> {
    if rhs < 0 {
        return None;
    }

    let shifted = 10i64
        .checked_pow(digit_count(rhs.unsigned_abs()))?
        .checked_mul(lhs)?;
    if lhs < 0 {
        shifted.checked_sub(rhs)
    } else {
        shifted.checked_add(rhs)
    }
}

/// Number of decimal digits in `n`; zero has one digit.
pub fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}
