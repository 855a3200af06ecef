use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};

use crate::equation::Equation;

/// Parses one equation per line, stopping at the first line that fails.
pub fn parse_equations<R: BufRead>(reader: R) -> Result<Vec<Equation>> {
    reader
        .lines()
        .enumerate()
        .map(|(ind, l)| {
            l.with_context(|| format!("Failed to read line {}.", ind + 1))
                .and_then(|s| {
                    Equation::try_from(s.as_str()).with_context(|| {
                        format!(
                            "Failed to parse equation from line {}({}).",
                            ind + 1,
                            s
                        )
                    })
                })
        })
        .collect()
}

pub fn read_equations<P: AsRef<Path>>(path: P) -> Result<Vec<Equation>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    parse_equations(BufReader::new(file)).with_context(|| {
        format!(
            "Failed to read equations from given file({}).",
            path.as_ref().display()
        )
    })
}
