//! Entry routine: addition, greeting, factorial, in that order

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::arith::{add, factorial};
use crate::constants::{DEMO_ADD_LHS, DEMO_ADD_RHS, DEMO_FACTORIAL_N, DEMO_GREET_NAME};
use crate::greet::greet_to;

/// Operands used by the entry routine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoInputs {
    pub add_lhs: i32,
    pub add_rhs: i32,
    pub greet_name: String,
    pub factorial_n: i32,
}

impl Default for DemoInputs {
    fn default() -> Self {
        Self {
            add_lhs: DEMO_ADD_LHS,
            add_rhs: DEMO_ADD_RHS,
            greet_name: DEMO_GREET_NAME.to_string(),
            factorial_n: DEMO_FACTORIAL_N,
        }
    }
}

/// Run the demo with the default operands, writing three lines to `out`:
///
/// ```text
/// 5 + 3 = 8
/// Hello, Alice!
/// 5! = 120
/// ```
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    run_with(&DemoInputs::default(), out)
}

/// Run the demo with explicit operands.
///
/// Lines already written stay written if a later step fails.
pub fn run_with<W: Write>(inputs: &DemoInputs, out: &mut W) -> Result<()> {
    info!("Running demo with {:?}", inputs);

    let sum = add(inputs.add_lhs, inputs.add_rhs);
    writeln!(out, "{} + {} = {}", inputs.add_lhs, inputs.add_rhs, sum)
        .context("Failed to write sum")?;

    greet_to(out, &inputs.greet_name).context("Failed to write greeting")?;

    let fact = factorial(inputs.factorial_n)
        .with_context(|| format!("Failed to compute {}!", inputs.factorial_n))?;
    writeln!(out, "{}! = {}", inputs.factorial_n, fact).context("Failed to write factorial")?;

    out.flush().context("Failed to flush output")?;
    info!("Demo finished");
    Ok(())
}
