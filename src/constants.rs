//! Central constants for basic-functions
//!
//! All fixed literals (demo operands, greeting pieces, logging defaults) are
//! defined here to avoid duplication and keep the entry routine and its tests
//! in agreement.

/// Left operand of the addition performed by the entry routine
pub const DEMO_ADD_LHS: i32 = 5;

/// Right operand of the addition performed by the entry routine
pub const DEMO_ADD_RHS: i32 = 3;

/// Name passed to the greeting by the entry routine
pub const DEMO_GREET_NAME: &str = "Alice";

/// Operand of the factorial computed by the entry routine
pub const DEMO_FACTORIAL_N: i32 = 5;

/// Text placed before the name in a greeting
pub const GREETING_PREFIX: &str = "Hello, ";

/// Text placed after the name in a greeting
pub const GREETING_SUFFIX: &str = "!";

/// Largest `n` whose factorial still fits in an `i32` (12! = 479_001_600).
pub const MAX_FACTORIAL_INPUT: i32 = 12;

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "RUST_LOG";

/// Filter used when `RUST_LOG` is unset or unparsable.
///
/// Kept at `warn` so a normal run leaves stderr empty.
pub const DEFAULT_LOG_FILTER: &str = "warn";
