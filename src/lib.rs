//! Integer addition, a greeting and a factorial, sequenced by one entry routine.

pub mod arith;
pub mod constants;
pub mod demo;
pub mod error;
pub mod greet;
pub mod logging;

pub use arith::{add, checked_add, factorial};
pub use demo::{run, run_with, DemoInputs};
pub use error::{Error, Result};
pub use greet::{greet, greet_to, greeting};
