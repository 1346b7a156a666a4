//! Greeting output
//!
//! The greeting text is built by [`greeting`]; [`greet`] prints it to stdout
//! and [`greet_to`] writes it to any writer.

use std::io::Write;

use crate::constants::{GREETING_PREFIX, GREETING_SUFFIX};

/// Greeting for `name`, e.g. `Hello, Alice!`
pub fn greeting(name: &str) -> String {
    format!("{}{}{}", GREETING_PREFIX, name, GREETING_SUFFIX)
}

/// Write the greeting for `name` as one line.
pub fn greet_to<W: Write>(out: &mut W, name: &str) -> std::io::Result<()> {
    writeln!(out, "{}", greeting(name))
}

/// Print the greeting for `name` to stdout.
///
/// A failed write (closed pipe, full disk) is logged and dropped.
pub fn greet(name: &str) {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = greet_to(&mut handle, name) {
        tracing::warn!("Failed to write greeting to stdout: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_greeting_format() {
        assert_eq!(greeting("Alice"), "Hello, Alice!");
        assert_eq!(greeting(""), "Hello, !");
    }

    #[test]
    fn test_greet_to_writes_single_line() {
        let mut buf = Vec::new();
        greet_to(&mut buf, "Alice").unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Hello, Alice!\n");
        assert!(text.contains("Alice"));
    }

    #[test]
    fn test_greet_to_keeps_unicode_names() {
        let mut buf = Vec::new();
        greet_to(&mut buf, "Zoë").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Hello, Zoë!\n");
    }

    #[test]
    fn test_greet_does_not_panic() {
        greet("Alice");
    }
}
