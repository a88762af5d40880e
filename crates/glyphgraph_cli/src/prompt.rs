//! Interactive confirmation.

use std::io::{self, BufRead, Write};

use anyhow::Result;

/// Ask a yes/no question on stderr; only `y` or `yes` confirms.
/// End of input counts as "no".
pub fn confirm(question: &str) -> Result<bool> {
    eprint!("{question} (y/N): ");
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
