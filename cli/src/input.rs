//! Line-oriented integer input with a retry loop and quit sentinels.

use std::io::{self, BufRead, Write};

/// Classification of one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Int(i64),
    Quit,
    Invalid,
}

/// Classifies a raw input line without touching stdin.
pub fn classify(line: &str) -> Entry {
    let trimmed = line.trim();
    if matches!(trimmed.to_lowercase().as_str(), "q" | "quit" | "exit") {
        return Entry::Quit;
    }
    match trimmed.parse::<i64>() {
        Ok(value) => Entry::Int(value),
        Err(_) => Entry::Invalid,
    }
}

/// Prompts until the user enters an integer.
///
/// Returns `Ok(None)` when the user asks to quit (sentinel word or end of
/// input); invalid lines are reported and the prompt repeats.
pub fn read_integer(prompt: &str) -> io::Result<Option<i64>> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like an explicit quit.
            return Ok(None);
        }

        match classify(&line) {
            Entry::Int(value) => {
                log::debug!("parsed integer {value}");
                return Ok(Some(value));
            }
            Entry::Quit => {
                println!("Quit requested. Goodbye.");
                return Ok(None);
            }
            Entry::Invalid => {
                println!("Invalid input - please enter an integer (or 'q' to quit).");
            }
        }
    }
}
