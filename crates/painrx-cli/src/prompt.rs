//! Line-oriented prompt helpers.
//!
//! Numeric prompts re-ask on unparseable input instead of failing the
//! whole session; only a closed input stream is treated as an error.

use std::io::{self, Write};

/// Print `prompt` and read one line, without the trailing newline.
pub fn read_line(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    let read = io::stdin().read_line(&mut buf)?;
    anyhow::ensure!(read > 0, "input stream closed");
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompt until the user enters an unsigned integer.
pub fn read_u32(prompt: &str) -> anyhow::Result<u32> {
    loop {
        match read_line(prompt)?.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

/// Prompt until the user enters an integer in `[min, max]`.
pub fn read_u32_in(prompt: &str, min: u32, max: u32) -> anyhow::Result<u32> {
    loop {
        let value = read_u32(prompt)?;
        if (min..=max).contains(&value) {
            return Ok(value);
        }
        println!("Please enter a value between {min} and {max}.");
    }
}

/// Prompt until the user enters `0` or `1`.
pub fn read_flag(prompt: &str) -> anyhow::Result<bool> {
    Ok(read_u32_in(prompt, 0, 1)? == 1)
}

/// Prompt until the user enters a non-blank line; returns it trimmed.
pub fn read_nonempty(prompt: &str) -> anyhow::Result<String> {
    loop {
        let line = read_line(prompt)?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
}
