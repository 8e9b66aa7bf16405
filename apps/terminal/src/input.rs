//! # Input Prompts
//!
//! Line-oriented prompt helpers with parse-and-retry.
//!
//! ## Retry Discipline
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  prompt ──► read line ──► parse                                │
//! │                │            │                                  │
//! │                │            ├── Ok(value) ──► return           │
//! │                │            │                                  │
//! │                │            └── Err ──► "Invalid input!" ──┐   │
//! │                │                                           │   │
//! │                └◄──────────────────────────────────────────┘   │
//! │                                                                │
//! │  EOF on stdin is the one non-retryable case: it surfaces as    │
//! │  an UnexpectedEof error and ends the program cleanly.          │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed input is a presentation concern: it never reaches
//! bodega-core. These helpers re-prompt until the line parses; the core's
//! own rejections (range, stock, payment) are handled by the menu loop.

use std::io::{self, BufRead, Write};

use bodega_core::Money;

/// Prints a prompt (no newline) and reads one trimmed line from stdin.
///
/// EOF becomes `UnexpectedEof`: there is nothing sensible to retry when
/// the input stream is gone.
pub fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim().to_string())
}

/// Prompts until a non-empty line is entered.
pub fn prompt_nonempty(prompt: &str) -> io::Result<String> {
    loop {
        let line = prompt_line(prompt)?;
        if !line.is_empty() {
            return Ok(line);
        }
        println!("Input cannot be empty.");
    }
}

/// Prompts until the line parses as an integer.
pub fn prompt_i64(prompt: &str) -> io::Result<i64> {
    loop {
        let line = prompt_line(prompt)?;
        match line.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input! Please enter a number."),
        }
    }
}

/// Prompts until the line parses as a non-negative integer (menu choices,
/// product numbers).
pub fn prompt_usize(prompt: &str) -> io::Result<usize> {
    loop {
        let line = prompt_line(prompt)?;
        match line.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input! Please enter a number."),
        }
    }
}

/// Prompts until the line parses as a money amount ("150", "12.50",
/// "₱20.00").
pub fn prompt_money(prompt: &str) -> io::Result<Money> {
    loop {
        let line = prompt_line(prompt)?;
        match line.parse() {
            Ok(amount) => return Ok(amount),
            Err(err) => println!("Invalid amount ({err}). Enter e.g. 12.50"),
        }
    }
}

/// Prompts until a y/n answer is entered; returns true for yes.
pub fn prompt_yes_no(prompt: &str) -> io::Result<bool> {
    loop {
        let line = prompt_line(prompt)?;
        match line.to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer y or n."),
        }
    }
}

/// Waits for Enter before returning (used between screens).
pub fn pause(prompt: &str) -> io::Result<()> {
    prompt_line(prompt).map(|_| ())
}

/// Clears the screen with the ANSI erase + home sequence.
pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
    let _ = io::stdout().flush();
}
