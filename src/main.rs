//! Contact Book Assistant - Main entry point
//!
//! Runs the interactive loop: reads a command per line from stdin and prints
//! the reply to stdout. Logs go to stderr.

use anyhow::{Context, Result};
use chrono::Local;
use contact_book_assistant::commands::{self, Outcome, GOODBYE_MESSAGE, PROMPT, WELCOME_MESSAGE};
use contact_book_assistant::{Config, ContactBook};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for command replies)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Starting assistant with log level {}", config.log_level);

    let mut book = ContactBook::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    println!("{}", WELCOME_MESSAGE);

    loop {
        print!("{}", PROMPT);
        stdout.flush().context("Failed to flush stdout")?;

        line.clear();
        let read = match stdin.lock().read_line(&mut line) {
            Ok(read) => read,
            Err(e) => {
                error!("Failed to read input: {}", e);
                return Err(e).context("Failed to read input");
            }
        };

        // End of input behaves like `exit`
        if read == 0 {
            println!();
            println!("{}", GOODBYE_MESSAGE);
            break;
        }

        let today = Local::now().date_naive();
        match commands::handle_line(&line, &mut book, today) {
            Some(Outcome::Reply(reply)) => println!("{}", reply),
            Some(Outcome::Exit(farewell)) => {
                println!("{}", farewell);
                break;
            }
            None => continue,
        }
    }

    info!("Assistant shutdown complete, {} contacts in memory", book.len());
    Ok(())
}
