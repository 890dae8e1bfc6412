use anyhow::{Context, Result};
use clap::Parser;
use image_scan::epoch::{format_timestamp, parse_timestamp, PROMPT};
use std::io::{self, BufRead, Write};

/// Convert a UNIX epoch timestamp into a human-readable UTC date
#[derive(Parser, Debug)]
#[command(name = "epoch_convert", version)]
struct Args {
    /// Seconds since 1970-01-01T00:00:00Z; prompted for when omitted
    #[arg(allow_hyphen_values = true)]
    timestamp: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let input = match args.timestamp {
        Some(value) => value,
        None => {
            let mut stdout = io::stdout();
            write!(stdout, "{}", PROMPT)?;
            stdout.flush()?;
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read timestamp from stdin")?;
            line
        }
    };

    let timestamp = parse_timestamp(&input)?;
    log::debug!("Converting timestamp {}", timestamp);
    println!("{}", format_timestamp(timestamp)?);
    Ok(())
}
