//! Interactive driver: probe the host, then heat on demand.
//!
//! Prints the detected capabilities, refuses to run without AVX2, and then
//! loops a prompt: a whole number of minutes starts a heating run across
//! every logical core, `q` (or end of input) exits.

use std::io::{self, BufRead, Write};
use std::process;
use std::time::{Duration, Instant};

use log::debug;

use heatwave::prelude::*;

/// How often the heating loop prints a progress line.
const STATUS_INTERVAL: Duration = Duration::from_secs(30);

/// One parsed line of prompt input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Heat for this many minutes
    Heat(u64),
    /// Exit the program
    Quit,
}

/// Parse one prompt line. `q`/`Q` quits, a positive whole number is minutes
/// of heating, anything else is rejected so the caller re-prompts.
fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Some(Command::Quit);
    }
    match line.parse::<u64>() {
        Ok(minutes) if minutes > 0 => Some(Command::Heat(minutes)),
        _ => None,
    }
}

/// Heat for `minutes`, one bounded burst at a time, re-checking elapsed
/// wall-clock time between bursts.
fn heat_for(minutes: u64, workers: usize) -> heatwave::Result<()> {
    let target = Duration::from_secs(60 * minutes);
    let started = Instant::now();
    let mut last_status = started;

    println!("Heating for {minutes} minute(s) across {workers} workers...");

    while started.elapsed() < target {
        let burst_started = Instant::now();
        run_hot_burst(workers)?;
        debug!("burst took {:?}", burst_started.elapsed());

        if last_status.elapsed() >= STATUS_INTERVAL {
            last_status = Instant::now();
            println!(
                "  still heating: {}s of {}s elapsed",
                started.elapsed().as_secs(),
                target.as_secs()
            );
        }
    }

    println!("Done heating for {minutes} minute(s).");
    Ok(())
}

fn main() {
    env_logger::init();

    let caps = host_capabilities();
    println!("{caps}");

    if !probe_wide_simd_support() {
        println!("This CPU has no AVX2 support; nothing to heat with. Exiting.");
        return;
    }

    let workers = probe_logical_core_count();
    println!("One worker per logical core: {workers} workers.");

    let stdin = io::stdin();
    loop {
        print!("Minutes to heat (q to quit)? ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // end of input
            Ok(_) => {}
        }

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Heat(minutes)) => {
                if let Err(e) = heat_for(minutes, workers) {
                    eprintln!("heating failed: {e}");
                    process::exit(1);
                }
            }
            None => println!("Please enter a whole number of minutes, or q to quit."),
        }
    }
}
