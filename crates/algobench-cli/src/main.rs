//! `algobench` command-line runner.
//!
//! Runs the benchmark families selected by flags, or asks for them one
//! prompt at a time with `--interactive`, then prints per-size results and
//! comparison tables and optionally writes a chart and reports.

mod args;
mod prompt;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use owo_colors::OwoColorize;
use tracing::debug;

use algobench::prelude::*;

use crate::args::Cli;
use crate::prompt::{interactive_config, DialoguerPrompter, Prompter};

/// Exit code for a session cancelled with Ctrl-C.
const EXIT_CANCELLED: u8 = 130;

static CANCEL_REPORTED: AtomicBool = AtomicBool::new(false);

fn main() -> ExitCode {
    let cli = Cli::parse();
    if !cli.quiet {
        algobench::console::init();
    }

    // Ctrl-C at a prompt raises SIGINT before dialoguer returns, so the
    // handler has to cover both prompts and running benchmarks.
    if let Err(e) = ctrlc::set_handler(|| {
        let code = report_cancelled(&CANCEL_REPORTED, &mut io::stdout());
        std::process::exit(i32::from(code));
    }) {
        debug!(event = "interrupt_handler", error = %e, "Ctrl-C handler not installed");
    }

    let no_args = std::env::args_os().len() == 1;
    let interactive = cli.interactive || (no_args && io::stdin().is_terminal());
    let mut prompter = DialoguerPrompter;

    match run(cli, interactive, &mut prompter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == io::ErrorKind::Interrupted => {
            ExitCode::from(report_cancelled(&CANCEL_REPORTED, &mut io::stdout()))
        }
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Prints the cancellation notice unless it was already printed, and
/// returns the exit code.
fn report_cancelled<W: Write>(reported: &AtomicBool, out: &mut W) -> u8 {
    if !reported.swap(true, Ordering::SeqCst) {
        let _ = writeln!(out, "\nCancelled by user.");
        let _ = out.flush();
    }
    EXIT_CANCELLED
}

fn run<P: Prompter>(cli: Cli, interactive: bool, prompter: &mut P) -> io::Result<()> {
    let mut config = if interactive {
        println!("=== Performance Measurement: Recursive vs Iterative ===");
        interactive_config(prompter, cli.into_config())?
    } else {
        cli.into_config()
    };
    config.validate().map_err(io::Error::other)?;

    if let Ok(json) = serde_json::to_string(&config) {
        debug!(event = "session_config", config = %json);
    }

    if !config.any_family() {
        println!("No benchmark selected.");
        println!("\nDone.");
        return Ok(());
    }

    println!("\nStarting performance measurement...");
    let series = run_session(&config);

    print!("{}", ResultListing::new(&series));
    println!("\nSUMMARY OF MEASUREMENTS:");
    for s in &series {
        println!();
        print!("{}", AsciiTable::for_series(s));
    }

    write_outputs(&config, &series).map_err(io::Error::other)?;

    if interactive {
        config.chart = prompter.confirm("\nSave and show chart? (y/n) [y]")?;
    }
    if config.chart && write_chart(&config, &series).map_err(io::Error::other)? {
        println!("Chart saved as '{}'.", config.chart_path.display());
    }

    println!("\nDone.");
    Ok(())
}
