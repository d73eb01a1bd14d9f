//! `progcalc`: line-oriented programmer's calculator.
//!
//! Each input line is a sequence of whitespace-separated tokens (operands,
//! operators, `=`, `C`, `CE`, memory keys, `base=`/`word=` selections); see
//! [`progcalc_clients::session`]. After every line the display is printed.
//!
//! **Usage:**
//! ```text
//! progcalc [--word-size <SIZE>] [--base <BASE>] [--json] [--bits] [COMMANDS]...
//! echo "7F + 1 =" | progcalc --word-size byte --base hex
//! ```
//!
//! Commands given as arguments form a single line; without them, lines are
//! read from stdin. Exits non-zero if any token could not be interpreted.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use progcalc::{Radix, WordSize};
use progcalc_clients::logging::setup_tracing;
use progcalc_clients::Session;

/// Programmer's calculator with fixed-width two's-complement arithmetic.
#[derive(Parser)]
#[command(
    name = "progcalc",
    about = "Programmer's calculator: fixed-width two's-complement arithmetic"
)]
struct Args {
    /// Word size: byte, word, dword or qword.
    #[arg(long, default_value = "qword")]
    word_size: WordSize,

    /// Display base: dec, bin, oct or hex.
    #[arg(long, default_value = "dec")]
    base: Radix,

    /// Print the session state as JSON instead of the display text.
    #[arg(long)]
    json: bool,

    /// Print the bit view after the display.
    #[arg(long)]
    bits: bool,

    /// Tokens to run as one line; stdin is read when absent.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, allow_negative_numbers = true)]
    commands: Vec<String>,
}

/// Runs one line of tokens and prints the result.
///
/// Returns `false` if a token could not be interpreted.
fn run_line(session: &mut Session, line: &str, args: &Args, out: &mut impl Write) -> Result<bool> {
    let mut ok = true;
    for token in line.split_whitespace() {
        if let Err(err) = session.feed(token) {
            writeln!(out, "Error: {err}")?;
            ok &= !err.is_input_error();
            break;
        }
    }

    if args.json {
        writeln!(out, "{}", serde_json::to_string(&session.snapshot())?)?;
    } else {
        writeln!(out, "{}", session.display())?;
    }
    if args.bits {
        writeln!(out, "{}", session.bits())?;
    }
    Ok(ok)
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing()?;

    let mut session = Session::new(args.word_size, args.base);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut ok = true;

    if args.commands.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            ok &= run_line(&mut session, &line, &args, &mut out)?;
        }
    } else {
        let line = args.commands.join(" ");
        ok &= run_line(&mut session, &line, &args, &mut out)?;
    }

    out.flush()?;
    if !ok {
        process::exit(1);
    }
    Ok(())
}
