use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use zcalc::Calculator;
use zcalc::config::Config;
use zcalc::input::{apply_all, tokenize};

#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about = "Four-function calculator")]
struct Args {
    /// Path to a config file (defaults to the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the engine state as JSON instead of the display
    #[arg(long)]
    json: bool,

    /// Keys to press, e.g. `5 + 2 = =`. Reads lines from stdin when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    keys: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    zcalc::logging::init(&config.logging, args.verbose);

    let mut calc = Calculator::with_options(config.operator_table(), config.display_format());

    if !args.keys.is_empty() {
        let script = args.keys.join(" ");
        let commands = tokenize(&script, calc.operators());
        apply_all(&mut calc, &commands);
        return print_state(&calc, args.json);
    }

    info!("reading keys from stdin");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let line = line.trim();
        if matches!(line, "quit" | "exit") {
            break;
        }
        let commands = tokenize(line, calc.operators());
        apply_all(&mut calc, &commands);
        print_state(&calc, args.json)?;
    }

    Ok(())
}

fn print_state(calc: &Calculator, json: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        let snapshot = serde_json::to_string(&calc.snapshot())?;
        writeln!(stdout, "{snapshot}")?;
    } else {
        writeln!(stdout, "{}", calc.display())?;
    }
    stdout.flush()?;
    Ok(())
}
