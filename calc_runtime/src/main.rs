//! `calc`, a terminal front end for the calculator engine.
//!
//! Each input line is a run of key presses (`12+3<Enter>`). After every
//! line both display regions are printed, followed by one notice per
//! rejected key.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use calc_runtime::config::RuntimeConfig;
use calc_runtime::session::{Outcome, Session};
use calc_runtime::tape::CommandTape;

#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(about = "Desk calculator driven by key presses")]
struct Args {
    /// TOML config file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Key line to press (repeatable). Reads stdin when omitted.
    #[arg(long, short = 'k')]
    keys: Vec<String>,

    /// JSON tape script to replay before any keys
    #[arg(long, short = 's')]
    script: Option<PathBuf>,

    /// Print the canonical state hash after each line
    #[arg(long)]
    hash: bool,

    /// Print the session tape as JSON on exit
    #[arg(long)]
    dump_tape: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = RuntimeConfig::load(args.config.as_deref()).context("loading config")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let show_hash = args.hash || config.show_hash;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut session = match &args.script {
        Some(path) => {
            let tape = CommandTape::load(path)
                .with_context(|| format!("loading script {}", path.display()))?;
            let session = Session::from_tape(&tape, &config)?;
            print_display(&mut out, &session, &[], show_hash)?;
            session
        }
        None => Session::new(&config),
    };

    if !args.keys.is_empty() {
        for line in &args.keys {
            run_line(&mut out, &mut session, line, show_hash)?;
        }
    } else if args.script.is_none() {
        for line in io::stdin().lock().lines() {
            let line = line.context("reading stdin")?;
            run_line(&mut out, &mut session, &line, show_hash)?;
        }
    }

    if args.dump_tape {
        writeln!(out, "{}", session.tape().to_json()?)?;
    }

    let hash = session.replay_full()?;
    debug!(commands = session.tape().len(), hash = %hash, "session verified");
    Ok(())
}

fn run_line(out: &mut impl Write, session: &mut Session, line: &str, show_hash: bool) -> Result<()> {
    let outcomes = session.press_line(line);
    let notices: Vec<&str> = outcomes
        .iter()
        .filter_map(|o: &Outcome| o.notice.as_deref())
        .collect();
    print_display(out, session, &notices, show_hash)
}

fn print_display(
    out: &mut impl Write,
    session: &Session,
    notices: &[&str],
    show_hash: bool,
) -> Result<()> {
    let display = session.display();
    writeln!(out, "{}", display.previous)?;
    writeln!(out, "{}", display.current)?;
    for notice in notices {
        writeln!(out, "! {}", notice)?;
    }
    if show_hash {
        writeln!(out, "# {}", session.current_hash())?;
    }
    Ok(())
}
