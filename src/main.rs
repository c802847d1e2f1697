use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use lambda_levels::{run, InputFmt, Limits, RunError};
use log::{LevelFilter, Log, Metadata, Record};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Named syntax: `\x y. x`, with `name = term;` definitions
    Lambda,
    /// Binary lambda calculus
    Blc,
}

impl From<Format> for InputFmt {
    fn from(format: Format) -> Self {
        match format {
            Format::Lambda => InputFmt::Standard,
            Format::Blc => InputFmt::Binary,
        }
    }
}

/// Normalizes a lambda term by leftmost-outermost beta-reduction.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Program text, or `@name` for a built-in program (identity, true, false, s, k, omega, skk)
    program: String,

    #[arg(short, long, value_enum, default_value_t = Format::Lambda)]
    format: Format,

    /// Stop after this many reductions
    #[arg(long)]
    steps: Option<usize>,

    /// Refuse reductions that would grow the term past this many nodes
    #[arg(long)]
    size: Option<usize>,

    /// Print the result in binary lambda calculus (closed terms only)
    #[arg(long)]
    blc_output: bool,

    /// Log more, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

// Ok(false) when a budget ran out before normal form
fn execute(args: &Args) -> Result<bool, RunError> {
    let limits = Limits::new(
        args.steps.unwrap_or(usize::MAX),
        args.size.unwrap_or(usize::MAX),
    );
    let result = run(&args.program, args.format.into(), limits)?;

    let mut out = io::stdout().lock();
    if args.blc_output {
        writeln!(out, "{}", result.term.fmt_blc()?)?;
    } else {
        writeln!(out, "{}", result.term)?;
    }

    let peak = result
        .size_peak
        .map_or_else(|| String::from("-"), |peak| peak.to_string());
    writeln!(
        out,
        "steps={} peak={peak} outcome={:?}",
        result.steps,
        result.stop_reason()
    )?;

    Ok(result.halted())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match execute(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}
