use std::io;

use log::info;
use thiserror::Error;

use crate::term::Term;

pub use encoder_blc::EncodeError;
pub use normalize::{Limits, Normalized, StopReason};
pub use program::{construct_program, ProgramBuilder};

mod lift;
mod normalize;
mod program;
mod reduce;
mod substitute;

pub mod encoder_blc;
pub mod parser_blc;
pub mod parser_lc;
pub mod prelude;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFmt {
    Binary,
    #[default]
    Standard,
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("failed parsing blc input: {0}")]
    Binary(#[from] parser_blc::ParseError),
    #[error("failed parsing input: {0}")]
    Standard(#[from] parser_lc::ParseError),
    #[error("failed encoding output: {0}")]
    Encode(#[from] EncodeError),
    #[error("no built-in program named `{0}`")]
    UnknownProgram(String),
    #[error("io error: {0}")]
    IO(#[from] io::Error),
}

/// Reads a program, or the built-in one named by a leading `@`.
pub fn load(prog: &str, input_fmt: InputFmt) -> Result<Term, RunError> {
    if let Some(name) = prog.trim().strip_prefix('@') {
        let Some(blc) = parser_blc::known(name) else {
            return Err(RunError::UnknownProgram(name.to_string()));
        };
        return Ok(parser_blc::parse(blc)?);
    }

    let term = match input_fmt {
        InputFmt::Binary => parser_blc::parse(prog)?,
        InputFmt::Standard => parser_lc::parse(prog)?,
    };
    Ok(term)
}

pub fn run(prog: &str, input_fmt: InputFmt, limits: Limits) -> Result<Normalized, RunError> {
    let term = load(prog, input_fmt)?;
    info!("loaded program of size {}", term.size());

    let result = term.normalize(limits);
    info!(
        "finished with {:?} after {} steps",
        result.stop_reason(),
        result.steps
    );

    Ok(result)
}
