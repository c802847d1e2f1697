pub mod lambda;
pub mod term;

pub use lambda::{
    construct_program, load, run, InputFmt, Limits, Normalized, ProgramBuilder, RunError,
    StopReason,
};
pub use term::{app, lam, var, Term};
