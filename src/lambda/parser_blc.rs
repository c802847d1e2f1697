// x0 - x ones and trailing zero => de bruijn index x, counted from the innermost binder
// 00 - two zeros => abstraction
// 01ab - a and b are bit sequences => apply b to a (a b)
//
// Indexes are turned into levels while reading: level = depth - x.

use const_format::formatcp;
use thiserror::Error;

use crate::term::{app, lam, var, Term};

pub const IDENTITY: &str = "0010";
pub const TRUE: &str = "0000110";
pub const FALSE: &str = "000010";
pub const SELF_APPLY: &str = "00011010";
pub const S: &str = "00000001011110100111010";
pub const K: &str = TRUE;
pub const OMEGA: &str = formatcp!("01{SELF_APPLY}{SELF_APPLY}");
pub const SKK: &str = formatcp!("0101{S}{K}{K}");
pub const SKK_IDENTITY: &str = formatcp!("01{SKK}{IDENTITY}");

/// Named programs the command line accepts as `@name`.
pub const KNOWN: [(&str, &str); 7] = [
    ("identity", IDENTITY),
    ("true", TRUE),
    ("false", FALSE),
    ("s", S),
    ("k", K),
    ("omega", OMEGA),
    ("skk", SKK_IDENTITY),
];

#[must_use]
pub fn known(name: &str) -> Option<&'static str> {
    KNOWN
        .iter()
        .find_map(|(key, prog)| (*key == name).then_some(*prog))
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("de-brujin indexes must start from 1")]
    ZeroBruijnIndex,
    #[error("trying to reference variable out of bounds")]
    BruijnIndexOutOfBounds,
    #[error("part of the program is missing")]
    IncompleteStatement,
    #[error("unexpected input after the end of the program")]
    TrailingInput,
}

pub fn parse(prog: &str) -> Result<Term, ParseError> {
    let bits: Vec<u8> = prog
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    let (term, tail) = parse_impl(&bits)?;
    if !tail.is_empty() {
        return Err(ParseError::TrailingInput);
    }

    Ok(term)
}

// A node whose children are still being read.
enum Pending {
    Lam,
    Function,
    Argument(Term),
}

fn parse_impl(mut prog: &[u8]) -> Result<(Term, &[u8]), ParseError> {
    let mut pending = Vec::new();
    let mut depth = 0;

    loop {
        let mut term = match prog {
            [b'0', b'0', tail @ ..] => {
                prog = tail;
                pending.push(Pending::Lam);
                depth += 1;
                continue;
            }
            [b'0', b'1', tail @ ..] => {
                prog = tail;
                pending.push(Pending::Function);
                continue;
            }
            _ => {
                let (level, tail) = parse_var(prog, depth)?;
                prog = tail;
                var(level)
            }
        };

        loop {
            match pending.pop() {
                None => return Ok((term, prog)),
                Some(Pending::Lam) => {
                    depth -= 1;
                    term = lam(term);
                }
                Some(Pending::Function) => {
                    pending.push(Pending::Argument(term));
                    break;
                }
                Some(Pending::Argument(function)) => term = app(function, term),
            }
        }
    }
}

fn parse_var(mut prog: &[u8], depth: usize) -> Result<(usize, &[u8]), ParseError> {
    let mut cnt = 0;
    while let Some(b'1') = prog.first() {
        prog = &prog[1..];
        cnt += 1;
    }

    if let Some(b'0') = prog.first() {
        prog = &prog[1..];

        if cnt == 0 {
            return Err(ParseError::ZeroBruijnIndex);
        }

        match depth.checked_sub(cnt) {
            Some(level) => Ok((level, prog)),
            None => Err(ParseError::BruijnIndexOutOfBounds),
        }
    } else {
        Err(ParseError::IncompleteStatement)
    }
}
