// true = \t f. t;
// false = \t f. f;
// false (\x. x) (\y. y y)
//
// Definitions become helpers in order; a binder's level is the number of
// names in scope.

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, multispace0},
    combinator::{opt, recognize},
    error::ErrorKind,
    multi::{many0_count, many1},
    sequence::{pair, terminated},
    IResult,
};
use thiserror::Error;

use crate::lambda::ProgramBuilder;
use crate::term::{app, lam, var, Term};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected input near `{rest}`")]
    Syntax { rest: String },
    #[error("name `{0}` is not bound")]
    UnboundName(String),
    #[error("`{0}` is defined twice")]
    DuplicateDefinition(String),
    #[error("unexpected input after the end of the program: `{0}`")]
    TrailingInput(String),
}

pub fn parse(s: &str) -> Result<Term, ParseError> {
    let mut builder = ProgramBuilder::new();
    let mut env: Env = Vec::new();
    let mut s = s.trim_start();

    while let Ok((rest, name)) = definition_head(s) {
        if env.contains(&name) {
            return Err(ParseError::DuplicateDefinition(name.to_string()));
        }

        let (rest, body) = expr(&mut env, rest).map_err(convert)?;
        let (rest, _) = ws(char(';'))(rest).map_err(convert)?;

        builder.define(body);
        env.push(name);
        s = rest;
    }

    let (rest, main) = expr(&mut env, s).map_err(convert)?;
    let (rest, _) = opt(ws(char(';')))(rest).map_err(convert)?;
    if !rest.is_empty() {
        return Err(ParseError::TrailingInput(rest.to_string()));
    }

    Ok(builder.build(&main))
}

// names in scope, position = level
type Env<'a> = Vec<&'a str>;

#[derive(Debug)]
enum LcError<'a> {
    Nom(&'a str),
    Unbound(&'a str),
}

impl<'a> nom::error::ParseError<&'a str> for LcError<'a> {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        LcError::Nom(input)
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

type PResult<'a, T> = IResult<&'a str, T, LcError<'a>>;

fn convert(err: nom::Err<LcError<'_>>) -> ParseError {
    match err {
        nom::Err::Incomplete(_) => ParseError::Syntax {
            rest: String::new(),
        },
        nom::Err::Error(err) | nom::Err::Failure(err) => match err {
            LcError::Unbound(name) => ParseError::UnboundName(name.to_string()),
            LcError::Nom(rest) => ParseError::Syntax {
                rest: rest.chars().take(16).collect(),
            },
        },
    }
}

fn cut<E>(err: nom::Err<E>) -> nom::Err<E> {
    match err {
        nom::Err::Error(err) => nom::Err::Failure(err),
        err => err,
    }
}

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> PResult<'a, O>
where
    F: FnMut(&'a str) -> PResult<'a, O>,
{
    terminated(inner, multispace0)
}

fn identifier(s: &str) -> PResult<'_, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_"), tag("'")))),
    ))(s)
}

fn definition_head(s: &str) -> PResult<'_, &str> {
    terminated(ws(identifier), ws(char('=')))(s)
}

fn variable<'a>(env: &Env<'a>, s: &'a str) -> PResult<'a, Term> {
    let (rest, name) = ws(identifier)(s)?;
    match env.iter().rposition(|x| *x == name) {
        Some(level) => Ok((rest, var(level))),
        None => Err(nom::Err::Failure(LcError::Unbound(name))),
    }
}

fn lambda<'a>(env: &mut Env<'a>, s: &'a str) -> PResult<'a, Term> {
    let (s, _) = ws(alt((tag("\\"), tag("λ"))))(s)?;
    let (s, names) = many1(ws(identifier))(s).map_err(cut)?;
    let (s, _) = ws(char('.'))(s).map_err(cut)?;

    let scope = env.len();
    env.extend(names.iter().copied());
    let res = expr(env, s);
    env.truncate(scope);

    let (s, body) = res.map_err(cut)?;
    Ok((s, names.iter().fold(body, |body, _| lam(body))))
}

fn parens<'a>(env: &mut Env<'a>, s: &'a str) -> PResult<'a, Term> {
    let (s, _) = ws(char('('))(s)?;
    let (s, inner) = expr(env, s).map_err(cut)?;
    let (s, _) = ws(char(')'))(s).map_err(cut)?;
    Ok((s, inner))
}

fn atom<'a>(env: &mut Env<'a>, s: &'a str) -> PResult<'a, Term> {
    match lambda(env, s) {
        Err(nom::Err::Error(_)) => {}
        res => return res,
    }

    match parens(env, s) {
        Err(nom::Err::Error(_)) => {}
        res => return res,
    }

    variable(env, s)
}

// application is left associative and a lambda body reaches as far right as it can
fn expr<'a>(env: &mut Env<'a>, s: &'a str) -> PResult<'a, Term> {
    let (mut s, mut acc) = atom(env, s)?;
    loop {
        match atom(env, s) {
            Ok((rest, arg)) => {
                acc = app(acc, arg);
                s = rest;
            }
            Err(nom::Err::Error(_)) => return Ok((s, acc)),
            Err(err) => return Err(err),
        }
    }
}
