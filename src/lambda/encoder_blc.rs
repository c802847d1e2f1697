use thiserror::Error;

use crate::term::Term;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("level {level} is free at depth {depth} and has no binary encoding")]
    FreeVariable { level: usize, depth: usize },
}

impl Term {
    /// Writes a closed term in binary lambda calculus.
    pub fn fmt_blc(&self) -> Result<String, EncodeError> {
        let mut out = String::new();
        let mut stack = vec![(self, 0)];

        while let Some((term, depth)) = stack.pop() {
            match term {
                Term::Var(level) => {
                    if *level >= depth {
                        return Err(EncodeError::FreeVariable {
                            level: *level,
                            depth,
                        });
                    }
                    out.push_str(&"1".repeat(depth - level));
                    out.push('0');
                }
                Term::Lam(body) => {
                    out.push_str("00");
                    stack.push((&**body, depth + 1));
                }
                Term::App(app) => {
                    out.push_str("01");
                    stack.push((&app.1, depth));
                    stack.push((&app.0, depth));
                }
            }
        }

        Ok(out)
    }
}
