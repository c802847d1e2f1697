use crate::term::{app, lam, var, Term};

use super::program::ProgramBuilder;

/// `I = λx.x`
#[must_use]
pub fn identity() -> Term {
    lam(var(0))
}

/// `K = λx.λy.x`
#[must_use]
pub fn konst() -> Term {
    lam(lam(var(0)))
}

/// `S = λx.λy.λz.x z (y z)`
#[must_use]
pub fn substitution() -> Term {
    lam(lam(lam(app(app(var(0), var(2)), app(var(1), var(2))))))
}

/// `Ω = (λx.x x) (λx.x x)`, reduces to itself forever.
#[must_use]
pub fn omega() -> Term {
    let self_apply = lam(app(var(0), var(0)));
    app(self_apply.clone(), self_apply)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Church {
    pub truth: Term,
    pub falsity: Term,
    pub zero: Term,
    pub succ: Term,
    pub add: Term,
    pub mult: Term,
}

impl Church {
    pub fn install(builder: &mut ProgramBuilder) -> Self {
        let truth = builder.define(lam(lam(builder.local(0))));
        let falsity = builder.define(lam(lam(builder.local(1))));
        let zero = builder.define(lam(lam(builder.local(1))));

        let (n, f, x) = (builder.local(0), builder.local(1), builder.local(2));
        let succ = builder.define(lam(lam(lam(app(f.clone(), app(app(n, f), x))))));

        let (m, n, f, x) = (
            builder.local(0),
            builder.local(1),
            builder.local(2),
            builder.local(3),
        );
        let add = builder.define(lam(lam(lam(lam(app(
            app(m, f.clone()),
            app(app(n, f), x),
        ))))));

        let (m, n, f, x) = (
            builder.local(0),
            builder.local(1),
            builder.local(2),
            builder.local(3),
        );
        let mult = builder.define(lam(lam(lam(lam(app(app(m, app(n, f)), x))))));

        Church {
            truth,
            falsity,
            zero,
            succ,
            add,
            mult,
        }
    }

    /// `SUCC (SUCC (… ZERO))` with `n` successors.
    #[must_use]
    pub fn numeral(&self, n: usize) -> Term {
        (0..n).fold(self.zero.clone(), |acc, _| app(self.succ.clone(), acc))
    }

    #[must_use]
    pub fn plus(&self, lhs: Term, rhs: Term) -> Term {
        app(app(self.add.clone(), lhs), rhs)
    }

    #[must_use]
    pub fn times(&self, lhs: Term, rhs: Term) -> Term {
        app(app(self.mult.clone(), lhs), rhs)
    }

    #[must_use]
    pub fn select(condition: Term, then: Term, otherwise: Term) -> Term {
        app(app(condition, then), otherwise)
    }
}

/// The normal form of the Church numeral `n` at depth 0: `λf.λx.f (f (… x))`.
#[must_use]
pub fn numeral_normal_form(n: usize) -> Term {
    lam(lam((0..n).fold(var(1), |acc, _| app(var(0), acc))))
}

/// Reads a normalized Church numeral at depth 0 back into a number.
#[must_use]
pub fn numeral_value(term: &Term) -> Option<usize> {
    let mut body = term.body()?.body()?;
    let mut count = 0;

    while let Term::App(app_) = body {
        if app_.0 != var(0) {
            return None;
        }
        count += 1;
        body = &app_.1;
    }

    (*body == var(1)).then_some(count)
}

#[must_use]
pub fn boolean_value(term: &Term) -> Option<bool> {
    match term.body()?.body()?.level()? {
        0 => Some(true),
        1 => Some(false),
        _ => None,
    }
}
