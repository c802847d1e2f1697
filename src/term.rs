use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::mem;

/// `Var(0)` names the outermost binder.
#[derive(Eq)]
pub enum Term {
    Var(usize),
    Lam(Box<Term>),
    App(Box<(Term, Term)>),
}

#[must_use]
pub fn var(level: usize) -> Term {
    Term::Var(level)
}

#[must_use]
pub fn lam(body: Term) -> Term {
    Term::Lam(Box::new(body))
}

#[must_use]
pub fn app(function: Term, argument: Term) -> Term {
    Term::App(Box::new((function, argument)))
}

impl Term {
    #[must_use]
    pub fn size(&self) -> usize {
        let mut stack = vec![self];
        let mut size = 0;

        while let Some(term) = stack.pop() {
            size += 1;
            match term {
                Term::Var(_) => {}
                Term::Lam(body) => stack.push(body),
                Term::App(app) => {
                    stack.push(&app.1);
                    stack.push(&app.0);
                }
            }
        }

        size
    }

    /// The abstraction body and argument of a beta-redex.
    #[must_use]
    pub fn redex(&self) -> Option<(&Term, &Term)> {
        match self {
            Term::App(app) => match &app.0 {
                Term::Lam(body) => Some((&**body, &app.1)),
                _ => None,
            },
            _ => None,
        }
    }

    #[must_use]
    pub fn is_redex(&self) -> bool {
        self.redex().is_some()
    }

    #[must_use]
    pub fn level(&self) -> Option<usize> {
        if let Term::Var(level) = self {
            return Some(*level);
        }
        None
    }

    #[must_use]
    pub fn body(&self) -> Option<&Term> {
        if let Term::Lam(body) = self {
            return Some(&**body);
        }
        None
    }

    // Copies the tree through `leaf`; `enter` updates the context at binders.
    pub(crate) fn map_levels<C: Copy>(
        &self,
        init: C,
        enter: impl Fn(C) -> C,
        mut leaf: impl FnMut(usize, C) -> Term,
    ) -> Term {
        enum Task<'a, C> {
            Visit(&'a Term, C),
            Lam,
            App,
        }

        let mut tasks = vec![Task::Visit(self, init)];
        let mut built: Vec<Term> = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit(Term::Var(level), context) => built.push(leaf(*level, context)),
                Task::Visit(Term::Lam(body), context) => {
                    tasks.push(Task::Lam);
                    tasks.push(Task::Visit(&**body, enter(context)));
                }
                Task::Visit(Term::App(app), context) => {
                    tasks.push(Task::App);
                    tasks.push(Task::Visit(&app.1, context));
                    tasks.push(Task::Visit(&app.0, context));
                }
                Task::Lam => {
                    let Some(body) = built.pop() else {
                        unreachable!("a body is built before its binder");
                    };
                    built.push(lam(body));
                }
                Task::App => {
                    let (Some(argument), Some(function)) = (built.pop(), built.pop()) else {
                        unreachable!("both sides are built before their application");
                    };
                    built.push(app(function, argument));
                }
            }
        }

        match built.pop() {
            Some(term) => term,
            None => unreachable!("the root is always built"),
        }
    }

    fn take_children(&mut self, out: &mut Vec<Term>) {
        match self {
            Term::Var(_) => {}
            Term::Lam(body) => out.push(mem::replace(&mut **body, Term::Var(0))),
            Term::App(app) => {
                let (function, argument) = mem::replace(&mut **app, (Term::Var(0), Term::Var(0)));
                out.push(function);
                out.push(argument);
            }
        }
    }
}

impl Drop for Term {
    fn drop(&mut self) {
        if let Term::Var(_) = self {
            return;
        }

        let mut stack = Vec::new();
        self.take_children(&mut stack);
        while let Some(mut term) = stack.pop() {
            term.take_children(&mut stack);
        }
    }
}

impl Clone for Term {
    fn clone(&self) -> Self {
        self.map_levels((), |()| (), |level, ()| Term::Var(level))
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];

        while let Some(pair) = stack.pop() {
            match pair {
                (Term::Var(a), Term::Var(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (Term::Lam(a), Term::Lam(b)) => stack.push((&**a, &**b)),
                (Term::App(a), Term::App(b)) => {
                    stack.push((&a.1, &b.1));
                    stack.push((&a.0, &b.0));
                }
                _ => return false,
            }
        }

        true
    }
}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut stack = vec![self];

        while let Some(term) = stack.pop() {
            match term {
                Term::Var(level) => {
                    state.write_u8(0);
                    level.hash(state);
                }
                Term::Lam(body) => {
                    state.write_u8(1);
                    stack.push(body);
                }
                Term::App(app) => {
                    state.write_u8(2);
                    stack.push(&app.1);
                    stack.push(&app.0);
                }
            }
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Piece<'a> {
            Term(&'a Term),
            Text(&'static str),
        }

        let mut stack = vec![Piece::Term(self)];

        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Term(Term::Var(level)) => write!(f, "{level}")?,
                Piece::Term(Term::Lam(body)) => {
                    f.write_str("λ.(")?;
                    stack.push(Piece::Text(")"));
                    stack.push(Piece::Term(&**body));
                }
                Piece::Term(Term::App(app)) => {
                    f.write_str("(")?;
                    stack.push(Piece::Text(")"));
                    stack.push(Piece::Term(&app.1));
                    stack.push(Piece::Text(" "));
                    stack.push(Piece::Term(&app.0));
                }
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}
