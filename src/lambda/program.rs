use log::trace;

use crate::term::{app, lam, var, Term};

/// `((λ.((λ.((λ.main) h2)) h1)) h0)`: level `i` names helper `i` throughout.
#[must_use]
pub fn construct_program(helpers: &[Term], main: &Term) -> Term {
    trace!("building program tower over {} helpers", helpers.len());

    helpers
        .iter()
        .rev()
        .fold(main.clone(), |tower, helper| app(lam(tower), helper.clone()))
}

#[derive(Debug, Clone, Default)]
pub struct ProgramBuilder {
    helpers: Vec<Term>,
}

impl ProgramBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `helper` and returns the variable that refers to it.
    pub fn define(&mut self, helper: Term) -> Term {
        let reference = self.global(self.helpers.len());
        self.helpers.push(helper);
        reference
    }

    #[must_use]
    pub fn global(&self, index: usize) -> Term {
        var(index)
    }

    #[must_use]
    pub fn local(&self, index: usize) -> Term {
        var(self.helpers.len() + index)
    }

    #[must_use]
    pub fn helpers(&self) -> &[Term] {
        &self.helpers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    #[must_use]
    pub fn build(&self, main: &Term) -> Term {
        construct_program(&self.helpers, main)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_helpers() {
        let main = app(var(0), lam(var(1)));
        assert_eq!(construct_program(&[], &main), main);
    }

    #[test]
    fn test_tower_shape() {
        let helpers = [var(10), var(11), var(12)];
        let main = var(3);
        assert_eq!(
            construct_program(&helpers, &main),
            app(lam(app(lam(app(lam(var(3)), var(12))), var(11))), var(10))
        );
    }

    #[test]
    fn test_church_booleans() {
        let helpers = [lam(lam(var(0))), lam(lam(var(1)))];
        let main = app(app(var(0), var(2)), var(3));
        let result = construct_program(&helpers, &main).normalize_unbounded();
        assert!(result.halted());
        assert_eq!(result.term, var(0));

        // helper 1 sits under one binder, so its own parameters are 1 and 2
        let helpers = [lam(lam(var(0))), lam(lam(var(2)))];
        let main = app(app(var(0), var(2)), var(3));
        let result = construct_program(&helpers, &main).normalize_unbounded();
        assert_eq!(result.term, var(0));

        let main = app(app(var(1), var(2)), var(3));
        let result = construct_program(&helpers, &main).normalize_unbounded();
        assert_eq!(result.term, var(1));
    }

    #[test]
    fn test_helper_refers_to_earlier_helper() {
        let mut builder = ProgramBuilder::new();

        // I = λx.x
        let identity = builder.define(lam(builder.local(0)));
        // J = λy.(I y)
        let apply_identity = builder.define(lam(app(identity, builder.local(0))));
        assert_eq!(apply_identity, var(1));

        // λz.(J z)
        let main = lam(app(apply_identity, builder.local(0)));
        let result = builder.build(&main).normalize_unbounded();
        assert!(result.halted());
        assert_eq!(result.term, lam(var(0)));
    }

    #[test]
    fn test_locals_become_globals() {
        let mut builder = ProgramBuilder::new();
        let truth = builder.define(lam(lam(builder.local(0))));
        let falsity = builder.define(lam(lam(builder.local(1))));
        assert_eq!((truth.clone(), falsity.clone()), (var(0), var(1)));
        assert_eq!(builder.len(), 2);

        let on_true = lam(builder.local(10));
        let on_false = lam(builder.local(11));

        let main = app(app(truth, on_true.clone()), on_false.clone());
        let result = builder.build(&main).normalize_unbounded();
        assert_eq!(result.term, lam(var(10)));

        let main = app(app(falsity, on_true), on_false);
        let result = builder.build(&main).normalize_unbounded();
        assert_eq!(result.term, lam(var(11)));
    }

    #[test]
    fn test_builder_state() {
        let mut builder = ProgramBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.local(2), var(2));

        builder.define(lam(var(0)));
        assert!(!builder.is_empty());
        assert_eq!(builder.local(2), var(3));
        assert_eq!(builder.global(0), var(0));
        assert_eq!(builder.helpers(), &[lam(var(0))]);
    }
}
