use std::cmp::Ordering;

use crate::term::{var, Term};

impl Term {
    /// Eliminates the binder at `target`, putting `arg` where it was used.
    #[must_use]
    pub fn substitute(&self, lift_amount: usize, target: usize, arg: &Term) -> Term {
        self.map_levels(
            lift_amount,
            |crossed| crossed + 1,
            |level, crossed| match level.cmp(&target) {
                Ordering::Greater => var(level - 1),
                Ordering::Less => var(level),
                Ordering::Equal => arg.lift(crossed, target),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::term::{app, lam, var};

    #[test]
    fn test_var_substitute() {
        // occurrence, replaced as-is
        assert_eq!(var(0).substitute(0, 0, &var(11)), var(11));
        assert_eq!(var(3).substitute(0, 3, &lam(var(0))), lam(var(0)));

        // bound inside the eliminated binder, moves down
        assert_eq!(var(1).substitute(0, 0, &var(11)), var(0));
        assert_eq!(var(9).substitute(4, 2, &var(11)), var(8));

        // bound outside, untouched
        assert_eq!(var(0).substitute(0, 1, &var(11)), var(0));
        assert_eq!(var(2).substitute(7, 5, &var(11)), var(2));
    }

    #[test]
    fn test_occurrence_is_lifted_by_crossed_binders() {
        // arg levels at or above the target move with the copy
        assert_eq!(var(2).substitute(6, 2, &var(7)), var(13));
        // arg levels below the target refer outside and stay
        assert_eq!(var(2).substitute(6, 2, &var(1)), var(1));
    }

    #[test]
    fn test_lam_substitute() {
        assert_eq!(lam(var(0)).substitute(0, 0, &var(11)), lam(var(12)));
        assert_eq!(lam(lam(var(0))).substitute(0, 0, &var(11)), lam(lam(var(13))));
        assert_eq!(lam(var(0)).substitute(0, 1, &var(11)), lam(var(0)));
        assert_eq!(lam(lam(var(0))).substitute(0, 1, &var(11)), lam(lam(var(0))));
        assert_eq!(lam(var(2)).substitute(5, 2, &var(7)), lam(var(13)));
    }

    #[test]
    fn test_lam_substitute_mixed_levels() {
        let body = app(app(app(app(var(0), var(1)), var(2)), var(3)), var(4));
        assert_eq!(
            lam(body).substitute(0, 3, &var(99)),
            lam(app(app(app(app(var(0), var(1)), var(2)), var(100)), var(3)))
        );

        let nested = lam(lam(app(app(var(0), var(2)), var(3))));
        assert_eq!(
            nested.substitute(0, 2, &var(88)),
            lam(lam(app(app(var(0), var(90)), var(2))))
        );
    }

    #[test]
    fn test_app_substitute() {
        assert_eq!(
            app(var(0), var(0)).substitute(0, 0, &var(11)),
            app(var(11), var(11))
        );
        assert_eq!(
            app(var(0), lam(var(0))).substitute(0, 0, &var(4)),
            app(var(4), lam(var(5)))
        );
        assert_eq!(
            app(var(1), var(2)).substitute(0, 1, &lam(var(1))),
            app(lam(var(1)), var(1))
        );
    }

    #[test]
    fn test_substitute_closed_argument() {
        // the argument's own binder follows it under one extra abstraction
        let arg = lam(app(var(0), var(0)));
        assert_eq!(
            lam(app(var(0), var(1))).substitute(0, 0, &arg),
            lam(app(lam(app(var(1), var(1))), var(0)))
        );
    }

    #[test]
    fn test_deep_substitute() {
        // the occurrence sits under `depth` binders and is lifted by as many
        let depth = 100_000;
        let term = (0..depth).fold(app(var(depth), var(0)), |term, _| lam(term));
        let result = term.substitute(0, depth, &var(depth));
        let expected = (0..depth).fold(app(var(2 * depth), var(0)), |term, _| lam(term));
        assert_eq!(result, expected);
    }
}
