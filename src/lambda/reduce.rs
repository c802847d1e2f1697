use crate::term::{app, lam, Term};

// How a node on the path to the redex is rebuilt around its new child.
#[derive(Clone, Copy)]
enum Frame<'a> {
    Body,
    Function { argument: &'a Term },
    Argument { function: &'a Term },
}

struct Visit<'a> {
    term: &'a Term,
    depth: usize,
    ancestors: usize,
    link: Option<Frame<'a>>,
}

impl Term {
    /// Contracts the leftmost-outermost redex, `None` in beta-normal form.
    #[must_use]
    pub fn reduce_one_step(&self, depth: usize) -> Option<Term> {
        let mut path: Vec<Frame> = Vec::new();
        let mut stack = vec![Visit {
            term: self,
            depth,
            ancestors: 0,
            link: None,
        }];

        while let Some(visit) = stack.pop() {
            path.truncate(visit.ancestors);
            path.extend(visit.link);
            let ancestors = path.len();

            match visit.term {
                Term::Var(_) => {}
                Term::Lam(body) => stack.push(Visit {
                    term: body,
                    depth: visit.depth + 1,
                    ancestors,
                    link: Some(Frame::Body),
                }),
                Term::App(app_) => {
                    // the node itself comes before anything below it
                    if let Some((body, argument)) = visit.term.redex() {
                        let reduct = body.substitute(0, visit.depth, argument);
                        return Some(rebuild(reduct, &path));
                    }

                    stack.push(Visit {
                        term: &app_.1,
                        depth: visit.depth,
                        ancestors,
                        link: Some(Frame::Argument { function: &app_.0 }),
                    });
                    stack.push(Visit {
                        term: &app_.0,
                        depth: visit.depth,
                        ancestors,
                        link: Some(Frame::Function { argument: &app_.1 }),
                    });
                }
            }
        }

        None
    }

    #[must_use]
    pub fn is_normal(&self) -> bool {
        let mut stack = vec![self];
        while let Some(term) = stack.pop() {
            if term.is_redex() {
                return false;
            }
            match term {
                Term::Var(_) => {}
                Term::Lam(body) => stack.push(body),
                Term::App(app_) => {
                    stack.push(&app_.0);
                    stack.push(&app_.1);
                }
            }
        }
        true
    }
}

fn rebuild(reduct: Term, path: &[Frame]) -> Term {
    path.iter().rev().fold(reduct, |term, frame| match *frame {
        Frame::Body => lam(term),
        Frame::Function { argument } => app(term, argument.clone()),
        Frame::Argument { function } => app(function.clone(), term),
    })
}

#[cfg(test)]
mod tests {
    use crate::term::{app, lam, var, Term};

    #[test]
    fn test_var_reduce_one_step() {
        assert_eq!(var(0).reduce_one_step(0), None);
        assert_eq!(var(4).reduce_one_step(3), None);
    }

    #[test]
    fn test_lam_reduce_one_step() {
        assert_eq!(lam(var(0)).reduce_one_step(0), None);
        assert_eq!(lam(app(var(0), var(0))).reduce_one_step(0), None);

        // the body's redex is contracted at depth 1
        assert_eq!(
            lam(app(lam(var(1)), var(0))).reduce_one_step(0),
            Some(lam(var(0)))
        );
        assert_eq!(
            lam(app(lam(lam(var(1))), var(0))).reduce_one_step(0),
            Some(lam(lam(var(0))))
        );
    }

    #[test]
    fn test_app_reduce_one_step() {
        assert_eq!(app(var(0), var(1)).reduce_one_step(0), None);
        assert_eq!(app(lam(var(0)), var(5)).reduce_one_step(0), Some(var(5)));
        assert_eq!(app(lam(var(3)), lam(var(5))).reduce_one_step(0), Some(var(2)));
        assert_eq!(
            app(lam(lam(var(0))), lam(var(5))).reduce_one_step(0),
            Some(lam(lam(var(6))))
        );
    }

    #[test]
    fn test_outermost_redex_first() {
        // the argument holds a redex too, but the root is contracted
        let term = app(lam(app(var(0), var(0))), app(lam(var(0)), var(7)));
        assert_eq!(
            term.reduce_one_step(0),
            Some(app(app(lam(var(0)), var(7)), app(lam(var(0)), var(7))))
        );
    }

    #[test]
    fn test_function_before_argument() {
        let term = app(
            app(lam(var(0)), var(3)),
            app(lam(var(0)), var(4)),
        );
        assert_eq!(
            term.reduce_one_step(0),
            Some(app(var(3), app(lam(var(0)), var(4))))
        );

        let term = app(var(3), app(lam(var(0)), var(4)));
        assert_eq!(term.reduce_one_step(0), Some(app(var(3), var(4))));
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let term = app(lam(app(var(0), var(0))), lam(var(0)));
        let before = term.clone();
        let _ = term.reduce_one_step(0);
        assert_eq!(term, before);
    }

    #[test]
    fn test_is_normal() {
        assert!(var(0).is_normal());
        assert!(lam(app(var(0), lam(var(1)))).is_normal());
        assert!(!app(lam(var(0)), var(1)).is_normal());
        assert!(!lam(app(var(0), app(lam(var(0)), var(1)))).is_normal());

        let terms = [
            app(var(0), var(1)),
            app(lam(var(0)), var(1)),
            lam(app(var(2), app(lam(var(1)), var(0)))),
        ];
        for term in terms {
            assert_eq!(term.is_normal(), term.reduce_one_step(0).is_none());
        }
    }

    #[test]
    fn test_deep_reduce_one_step() {
        let depth = 100_000;
        let chain = |inner: Term| (0..depth).fold(inner, |term, _| lam(term));

        assert_eq!(chain(var(0)).reduce_one_step(0), None);
        assert!(chain(var(0)).is_normal());

        // the only redex sits at the bottom, its binder at level `depth`
        let term = chain(app(lam(app(var(depth), var(1))), var(0)));
        assert_eq!(
            term.reduce_one_step(0),
            Some(chain(app(var(0), var(1))))
        );
    }
}
