use crate::term::{var, Term};

impl Term {
    /// Adds `amount` to every level at or above `cutoff`, saturating at
    /// `usize::MAX`. The cutoff is the same under every binder.
    #[must_use]
    pub fn lift(&self, amount: usize, cutoff: usize) -> Term {
        self.map_levels(
            (),
            |()| (),
            |level, ()| {
                if level < cutoff {
                    var(level)
                } else {
                    var(level.saturating_add(amount))
                }
            },
        )
    }
}
