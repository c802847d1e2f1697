use log::{debug, trace};

use crate::term::Term;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub steps: usize,
    pub size: usize,
}

impl Limits {
    #[must_use]
    pub const fn new(steps: usize, size: usize) -> Self {
        Limits { steps, size }
    }

    #[must_use]
    pub const fn unbounded() -> Self {
        Limits::new(usize::MAX, usize::MAX)
    }

    #[must_use]
    pub const fn with_steps(self, steps: usize) -> Self {
        Limits { steps, ..self }
    }

    #[must_use]
    pub const fn with_size(self, size: usize) -> Self {
        Limits { size, ..self }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits::unbounded()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    NormalForm,
    StepLimit,
    SizeLimit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub term: Term,
    pub steps: usize,
    pub size_peak: Option<usize>,
    pub step_excess: bool,
    pub size_excess: bool,
}

impl Normalized {
    #[must_use]
    pub fn halted(&self) -> bool {
        !self.step_excess && !self.size_excess
    }

    #[must_use]
    pub fn stop_reason(&self) -> StopReason {
        if self.step_excess {
            StopReason::StepLimit
        } else if self.size_excess {
            StopReason::SizeLimit
        } else {
            StopReason::NormalForm
        }
    }
}

impl Term {
    /// Reduces until normal form or until a budget refuses the next reduct.
    #[must_use]
    pub fn normalize(&self, limits: Limits) -> Normalized {
        let mut result = Normalized {
            term: self.clone(),
            steps: 0,
            size_peak: None,
            step_excess: false,
            size_excess: false,
        };

        trace!("normalize start: {}", result.term);

        while let Some(reduced) = result.term.reduce_one_step(0) {
            if result.steps == limits.steps {
                result.step_excess = true;
                break;
            }

            let size = reduced.size();
            if size > limits.size {
                result.size_excess = true;
                break;
            }

            result.steps += 1;
            result.size_peak = Some(result.size_peak.map_or(size, |peak| peak.max(size)));
            result.term = reduced;

            trace!("step {} (size {size}): {}", result.steps, result.term);
        }

        debug!(
            "normalize stopped: {:?} after {} steps, peak {:?}",
            result.stop_reason(),
            result.steps,
            result.size_peak
        );

        result
    }

    #[must_use]
    pub fn normalize_unbounded(&self) -> Normalized {
        self.normalize(Limits::unbounded())
    }
}
