use std::fmt;

/// Message reported when bisection gives up without a root.
pub const NO_ROOT_MESSAGE: &str = "No root found. The interval may not contain a root, or it \
    does not enclose only the root you are looking for with a change of sign.";

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The midpoint evaluated to exactly zero.
    ExactRoot,

    /// The full iteration budget was used.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,

    /// Neither half of the bracket showed a sign change.
    NoSignChange,
}

/// The result of a bisection solve.
///
/// When `found` is false the other fields are placeholders: `root` is zero,
/// `image` is the function value at zero and `error_bound` is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Whether a root estimate was produced.
    pub found: bool,

    /// The last midpoint `c`.
    pub root: f64,

    /// Function value at `root`.
    pub image: f64,

    /// Half-width of the bracket `root` was taken from.
    pub error_bound: f64,

    /// Final solver status.
    pub status: Status,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(super) fn with_root(
        status: Status,
        root: f64,
        image: f64,
        error_bound: f64,
        iters: usize,
    ) -> Self {
        Self {
            found: true,
            root,
            image,
            error_bound,
            status,
            iters,
        }
    }

    pub(super) fn not_found(image_at_zero: f64, iters: usize) -> Self {
        Self {
            found: false,
            root: 0.0,
            image: image_at_zero,
            error_bound: 0.0,
            status: Status::NoSignChange,
            iters,
        }
    }

    /// Returns the human-readable summary of this result.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found {
            write!(
                f,
                "Root found at c = {}, F(c) = {}, |a - b| / 2 = {}",
                self.root, self.image, self.error_bound
            )
        } else {
            f.write_str(NO_ROOT_MESSAGE)
        }
    }
}
