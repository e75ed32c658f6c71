/// State of a single bisection iteration, emitted after `f(c)` is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The bracket `[a, b]` this iteration bisects.
    pub bracket: [f64; 2],

    /// The midpoint `c`.
    pub midpoint: f64,

    /// The function value `f(c)`.
    pub residual: f64,

    /// Half the bracket width, `|a - b| / 2`.
    pub half_width: f64,
}
