use thiserror::Error;

use super::Endpoints;

/// Errors that can occur when creating a [`Bracket`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
}

/// The sign class of a function value for bracket logic.
///
/// Zero belongs to [`Sign::NonNegative`]; it is not a class of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Value is negative.
    Negative,
    /// Value is positive or zero (either signed zero).
    NonNegative,
}

impl Sign {
    /// Returns the sign class of a value, or `None` for NaN.
    #[must_use]
    pub fn of(value: f64) -> Option<Self> {
        if value < 0.0 {
            Some(Sign::Negative)
        } else if value >= 0.0 {
            Some(Sign::NonNegative)
        } else {
            None
        }
    }

    /// Returns true when exactly one of `p` and `q` is negative.
    ///
    /// A zero paired with a negative value counts as a sign change, while a
    /// zero paired with a positive value does not. NaN never changes sign.
    #[must_use]
    pub fn opposite(p: f64, q: f64) -> bool {
        match (Self::of(p), Self::of(q)) {
            (Some(p), Some(q)) => p != q,
            _ => false,
        }
    }
}

/// The current search interval `[a, b]`.
///
/// Endpoints are kept in the order given; `b < a` is allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    a: f64,
    b: f64,
}

impl Bracket {
    /// Creates a bracket from interval endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NonFinite` if either endpoint is NaN or infinite.
    pub fn new(interval: [f64; 2], endpoints: Endpoints) -> Result<Self, BracketError> {
        let [a, b] = interval;

        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }

        Ok(match endpoints {
            Endpoints::Truncate => Self {
                a: a.trunc(),
                b: b.trunc(),
            },
            Endpoints::Exact => Self { a, b },
        })
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    /// Returns half the bracket width, the error bound for the midpoint.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        (self.a - self.b).abs() / 2.0
    }

    /// Keeps `[a, c]` by moving `b` to `c`.
    pub(super) fn keep_lower(&mut self, c: f64) {
        self.b = c;
    }

    /// Keeps `[c, b]` by moving `a` to `c`.
    pub(super) fn keep_upper(&mut self, c: f64) {
        self.a = c;
    }
}
