use std::fmt;

/// A single polynomial term, `coefficient * x^exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monomial {
    coefficient: f64,
    exponent: u32,
}

impl Monomial {
    /// Creates a term with the given coefficient and exponent.
    #[must_use]
    pub const fn new(coefficient: f64, exponent: u32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Creates a constant term (exponent zero).
    #[must_use]
    pub const fn constant(coefficient: f64) -> Self {
        Self::new(coefficient, 0)
    }

    #[must_use]
    pub const fn coefficient(&self) -> f64 {
        self.coefficient
    }

    #[must_use]
    pub const fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Evaluates the term at `x`.
    ///
    /// A zero exponent yields the coefficient for every `x`, including zero.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let power = match i32::try_from(self.exponent) {
            Ok(n) => x.powi(n),
            Err(_) => x.powf(f64::from(self.exponent)),
        };
        self.coefficient * power
    }

    /// Returns the same term with the coefficient's sign flipped.
    pub(crate) fn negated(self) -> Self {
        Self::new(-self.coefficient, self.exponent)
    }
}

impl From<f64> for Monomial {
    fn from(coefficient: f64) -> Self {
        Self::constant(coefficient)
    }
}

/// Renders the term without a leading sign decision.
///
/// Unit coefficients are dropped on non-constant terms, so `-1 * x^2`
/// renders as `-x^2` and `1 * x` as `x`.
impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.coefficient;

        if self.exponent == 0 {
            return write!(f, "{c}");
        }

        #[allow(clippy::float_cmp)]
        if c == -1.0 {
            write!(f, "-")?;
        } else if c != 1.0 {
            write!(f, "{c}")?;
        }

        match self.exponent {
            1 => write!(f, "x"),
            n => write!(f, "x^{n}"),
        }
    }
}
