use std::{convert::Infallible, fmt};

use polyroot_core::Model;

use crate::Monomial;

/// An ordered sum of monomials in a single variable.
///
/// Terms keep their insertion order and like terms are never combined, so
/// `x + x` holds two terms and evaluates to `2x`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Polynomial {
    terms: Vec<Monomial>,
}

impl Polynomial {
    /// Creates a polynomial with no terms.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a term.
    pub fn add_monomial(&mut self, term: Monomial) {
        self.terms.push(term);
    }

    /// Returns the polynomial with `term` appended.
    #[must_use]
    pub fn with(mut self, term: Monomial) -> Self {
        self.add_monomial(term);
        self
    }

    /// Returns the terms in insertion order.
    #[must_use]
    pub fn terms(&self) -> &[Monomial] {
        &self.terms
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the largest exponent among the terms, or `None` if empty.
    ///
    /// Terms with a zero coefficient still count.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.terms.iter().map(Monomial::exponent).max()
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// An empty polynomial evaluates to zero.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter().map(|term| term.evaluate(x)).sum()
    }
}

impl Model for Polynomial {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok(self.evaluate(*input))
    }
}

impl FromIterator<Monomial> for Polynomial {
    fn from_iter<T: IntoIterator<Item = Monomial>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl Extend<Monomial> for Polynomial {
    fn extend<T: IntoIterator<Item = Monomial>>(&mut self, iter: T) {
        self.terms.extend(iter);
    }
}

impl From<Vec<Monomial>> for Polynomial {
    fn from(terms: Vec<Monomial>) -> Self {
        Self { terms }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.terms.split_first() else {
            return write!(f, "0");
        };

        if first.coefficient() < 0.0 {
            write!(f, "-{}", first.negated())?;
        } else {
            write!(f, "{first}")?;
        }

        for term in rest {
            if term.coefficient() < 0.0 {
                write!(f, " - {}", term.negated())?;
            } else {
                write!(f, " + {term}")?;
            }
        }
        Ok(())
    }
}
