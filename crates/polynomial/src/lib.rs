//! Single-variable polynomials represented as ordered sums of monomials.
//!
//! A [`Polynomial`] keeps its terms in insertion order and never merges terms
//! that share an exponent; evaluation simply sums every term. Polynomials
//! implement [`Model`](polyroot_core::Model) so they can be handed straight to
//! a solver.
//!
//! ```
//! use polyroot_polynomial::{Monomial, Polynomial};
//!
//! // f(x) = x^6 - 3x - 1
//! let mut f = Polynomial::new();
//! f.add_monomial(Monomial::new(1.0, 6));
//! f.add_monomial(Monomial::new(-3.0, 1));
//! f.add_monomial(Monomial::constant(-1.0));
//!
//! assert_eq!(f.evaluate(2.0), 57.0);
//! assert_eq!(f.to_string(), "x^6 - 3x - 1");
//! assert_eq!("x^6 - 3x - 1".parse::<Polynomial>(), Ok(f));
//! ```

mod monomial;
mod parse;
mod polynomial;

pub use monomial::Monomial;
pub use parse::ParseError;
pub use polynomial::Polynomial;
