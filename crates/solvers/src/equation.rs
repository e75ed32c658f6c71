//! Solvers for equations of one variable, `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`bisection`] — sign-change bisection on a bracketing interval

pub mod bisection;
