//! Root-finding solvers for polyroot models.
//!
//! Solvers borrow a [`Model`](polyroot_core::Model) and report progress to an
//! [`Observer`](polyroot_core::Observer) once per iteration.

pub mod equation;
