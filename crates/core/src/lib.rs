//! Core traits for polyroot.
//!
//! This crate defines the shared abstractions that models and solvers
//! build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Observer`] — receives solver events and optionally returns control actions

mod model;
mod observer;

pub use model::Model;
pub use observer::Observer;
