//! Bisection for single-variable equations.
//!
//! # Algorithm
//!
//! Each iteration evaluates `f(a)`, `f(b)` and the midpoint `f(c)`, then
//! keeps whichever half of `[a, b]` shows a sign change, testing `[a, c]`
//! first. The error bound reported with a root is the half-width
//! `|a - b| / 2` of the bracket the root was taken from.
//!
//! The solver terminates in one of three ways:
//!
//! - `f(c)` is exactly zero ([`Status::ExactRoot`])
//! - the iteration budget runs out ([`Status::MaxIters`])
//! - neither half changes sign ([`Status::NoSignChange`]), in which case
//!   the [`Solution`] has `found` set to false
//!
//! # Sign changes
//!
//! Zero is grouped with the positive values (see [`Sign`]). A zero endpoint
//! next to a negative midpoint counts as a sign change; a zero endpoint next
//! to a positive midpoint does not.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after `f(c)` is evaluated
//! and before the bracket moves. Observers can return [`Action::StopEarly`]
//! to accept the current midpoint as the root estimate.

mod action;
mod bracket;
mod config;
mod decision;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError, DEFAULT_MAX_ITERS, Endpoints};
pub use error::Error;
pub use event::Event;
pub use solution::{NO_ROOT_MESSAGE, Solution, Status};

use polyroot_core::{Model, Observer};
use polyroot_polynomial::Polynomial;
use tracing::{debug, trace};

use decision::Decision;

/// A bisection result paired with its summary message.
#[derive(Debug, Clone, PartialEq)]
pub struct Bisection {
    pub result: Solution,
    pub message: String,
}

/// Bisects `polynomial` on `interval`, truncating the endpoints toward zero.
///
/// `max_iters` defaults to [`DEFAULT_MAX_ITERS`].
///
/// # Errors
///
/// Returns an error if `max_iters` is `Some(0)` or an endpoint is not finite.
pub fn bisect(
    polynomial: &Polynomial,
    interval: [f64; 2],
    max_iters: Option<usize>,
) -> Result<Bisection, Error> {
    let config = Config::new(
        max_iters.unwrap_or(DEFAULT_MAX_ITERS),
        Endpoints::Truncate,
    )?;
    let result = solve_unobserved(polynomial, interval, &config)?;
    Ok(Bisection {
        message: result.message(),
        result,
    })
}

/// Finds a root of the model on `interval` using bisection.
///
/// The observer receives an [`Event`] for each iteration.
/// See the [module docs](self) for termination rules.
///
/// # Errors
///
/// Returns an error if an endpoint is not finite or the model call fails.
pub fn solve<M, Obs>(
    model: &M,
    interval: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
    Obs: Observer<Event, Action>,
{
    let mut bracket = Bracket::new(interval, config.endpoints())?;
    let mut remaining = config.max_iters();
    let mut iter = 0;

    let solution = loop {
        iter += 1;

        let [a, b] = bracket.as_array();
        let c = bracket.midpoint();
        let half_width = bracket.half_width();

        let fa = call(model, a)?;
        let fb = call(model, b)?;
        let fc = call(model, c)?;
        trace!(iter, a, b, c, fc, half_width, "bisection iteration");

        let event = Event {
            iter,
            bracket: [a, b],
            midpoint: c,
            residual: fc,
            half_width,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            break found(model, Status::StoppedByObserver, c, half_width, iter)?;
        }

        match Decision::new(fa, fb, fc) {
            Decision::Root => break found(model, Status::ExactRoot, c, half_width, iter)?,
            Decision::KeepLower => bracket.keep_lower(c),
            Decision::KeepUpper => bracket.keep_upper(c),
            Decision::NoSignChange => break Solution::not_found(call(model, 0.0)?, iter),
        }

        remaining -= 1;
        if remaining == 0 {
            break found(model, Status::MaxIters, c, half_width, iter)?;
        }
    };

    debug!(
        status = ?solution.status,
        iters = solution.iters,
        root = solution.root,
        error_bound = solution.error_bound,
        "bisection finished"
    );
    Ok(solution)
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if an endpoint is not finite or the model call fails.
pub fn solve_unobserved<M>(model: &M, interval: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    solve(model, interval, config, ())
}

/// Builds a found solution, re-evaluating the model at the root estimate.
fn found<M>(
    model: &M,
    status: Status,
    root: f64,
    error_bound: f64,
    iters: usize,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    let image = call(model, root)?;
    Ok(Solution::with_root(status, root, image, error_bound, iters))
}

fn call<M>(model: &M, x: f64) -> Result<f64, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    model.call(&x).map_err(|e| Error::Model(Box::new(e)))
}
