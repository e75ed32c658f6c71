use std::num::NonZeroUsize;

use clap::Parser;
use polyroot_polynomial::Polynomial;
use polyroot_solvers::equation::bisection::{Config, ConfigError, DEFAULT_MAX_ITERS, Endpoints};

/// Find a real root of a polynomial by bisection.
///
/// Without `--polynomial`, runs the built-in example for x^6 - 3x - 1.
#[derive(Debug, Parser)]
#[command(name = "polyroot", version)]
pub(crate) struct Args {
    /// Polynomial in x, for example "x^6 - 3x - 1".
    #[arg(long, short, requires = "interval")]
    polynomial: Option<Polynomial>,

    /// Interval endpoints a and b.
    #[arg(
        long,
        short,
        num_args = 2,
        value_names = ["A", "B"],
        allow_negative_numbers = true,
        requires = "polynomial"
    )]
    interval: Option<Vec<f64>>,

    /// Number of bisection iterations.
    #[arg(long = "iterations", short = 'n')]
    iterations: Option<NonZeroUsize>,

    /// Use the interval endpoints as given instead of truncating them.
    #[arg(long)]
    exact_endpoints: bool,

    /// Print every iteration.
    #[arg(long)]
    pub(crate) trace: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub(crate) json: bool,
}

/// What the binary has been asked to do.
#[derive(Debug, PartialEq)]
pub(crate) enum Mode {
    /// Run the built-in example.
    Example,

    /// Solve a user-supplied problem.
    Solve {
        polynomial: Polynomial,
        interval: [f64; 2],
        config: Config,
    },
}

impl Args {
    /// Resolves the parsed arguments into a run mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the iteration budget is rejected by the solver.
    pub(crate) fn mode(self) -> Result<Mode, ConfigError> {
        let (Some(polynomial), Some([a, b])) = (self.polynomial, self.interval.as_deref()) else {
            return Ok(Mode::Example);
        };

        let endpoints = if self.exact_endpoints {
            Endpoints::Exact
        } else {
            Endpoints::Truncate
        };
        let max_iters = self.iterations.map_or(DEFAULT_MAX_ITERS, NonZeroUsize::get);

        Ok(Mode::Solve {
            polynomial,
            interval: [*a, *b],
            config: Config::new(max_iters, endpoints)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("polyroot").chain(args.iter().copied()))
    }

    #[test]
    fn no_arguments_runs_example() {
        let args = parse(&[]).expect("valid args");
        assert_eq!(args.mode(), Ok(Mode::Example));
    }

    #[test]
    fn parses_problem_with_negative_endpoints() {
        let args = parse(&["-p", "x^6 - 3x - 1", "-i", "-1", "0", "-n", "8"]).expect("valid args");
        let Ok(Mode::Solve {
            polynomial,
            interval,
            config,
        }) = args.mode()
        else {
            panic!("expected solve mode");
        };

        assert_eq!(polynomial.to_string(), "x^6 - 3x - 1");
        assert_eq!(interval, [-1.0, 0.0]);
        assert_eq!(config.max_iters(), 8);
        assert_eq!(config.endpoints(), Endpoints::Truncate);
    }

    #[test]
    fn exact_endpoints_flag_switches_policy() {
        let args = parse(&["-p", "x - 0.3", "-i", "0.25", "0.5", "--exact-endpoints"])
            .expect("valid args");
        let Ok(Mode::Solve { config, .. }) = args.mode() else {
            panic!("expected solve mode");
        };

        assert_eq!(config.endpoints(), Endpoints::Exact);
        assert_eq!(config.max_iters(), DEFAULT_MAX_ITERS);
    }

    #[test]
    fn rejects_incomplete_problems() {
        assert!(parse(&["-p", "x^2 - 2"]).is_err());
        assert!(parse(&["-i", "1", "2"]).is_err());
        assert!(parse(&["-p", "x^2 - 2", "-i", "1"]).is_err());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse(&["-p", "x + y", "-i", "1", "2"]).is_err());
        assert!(parse(&["-p", "x", "-i", "1", "2", "-n", "0"]).is_err());
    }
}
