mod cli;

use anyhow::Result;
use clap::Parser;
use polyroot_polynomial::{Monomial, Polynomial};
use polyroot_solvers::equation::bisection::{self, Action, Config, Event, Solution};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Args, Mode};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let (trace, json) = (args.trace, args.json);
    match args.mode()? {
        Mode::Example => run_example(),
        Mode::Solve {
            polynomial,
            interval,
            config,
        } => {
            let solution = run(&polynomial, interval, &config, trace)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&solution)?);
            } else {
                println!("{solution}");
            }
            Ok(())
        }
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Runs x^6 - 3x - 1 on [-1, 0] with the default budget, then on [1, 2]
/// with eight iterations.
fn run_example() -> Result<()> {
    let f: Polynomial = [
        Monomial::new(1.0, 6),
        Monomial::new(-3.0, 1),
        Monomial::constant(-1.0),
    ]
    .into_iter()
    .collect();

    println!("Bisection method");
    println!();

    for (interval, iterations) in [([-1.0, 0.0], None), ([1.0, 2.0], Some(8))] {
        let budget = iterations.unwrap_or(bisection::DEFAULT_MAX_ITERS);
        println!(
            "Running bisection method for f(x) = {f} in [{}, {}] with {budget} iterations",
            interval[0], interval[1]
        );
        let outcome = bisection::bisect(&f, interval, iterations)?;
        println!("{}", outcome.message);
        println!();
    }
    Ok(())
}

fn run(polynomial: &Polynomial, interval: [f64; 2], config: &Config, trace: bool) -> Result<Solution> {
    tracing::info!(%polynomial, ?interval, max_iters = config.max_iters(), "solving");

    let solution = if trace {
        println!(
            "{:>4}  {:>22}  {:>22}  {:>22}  {:>22}  {:>12}",
            "iter", "a", "b", "c", "F(c)", "|a - b| / 2"
        );
        bisection::solve(polynomial, interval, config, print_iteration)?
    } else {
        bisection::solve_unobserved(polynomial, interval, config)?
    };
    Ok(solution)
}

fn print_iteration(event: &Event) -> Option<Action> {
    let [a, b] = event.bracket;
    println!(
        "{:>4}  {a:>22}  {b:>22}  {:>22}  {:>22}  {:>12.3e}",
        event.iter, event.midpoint, event.residual, event.half_width
    );
    None
}
