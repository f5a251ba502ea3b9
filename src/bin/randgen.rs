//! Draws from the reference distribution and logs how often each outcome came up.

use std::fmt::Write as _;
use std::process;

use randgen::table::REFERENCE;

const ITERATIONS: usize = 100;

fn main() {
    tracing_subscriber::fmt::init();

    let tally = match REFERENCE.tally(ITERATIONS) {
        Ok(tally) => tally,
        Err(error) => {
            tracing::error!(%error, "sampling failed");
            process::exit(1);
        }
    };

    let mut counts = String::new();
    for value in &REFERENCE.values {
        let _ = writeln!(counts, "{value}: {} times", tally.count(value));
    }

    tracing::info!(iterations = ITERATIONS, "Counts:\n{counts}");
}
