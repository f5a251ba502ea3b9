use std::sync::Arc;
use std::thread;

use rand::SeedableRng as _;
use rand_chacha::ChaCha8Rng;
use randgen::Discrete;
use randgen::Generator as _;
use randgen::InvalidArgument;
use randgen::Tally;
use randgen::table::COIN;
use randgen::table::REFERENCE;

const PROBABILITIES: [f64; 5] = [0.01, 0.3, 0.58, 0.1, 0.01];

const ITERATIONS: usize = 100_000;

/// Statistical: with 100k draws the standard error of each frequency is at
/// most 0.0016, so a 0.02 bound is more than twelve standard errors wide.
fn assert_converges(tally: &Tally<i64>, values: &[i64]) {
    assert_eq!(tally.total(), ITERATIONS as u64);
    for (value, probability) in values.iter().zip(PROBABILITIES) {
        let frequency = tally.frequency(value);
        assert!(
            (frequency - probability).abs() < 0.02,
            "{value}: observed {frequency}, expected {probability}"
        );
    }
}

#[test]
fn converges_for_any_value_order() {
    for (seed, values) in [[-2i64, 3, 6, 8, 7], [3, -2, 8, 6, 7], [1, 4, 0, 3, 2]]
        .into_iter()
        .enumerate()
    {
        let discrete = Discrete::new(&values, &PROBABILITIES).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
        let tally = Tally::draw(&discrete, &mut rng, ITERATIONS).unwrap();
        assert_converges(&tally, &values);
    }
}

#[test]
fn converges_with_thread_rng() {
    let tally = REFERENCE.tally(ITERATIONS).unwrap();
    assert_converges(&tally, &REFERENCE.values);
}

#[test]
fn rejects_invalid_tables() {
    let values = [-1i64, 0, 1, 2, 3];

    assert!(matches!(
        Discrete::new(&values, &[0.01, 0.3, 0.58, 0.1]),
        Err(InvalidArgument::LengthMismatch { .. })
    ));
    assert!(matches!(
        Discrete::new(&[1, 2, 3], &[0.1, -0.2, 0.3]),
        Err(InvalidArgument::NegativeProbability { .. })
    ));
    for last in [0.9, 2.0, 0.0] {
        assert!(matches!(
            Discrete::new(&values, &[0.01, 0.3, 0.58, 0.1, last]),
            Err(InvalidArgument::SumOutOfTolerance { .. })
        ));
    }
    assert!(matches!(
        Discrete::<i64>::new(&[], &[]),
        Err(InvalidArgument::SumOutOfTolerance { .. })
    ));
}

#[test]
fn concurrent_draws_share_one_sampler() {
    let discrete = Arc::new(COIN.sampler().unwrap());

    let handles = (0..8)
        .map(|_| {
            let discrete = Arc::clone(&discrete);
            thread::spawn(move || {
                let mut tally = Tally::new();
                for _ in 0..10_000 {
                    tally.record(discrete.next().unwrap());
                }
                tally
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        let tally = handle.join().unwrap();
        assert_eq!(tally.count(&0) + tally.count(&1), 10_000);
    }
}
