use core::hash::BuildHasherDefault;
use core::hash::Hash;
use std::collections::HashMap;

use rand::Rng;
use rapidhash::RapidHasher;

use crate::error::Exhausted;
use crate::generator::Generator;

/// Per-outcome counts over a batch of draws.
#[derive(Clone, Debug)]
pub struct Tally<T> {
    counts: HashMap<T, u64, BuildHasherDefault<RapidHasher>>,
    total: u64,
}

impl<T> Default for Tally<T> {
    fn default() -> Self {
        Self {
            counts: HashMap::default(),
            total: 0,
        }
    }
}

impl<T: Eq + Hash> Tally<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw `count` outcomes from `generator`, stopping at the first failed draw.
    pub fn draw<G, R>(generator: &G, rng: &mut R, count: usize) -> Result<Self, Exhausted>
    where
        G: Generator<Item = Result<T, Exhausted>>,
        R: Rng + ?Sized,
    {
        let mut tally = Self::new();
        for _ in 0..count {
            tally.record(generator.next_with(rng)?);
        }
        Ok(tally)
    }

    #[inline]
    pub fn record(&mut self, value: T) {
        *self.counts.entry(value).or_default() += 1;
        self.total += 1;
    }

    #[inline]
    pub fn count(&self, value: &T) -> u64 {
        self.counts.get(value).copied().unwrap_or_default()
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Share of all recorded draws that were `value`; zero when empty.
    pub fn frequency(&self, value: &T) -> f64 {
        match self.total {
            0 => 0.0,
            total => self.count(value) as f64 / total as f64,
        }
    }

    /// Outcomes seen at least once, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, u64)> + '_ {
        self.counts.iter().map(|(value, count)| (value, *count))
    }
}
