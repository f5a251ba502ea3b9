use rand::Rng;

use super::Generator;
use crate::error::Exhausted;
use crate::error::InvalidArgument;

/// Default allowed deviation of the probability sum from 1.
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Samples from a fixed set of outcomes with fixed probabilities.
///
/// Built once from parallel value and probability sequences. Each value is
/// keyed by the running sum of probabilities up to and including it, and a
/// draw `r` in `[0, 1)` selects the first key strictly greater than `r`.
///
/// The index is never modified after construction, so a `Discrete` can be
/// shared across threads and drawn from concurrently without locking.
#[derive(Clone, Debug)]
pub struct Discrete<T> {
    cumulative: Box<[f64]>,
    values: Box<[T]>,
}

impl<T: Clone> Discrete<T> {
    /// Build a sampler with the default tolerance of `0.001`.
    #[inline]
    pub fn new(values: &[T], probabilities: &[f64]) -> Result<Self, InvalidArgument> {
        Self::with_tolerance(values, probabilities, DEFAULT_TOLERANCE)
    }

    /// Build a sampler accepting a probability sum within `tolerance` of 1.
    pub fn with_tolerance(
        values: &[T],
        probabilities: &[f64],
        tolerance: f64,
    ) -> Result<Self, InvalidArgument> {
        if let Err(error) = validate(values.len(), probabilities, tolerance) {
            tracing::warn!(%error, "rejected distribution");
            return Err(error);
        }

        let cumulative = probabilities
            .iter()
            .scan(0.0, |sum, probability| {
                *sum += probability;
                Some(*sum)
            })
            .collect::<Box<[f64]>>();

        tracing::debug!(
            outcomes = values.len(),
            total = cumulative.last().copied().unwrap_or_default(),
            "built discrete sampler"
        );

        Ok(Self {
            cumulative,
            values: values.into(),
        })
    }
}

impl<T> Discrete<T> {
    /// Build a sampler from `(value, probability)` pairs with the default tolerance.
    pub fn from_pairs<I>(choices: I) -> Result<Self, InvalidArgument>
    where
        I: IntoIterator<Item = (T, f64)>,
        T: Clone,
    {
        let (values, probabilities): (Vec<T>, Vec<f64>) = choices.into_iter().unzip();
        Self::new(&values, &probabilities)
    }

    /// Map a point `r` of `[0, 1)` to its outcome.
    ///
    /// Returns the value of the first cumulative key strictly greater than
    /// `r`, so a key equal to `r` belongs to the following outcome.
    #[inline]
    pub fn locate(&self, r: f64) -> Result<&T, Exhausted> {
        let index = self.cumulative.partition_point(|&key| key <= r);
        match self.values.get(index) {
            Some(value) if r >= 0.0 => Ok(value),
            _ => Err(Exhausted {
                draw: r,
                total: self.total(),
            }),
        }
    }

    /// Number of configured outcomes, including unreachable ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Final cumulative key, i.e. the sum of all probabilities.
    #[inline]
    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or_default()
    }

    /// Outcomes in construction order.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// `(value, probability)` pairs in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> + '_ {
        let lower = core::iter::once(0.0).chain(self.cumulative.iter().copied());
        self.values
            .iter()
            .zip(self.cumulative.iter().zip(lower))
            .map(|(value, (upper, lower))| (value, upper - lower))
    }
}

impl<T> Generator for Discrete<T>
where
    T: Clone,
{
    type Item = Result<T, Exhausted>;

    #[inline]
    fn next_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Item {
        let r = rng.random::<f64>();
        match self.locate(r) {
            Ok(value) => Ok(value.clone()),
            Err(error) => {
                tracing::warn!(%error, "draw beyond final cumulative key");
                Err(error)
            }
        }
    }
}

fn validate(len: usize, probabilities: &[f64], tolerance: f64) -> Result<(), InvalidArgument> {
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(InvalidArgument::InvalidTolerance(tolerance));
    }

    if len != probabilities.len() {
        return Err(InvalidArgument::LengthMismatch {
            values: len,
            probabilities: probabilities.len(),
        });
    }

    let mut sum = 0.0;
    for (index, &probability) in probabilities.iter().enumerate() {
        if probability.is_nan() {
            return Err(InvalidArgument::NotANumber { index });
        }
        if probability < 0.0 {
            return Err(InvalidArgument::NegativeProbability { index, probability });
        }
        sum += probability;
    }

    if (sum - 1.0f64).abs() > tolerance {
        return Err(InvalidArgument::SumOutOfTolerance { sum, tolerance });
    }

    Ok(())
}
