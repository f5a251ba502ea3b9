pub mod error;
pub mod generator;
pub mod table;
pub mod tally;

use bon::Builder;

pub use error::Error;
pub use error::Exhausted;
pub use error::InvalidArgument;
pub use error::Result;
pub use generator::Discrete;
pub use generator::Generator;
pub use tally::Tally;

/// One distribution: parallel outcomes and probabilities, plus the allowed
/// deviation of the probability sum from 1.
#[derive(Builder, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[builder(state_mod(vis = "pub"), derive(Clone, Debug))]
pub struct Table<T> {
    pub values: Vec<T>,

    pub probabilities: Vec<f64>,

    #[builder(default = default::tolerance())]
    #[cfg_attr(feature = "serde", serde(default = "default::tolerance"))]
    pub tolerance: f64,
}

impl<T: Clone> Table<T> {
    /// Validate this table and build a sampler over it.
    pub fn sampler(&self) -> core::result::Result<Discrete<T>, InvalidArgument> {
        Discrete::with_tolerance(&self.values, &self.probabilities, self.tolerance)
    }

    /// Build a sampler and tally `count` draws from this thread's generator.
    pub fn tally(&self, count: usize) -> Result<Tally<T>>
    where
        T: Eq + core::hash::Hash,
    {
        let sampler = self.sampler()?;
        Ok(Tally::draw(&sampler, &mut rand::rng(), count)?)
    }
}

#[rustfmt::skip]
mod default {
    use crate::generator::DEFAULT_TOLERANCE;

    pub(super) fn tolerance() -> f64 { DEFAULT_TOLERANCE }
}
