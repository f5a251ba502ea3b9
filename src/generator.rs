use rand::Rng;

mod discrete;

pub use discrete::DEFAULT_TOLERANCE;
pub use discrete::Discrete;

pub trait Generator {
    type Item;

    fn next_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Item;

    /// Draw using this thread's generator.
    #[inline]
    fn next(&self) -> Self::Item {
        self.next_with(&mut rand::rng())
    }
}
