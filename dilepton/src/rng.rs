//! Random streams used by the samplers.
//!
//! Every sampling routine takes the stream as an explicit argument, so a run
//! is reproducible from its seed and independent workers can each own a
//! stream.

use rand::distributions::Open01;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform draws.
pub trait RandomStream {
    /// A uniform draw from the open interval `(0, 1)`.
    fn uniform(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomStream for R {
    #[inline]
    fn uniform(&mut self) -> f64 {
        self.sample(Open01)
    }
}

/// The generator used by the driver.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
