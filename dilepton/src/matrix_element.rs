use crate::event::Event;
use crate::rng::RandomStream;

/// A squared matrix element together with the flavor sampling of its process.
pub trait MatrixElement {
    /// Squared matrix element of a fully generated event, averaged over
    /// initial spins and colors and divided by the flavor selection
    /// probability of `assign_flavors`.
    fn evaluate(&self, event: &Event) -> f64;

    /// Resize `event` to the process multiplicity and choose its flavors.
    /// Called before any momenta are generated.
    fn assign_flavors(&self, event: &mut Event, rng: &mut dyn RandomStream);
}
