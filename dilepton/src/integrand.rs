use crate::analyser::Analyser;
use crate::event::Event;
use crate::matrix_element::MatrixElement;
use crate::pdf::PartonDistribution;
use crate::phase_space_generator::{PhaseSpaceGenerator, Rambo};
use crate::rng::RandomStream;
use tracing::{debug, warn};

/// Weighted hadronic events for a `2 -> n` process.
///
/// Each call assigns flavors, generates the kinematics and multiplies the
/// phase-space weight by both parton densities and the matrix element. The
/// event is reused between calls.
pub struct Integrand {
    collider_energy: f64,
    matrix_element: Box<dyn MatrixElement>,
    pdf_a: Box<dyn PartonDistribution>,
    pdf_b: Box<dyn PartonDistribution>,
    phase_space_generator: Box<dyn PhaseSpaceGenerator>,

    event: Event,
    weight: f64,
}

impl Integrand {
    pub fn new(
        collider_energy: f64,
        pdf_a: Box<dyn PartonDistribution>,
        pdf_b: Box<dyn PartonDistribution>,
        matrix_element: Box<dyn MatrixElement>,
    ) -> Integrand {
        Integrand::with_phase_space_generator(
            collider_energy,
            pdf_a,
            pdf_b,
            matrix_element,
            Box::new(Rambo),
        )
    }

    pub fn with_phase_space_generator(
        collider_energy: f64,
        pdf_a: Box<dyn PartonDistribution>,
        pdf_b: Box<dyn PartonDistribution>,
        matrix_element: Box<dyn MatrixElement>,
        phase_space_generator: Box<dyn PhaseSpaceGenerator>,
    ) -> Integrand {
        Integrand {
            collider_energy,
            matrix_element,
            pdf_a,
            pdf_b,
            phase_space_generator,
            event: Event::default(),
            weight: 0.,
        }
    }

    #[inline]
    pub fn collider_energy(&self) -> f64 {
        self.collider_energy
    }

    /// Generate the next event and return its weight.
    pub fn generate(&mut self, rng: &mut dyn RandomStream) -> f64 {
        self.matrix_element.assign_flavors(&mut self.event, rng);

        let mut weight =
            self.event
                .generate(self.collider_energy, &*self.phase_space_generator, rng);

        let ev = &self.event;
        let shat = (ev[-1].momentum + ev[0].momentum).square();
        weight *= self.pdf_a.parton(ev[-1].flavor, ev.xa, shat)
            * self.pdf_b.parton(ev[0].flavor, ev.xb, shat);
        weight *= self.matrix_element.evaluate(ev);

        if !weight.is_finite() {
            warn!(weight, xa = ev.xa, xb = ev.xb, "non-finite event weight");
        }
        debug!(weight, shat, "generated event");

        self.weight = weight;
        weight
    }

    /// Weight and kinematics of the most recent event.
    #[inline]
    pub fn last_event(&self) -> (f64, &Event) {
        (self.weight, &self.event)
    }

    /// Generate an event and pass it to every analyser in order.
    pub fn generate_and_analyse(
        &mut self,
        rng: &mut dyn RandomStream,
        analysers: &mut [&mut dyn Analyser],
    ) -> f64 {
        let weight = self.generate(rng);
        for a in analysers.iter_mut() {
            a.accumulate(&self.event, weight);
        }
        weight
    }
}
