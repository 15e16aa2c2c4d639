use crate::event::Event;
use crate::flavor::Flavor;
use crate::matrix_element::MatrixElement;
use crate::rng::RandomStream;
use std::f64::consts::PI;

#[inline]
fn sqr(x: f64) -> f64 {
    x * x
}

/// Toy `q qbar -> e- e+` through a heavy vector boson.
#[derive(Debug, Default, Copy, Clone)]
pub struct PpToLLbar;

impl PpToLLbar {
    /// Boson mass
    const MASS: f64 = 270.0;
    /// Boson width
    const WIDTH: f64 = 17.0;
    const ALPHA: f64 = 1.0 / 129.0;
    /// Lepton vector and axial couplings
    const LEPTON_V: f64 = 2.65;
    const LEPTON_A: f64 = 0.73;

    const QUARKS: [Flavor; 5] = [
        Flavor::Up,
        Flavor::Down,
        Flavor::Strange,
        Flavor::Charm,
        Flavor::Bottom,
    ];

    /// Vector and axial couplings of the quark with flavor `f`.
    fn quark_couplings(f: Flavor) -> (f64, f64) {
        if f.code().abs() % 2 == 0 {
            (5.3, 3.6)
        } else {
            (-3.9, -4.2)
        }
    }
}

impl MatrixElement for PpToLLbar {
    fn evaluate(&self, ev: &Event) -> f64 {
        let (vq, aq) = (PpToLLbar::LEPTON_V, PpToLLbar::LEPTON_A);
        let (vp, ap) = PpToLLbar::quark_couplings(ev[0].flavor);

        let (p, pbar) = if ev[-1].flavor.is_antiparticle() {
            (&ev[0].momentum, &ev[-1].momentum)
        } else {
            (&ev[-1].momentum, &ev[0].momentum)
        };
        let qbar = &ev[1].momentum;
        let q = &ev[2].momentum;

        let m2 = sqr(PpToLLbar::MASS);
        let q2 = 2. * p.dot(pbar);
        let bw = 1. / (sqr(q2 - m2) + sqr(PpToLLbar::MASS * PpToLLbar::WIDTH));
        let factor = 32. * 3.0 * sqr(4. * PI * PpToLLbar::ALPHA) * bw;

        let mut me2 = factor
            * ((sqr(vp * aq + vq * ap) + sqr(vp * vq + ap * aq)) * p.dot(qbar) * pbar.dot(q)
                + (sqr(vp * aq - vq * ap) + sqr(vp * vq - ap * aq)) * pbar.dot(qbar) * p.dot(q));

        // average over spins and colors
        me2 /= 2.0 * 3.0 * 3.0;

        // undo the flavor (1/5) and beam (1/2) selection probabilities
        me2 *= 2.0 * 5.0;

        me2
    }

    fn assign_flavors(&self, ev: &mut Event, rng: &mut dyn RandomStream) {
        ev.resize(2);

        ev[1].flavor = Flavor::Electron;
        ev[2].flavor = Flavor::Positron;

        let i = ((PpToLLbar::QUARKS.len() as f64 * rng.uniform()) as usize)
            .min(PpToLLbar::QUARKS.len() - 1);
        let quark = PpToLLbar::QUARKS[i];

        if rng.uniform() < 0.5 {
            ev[-1].flavor = quark;
            ev[0].flavor = -quark;
        } else {
            ev[-1].flavor = -quark;
            ev[0].flavor = quark;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase_space_generator::Rambo;
    use crate::rng::seeded;
    use std::collections::HashMap;

    #[test]
    fn flavors_are_a_quark_pair_and_a_lepton_pair() {
        let mut rng = seeded(1);
        let mut ev = Event::new(5);
        let mut counts = HashMap::new();
        let mut quark_first = 0;
        let n = 20000;

        for _ in 0..n {
            PpToLLbar.assign_flavors(&mut ev, &mut rng);
            assert_eq!(ev.number_of_outgoings(), 2);
            assert_eq!(ev[1].flavor, Flavor::Electron);
            assert_eq!(ev[2].flavor, Flavor::Positron);
            assert_eq!(ev[-1].flavor, -ev[0].flavor);
            assert!(ev[-1].flavor.is_quark());

            if !ev[-1].flavor.is_antiparticle() {
                quark_first += 1;
            }
            *counts.entry(ev[-1].flavor.code().abs()).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 5);
        for (_, c) in counts {
            assert!((c as f64 / n as f64 - 0.2).abs() < 0.02);
        }
        assert!((quark_first as f64 / n as f64 - 0.5).abs() < 0.02);
    }

    #[test]
    fn symmetric_under_beam_exchange() {
        let mut rng = seeded(2);
        let mut ev = Event::new(2);

        for _ in 0..100 {
            PpToLLbar.assign_flavors(&mut ev, &mut rng);
            ev.generate(14000., &Rambo, &mut rng);
            let me = PpToLLbar.evaluate(&ev);
            assert!(me.is_finite() && me >= 0.);

            let mut swapped = ev.clone();
            swapped[-1] = ev[0];
            swapped[0] = ev[-1];
            let me_swapped = PpToLLbar.evaluate(&swapped);
            assert!((me - me_swapped).abs() <= 1e-12 * me.abs());
        }
    }

    #[test]
    fn resonance_enhances_the_matrix_element() {
        let mut ev = Event::new(2);
        let mut rng = seeded(3);
        PpToLLbar.assign_flavors(&mut ev, &mut rng);

        let me_at = |sqrt_s: f64, ev: &mut Event| {
            let e = 0.5 * sqrt_s;
            ev[-1].momentum = vector::LorentzVector::from_args(e, 0., 0., e);
            ev[0].momentum = vector::LorentzVector::from_args(e, 0., 0., -e);
            ev[1].momentum = vector::LorentzVector::from_args(e, e, 0., 0.);
            ev[2].momentum = vector::LorentzVector::from_args(e, -e, 0., 0.);
            PpToLLbar.evaluate(ev)
        };

        let on_peak = me_at(PpToLLbar::MASS, &mut ev);
        assert!(on_peak > me_at(0.5 * PpToLLbar::MASS, &mut ev));
        assert!(on_peak > me_at(2. * PpToLLbar::MASS, &mut ev));
    }
}
