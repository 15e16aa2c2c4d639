use crate::event::Particle;
use crate::rng::RandomStream;
use std::f64::consts::PI;
use tracing::trace;
use vector::LorentzVector;

pub trait PhaseSpaceGenerator {
    /// Overwrite the momenta of `particles` with a point of total invariant
    /// mass squared `s` at rest, and return the phase-space weight.
    fn generate(&self, s: f64, rng: &mut dyn RandomStream, particles: &mut [Particle]) -> f64;
}

/// Uniform massless n-body phase space (RAMBO).
#[derive(Debug, Default, Copy, Clone)]
pub struct Rambo;

impl Rambo {
    pub const MAX_EXTERNAL: usize = 38;

    /// `fact[n] = (Gamma(n) Gamma(n-1))^(1/(n-2))`
    const FACT: [f64; Rambo::MAX_EXTERNAL] = [
        1.000000000000000000000, 1.000000000000000000000,
        1.000000000000000000000, 2.000000000000000000000,
        3.464101615137754587050, 5.241482788417793214280,
        7.325683002969412729490, 9.711867496604076595340,
        12.39635026120588892703, 15.37624008321082805550,
        18.64921022211253121271, 22.21334732883035904420,
        26.06704940665039454817, 30.20895473052848875326,
        34.63789090520187258023, 39.35283742689448285515,
        44.35289755618292354658, 49.63727677424801864857,
        55.20526599889455311234, 61.05622831083046240725,
        67.189588314900381553350, 73.604823510775700955150,
        80.301457218028968401580, 87.279052719104399855340,
        94.537208367699191038680, 102.07555347055500771508,
        109.89374479486319958781, 117.99146358623666580202,
        126.36841300677002588944, 135.02431592135521673949,
        143.95891297472152603605, 153.17196091274811705250,
        162.66323111025862674191, 172.43250827433702043364,
        182.47958929763210591531, 192.80428224046477961708,
        203.40640542405709375678, 214.28578662004717056856,
    ];

    /// Isotropic massless momentum with energy density `E exp(-E)`.
    fn random_momentum(rng: &mut dyn RandomStream) -> LorentzVector<f64> {
        let e = -(rng.uniform() * rng.uniform()).ln();
        let pz = e * (2. * rng.uniform() - 1.);
        let pt = (e * e - pz * pz).sqrt();
        let phi = 2. * PI * rng.uniform();
        let (sin_phi, cos_phi) = phi.sin_cos();

        LorentzVector::from_args(e, pt * cos_phi, pt * sin_phi, pz)
    }

    /// Volume of the massless `n`-body phase space at invariant mass squared
    /// `s`, including the `2 pi` factors.
    pub fn weight(n: usize, s: f64) -> f64 {
        assert!(
            n >= 2 && n < Rambo::MAX_EXTERNAL,
            "RAMBO supports 2 to {} particles, got {}",
            Rambo::MAX_EXTERNAL - 1,
            n
        );
        (s / (16. * PI * PI * Rambo::FACT[n])).powi(n as i32 - 2) / (8. * PI)
    }
}

impl PhaseSpaceGenerator for Rambo {
    fn generate(&self, s: f64, rng: &mut dyn RandomStream, particles: &mut [Particle]) -> f64 {
        let weight = Rambo::weight(particles.len(), s);

        let mut psum = LorentzVector::default();
        for p in particles.iter_mut() {
            p.momentum = Rambo::random_momentum(rng);
            psum += p.momentum;
        }

        // conformal transformation onto sqrt(s) at rest
        let x = s.sqrt() / psum.square().sqrt();
        let b = -psum.boost_vector();

        for p in particles.iter_mut() {
            p.momentum = p.momentum.boost(&b) * x;
        }

        trace!(n = particles.len(), s, weight, "generated RAMBO point");
        weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use approx::assert_relative_eq;

    fn check_point(n: usize, s: f64, seed: u64) {
        let mut rng = seeded(seed);
        let mut particles = vec![Particle::default(); n];

        for _ in 0..100 {
            Rambo.generate(s, &mut rng, &mut particles);

            let mut total = LorentzVector::default();
            for p in &particles {
                assert!(p.momentum.square().abs() < 1e-9 * s, "p^2 = {}", p.momentum.square());
                assert!(p.momentum.t > 0.);
                total += p.momentum;
            }

            assert_relative_eq!(total.square(), s, max_relative = 1e-10);
            assert_relative_eq!(total.t, s.sqrt(), max_relative = 1e-10);
            assert!(total.spatial_distance() < 1e-10 * s.sqrt());
        }
    }

    #[test]
    fn massless_and_on_shell() {
        check_point(2, 100., 1);
        check_point(3, 100., 2);
        check_point(5, 100., 3);
    }

    #[test]
    fn two_body_weight() {
        let mut rng = seeded(9);
        let mut particles = vec![Particle::default(); 2];
        let w = Rambo.generate(100., &mut rng, &mut particles);

        let expected = (100. / (16. * PI * PI * 1.0f64)).powi(0) / (8. * PI);
        assert_eq!(w, expected);
    }

    #[test]
    fn three_body_weight() {
        // s / (256 pi^3)
        assert_relative_eq!(
            Rambo::weight(3, 100.),
            100. / (256. * PI.powi(3)),
            max_relative = 1e-14
        );
    }

    #[test]
    fn fact_table_matches_gamma_functions() {
        // (Gamma(n) Gamma(n-1))^(1/(n-2)) = ((n-1)! (n-2)!)^(1/(n-2))
        let mut ln_fact = vec![0f64; Rambo::MAX_EXTERNAL];
        for k in 2..Rambo::MAX_EXTERNAL {
            ln_fact[k] = ln_fact[k - 1] + (k as f64).ln();
        }
        for n in 3..Rambo::MAX_EXTERNAL {
            let f = ((ln_fact[n - 1] + ln_fact[n - 2]) / (n - 2) as f64).exp();
            assert_relative_eq!(Rambo::FACT[n], f, max_relative = 1e-12);
        }
    }

    #[test]
    #[should_panic]
    fn single_particle_is_unsupported() {
        let mut rng = seeded(0);
        let mut particles = vec![Particle::default(); 1];
        Rambo.generate(100., &mut rng, &mut particles);
    }

    #[test]
    #[should_panic]
    fn too_many_particles() {
        Rambo::weight(Rambo::MAX_EXTERNAL, 1.);
    }
}
