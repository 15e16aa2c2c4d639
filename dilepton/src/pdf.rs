use crate::flavor::Flavor;

/// Parton density of an incoming hadron.
///
/// The bounds describe where the density is meant to be used. They are not
/// enforced by the integrand.
pub trait PartonDistribution {
    /// Density of `flavor` at momentum fraction `x` and scale `q2`.
    fn parton(&self, flavor: Flavor, x: f64, q2: f64) -> f64;

    fn q2min(&self) -> f64;

    fn q2max(&self) -> f64;

    fn xmin(&self) -> f64;
}

/// A flat toy hadron: every parton has density one.
#[derive(Debug, Default, Copy, Clone)]
pub struct ToyHadron;

impl PartonDistribution for ToyHadron {
    fn parton(&self, _flavor: Flavor, _x: f64, _q2: f64) -> f64 {
        1.
    }

    fn q2min(&self) -> f64 {
        1.
    }

    fn q2max(&self) -> f64 {
        1e20
    }

    fn xmin(&self) -> f64 {
        1e-8
    }
}

/// The antihadron of `P`, obtained by charge conjugating the flavor.
#[derive(Debug, Default, Copy, Clone)]
pub struct AntiHadron<P: PartonDistribution> {
    hadron: P,
}

impl<P: PartonDistribution> AntiHadron<P> {
    pub fn new(hadron: P) -> AntiHadron<P> {
        AntiHadron { hadron }
    }
}

impl<P: PartonDistribution> PartonDistribution for AntiHadron<P> {
    fn parton(&self, flavor: Flavor, x: f64, q2: f64) -> f64 {
        self.hadron.parton(-flavor, x, q2)
    }

    fn q2min(&self) -> f64 {
        self.hadron.q2min()
    }

    fn q2max(&self) -> f64 {
        self.hadron.q2max()
    }

    fn xmin(&self) -> f64 {
        self.hadron.xmin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Distinguishes flavors, scales and momentum fractions.
    struct Skewed;

    impl PartonDistribution for Skewed {
        fn parton(&self, flavor: Flavor, x: f64, q2: f64) -> f64 {
            (flavor.code() as f64 + 20.) * (1. - x).powi(3) * q2.ln()
        }

        fn q2min(&self) -> f64 {
            2.
        }

        fn q2max(&self) -> f64 {
            3.
        }

        fn xmin(&self) -> f64 {
            0.5
        }
    }

    #[test]
    fn antihadron_conjugates_flavor() {
        let anti = AntiHadron::new(Skewed);
        for code in -12..=12 {
            let f = match Flavor::from_code(code) {
                Some(f) => f,
                None => continue,
            };
            for &x in &[1e-6, 0.1, 0.5, 0.99] {
                for &q2 in &[1.5, 100., 1e8] {
                    assert_eq!(anti.parton(f, x, q2), Skewed.parton(-f, x, q2));
                }
            }
        }
    }

    #[test]
    fn antihadron_delegates_bounds() {
        let anti = AntiHadron::new(Skewed);
        assert_eq!(anti.q2min(), 2.);
        assert_eq!(anti.q2max(), 3.);
        assert_eq!(anti.xmin(), 0.5);

        let toy = AntiHadron::new(ToyHadron);
        assert_eq!(toy.parton(Flavor::Up, 0.3, 10.), 1.);
        assert_eq!(toy.xmin(), 1e-8);
    }
}
