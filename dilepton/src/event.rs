use crate::flavor::Flavor;
use crate::phase_space_generator::PhaseSpaceGenerator;
use crate::rng::RandomStream;
use serde::Serialize;
use std::fmt;
use std::ops::{Index, IndexMut};
use vector::{LorentzVector, ThreeVector};

/// A particle has a flavor and a momentum.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize)]
pub struct Particle {
    pub flavor: Flavor,
    pub momentum: LorentzVector<f64>,
}

impl Particle {
    pub fn new(flavor: Flavor, momentum: LorentzVector<f64>) -> Particle {
        Particle { flavor, momentum }
    }
}

/// Two incoming partons and `n` outgoing particles.
///
/// Indexing is by signed offset: `-1` and `0` are the incoming partons and
/// `1..=n` the outgoing particles, regardless of how often the event is
/// resized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Event {
    /// Momentum fraction of the parton at index `-1`.
    pub xa: f64,
    /// Momentum fraction of the parton at index `0`.
    pub xb: f64,
    incoming: [Particle; 2],
    outgoing: Vec<Particle>,
}

impl Event {
    pub fn new(n_outgoing: usize) -> Event {
        Event {
            xa: 0.,
            xb: 0.,
            incoming: [Particle::default(); 2],
            outgoing: vec![Particle::default(); n_outgoing],
        }
    }

    /// Change the number of outgoing particles. The incoming pair is untouched.
    pub fn resize(&mut self, n_outgoing: usize) {
        self.outgoing.resize(n_outgoing, Particle::default());
    }

    #[inline]
    pub fn number_of_outgoings(&self) -> usize {
        self.outgoing.len()
    }

    #[inline]
    pub fn incoming(&self) -> &[Particle; 2] {
        &self.incoming
    }

    #[inline]
    pub fn outgoing(&self) -> &[Particle] {
        &self.outgoing
    }

    #[inline]
    pub fn outgoing_mut(&mut self) -> &mut [Particle] {
        &mut self.outgoing
    }

    /// All particles, incoming first.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.incoming.iter().chain(self.outgoing.iter())
    }

    pub fn total_incoming(&self) -> LorentzVector<f64> {
        self.incoming.iter().map(|p| &p.momentum).sum()
    }

    pub fn total_outgoing(&self) -> LorentzVector<f64> {
        self.outgoing.iter().map(|p| &p.momentum).sum()
    }

    /// Generate a hadronic event with collider energy `e_cm` and return its
    /// weight, phase space divided by the flux factor.
    ///
    /// The parton momentum fractions are drawn uniformly, the outgoing
    /// particles are generated by `psg` in the partonic centre-of-mass frame
    /// and then boosted along the beam axis to the laboratory frame. The
    /// flavors and the outgoing count must be set beforehand.
    pub fn generate(
        &mut self,
        e_cm: f64,
        psg: &dyn PhaseSpaceGenerator,
        rng: &mut dyn RandomStream,
    ) -> f64 {
        self.xa = rng.uniform();
        self.xb = rng.uniform();

        self.incoming[0].momentum = LorentzVector::from_args(e_cm, 0., 0., -e_cm) * (0.5 * self.xa);
        self.incoming[1].momentum = LorentzVector::from_args(e_cm, 0., 0., e_cm) * (0.5 * self.xb);

        let s = self.xa * self.xb * e_cm * e_cm;
        let mut weight = psg.generate(s, rng, &mut self.outgoing);

        let bz = (self.xb - self.xa) / (self.xa + self.xb);
        if bz != 0. {
            let boost = ThreeVector::from_args(0., 0., bz);
            for p in &mut self.outgoing {
                p.momentum = p.momentum.boost(&boost);
            }
        }

        // flux factor
        weight /= 2. * s;
        weight
    }

    #[inline]
    fn offset(&self, index: isize) -> usize {
        assert!(
            index >= -1 && index <= self.outgoing.len() as isize,
            "particle index {} outside -1..={}",
            index,
            self.outgoing.len()
        );
        (index + 1) as usize
    }
}

impl Index<isize> for Event {
    type Output = Particle;

    fn index(&self, index: isize) -> &Particle {
        match self.offset(index) {
            i @ 0..=1 => &self.incoming[i],
            i => &self.outgoing[i - 2],
        }
    }
}

impl IndexMut<isize> for Event {
    fn index_mut(&mut self, index: isize) -> &mut Particle {
        match self.offset(index) {
            i @ 0..=1 => &mut self.incoming[i],
            i => &mut self.outgoing[i - 2],
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "xa = {:.16e}, xb = {:.16e}", self.xa, self.xb)?;
        writeln!(f, "  #  flavor          E                        p_x                      p_y                      p_z                      M^2")?;
        writeln!(f, " --------------------------------------------------------------------------------------------------------------------------------------")?;

        for (i, p) in self.iter().enumerate() {
            let m = &p.momentum;
            writeln!(
                f,
                " {:>2}  {:<10}{:25.16e}{:25.16e}{:25.16e}{:25.16e}{:25.16e}",
                i as isize - 1,
                p.flavor,
                m.t,
                m.x,
                m.y,
                m.z,
                m.square()
            )?;
        }
        writeln!(f, " --------------------------------------------------------------------------------------------------------------------------------------")?;

        let (itot, otot) = (self.total_incoming(), self.total_outgoing());
        writeln!(f, " Total incoming momentum: {:e}", itot)?;
        writeln!(f, " Total outgoing momentum: {:e}", otot)?;
        writeln!(f, " Momentum conservation:   {:e}", itot - otot)
    }
}
