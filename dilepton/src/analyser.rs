use crate::event::Event;
use crate::histogram::{Bin, Histogram};
use crate::{Error, Result};
use std::io::Write;

/// Consumes weighted events and reports an observable.
pub trait Analyser {
    fn analyse(&mut self, event: &Event, weight: f64);

    /// Number of events passed to [`Analyser::accumulate`] so far.
    fn number_of_events(&self) -> u64;

    fn increment_number_of_events(&mut self);

    fn report(&self, w: &mut dyn Write) -> Result<()>;

    /// Analyse an event and count it.
    fn accumulate(&mut self, event: &Event, weight: f64) {
        self.analyse(event, weight);
        self.increment_number_of_events();
    }
}

/// Mean event weight and its statistical error.
#[derive(Debug, Default, Clone)]
pub struct TotalCrossSection {
    bin: Bin,
    n_events: u64,
}

impl TotalCrossSection {
    pub fn new() -> TotalCrossSection {
        TotalCrossSection::default()
    }

    /// Current estimate and error.
    pub fn value(&self) -> Result<(f64, f64)> {
        if self.n_events == 0 {
            return Err(Error::NoEvents);
        }
        Ok((self.bin.mean(self.n_events), self.bin.error(self.n_events)))
    }
}

impl Analyser for TotalCrossSection {
    fn analyse(&mut self, _event: &Event, weight: f64) {
        self.bin.count(weight);
    }

    fn number_of_events(&self) -> u64 {
        self.n_events
    }

    fn increment_number_of_events(&mut self) {
        self.n_events += 1;
    }

    fn report(&self, w: &mut dyn Write) -> Result<()> {
        let (mean, error) = self.value()?;
        writeln!(w, "Total cross section is {:e} +/- {:e}", mean, error)?;
        Ok(())
    }
}

/// Transverse momentum spectrum of the first outgoing particle.
#[derive(Debug, Clone)]
pub struct PtDistribution {
    histogram: Histogram,
    n_events: u64,
}

impl PtDistribution {
    pub const NAME: &'static str = "lepton pT distribution";

    pub fn new(edges: Vec<f64>) -> Result<PtDistribution> {
        Ok(PtDistribution {
            histogram: Histogram::new(PtDistribution::NAME, edges)?,
            n_events: 0,
        })
    }

    #[inline]
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }
}

impl Default for PtDistribution {
    /// 20 bins of 20 GeV.
    fn default() -> PtDistribution {
        PtDistribution {
            histogram: Histogram::new_unchecked(
                PtDistribution::NAME,
                Histogram::regular_bin_edges(0., 400., 20),
            ),
            n_events: 0,
        }
    }
}

impl Analyser for PtDistribution {
    fn analyse(&mut self, event: &Event, weight: f64) {
        self.histogram.accumulate(event[1].momentum.pt(), weight);
    }

    fn number_of_events(&self) -> u64 {
        self.n_events
    }

    fn increment_number_of_events(&mut self) {
        self.n_events += 1;
    }

    fn report(&self, w: &mut dyn Write) -> Result<()> {
        self.histogram.print(w, self.n_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vector::LorentzVector;

    fn event_with_pt(pt: f64) -> Event {
        let mut ev = Event::new(2);
        ev[1].momentum = LorentzVector::from_args(pt, pt, 0., 0.);
        ev[2].momentum = LorentzVector::from_args(pt, -pt, 0., 0.);
        ev
    }

    #[test]
    fn cross_section_mean_and_error() {
        let ev = Event::new(2);
        let mut xs = TotalCrossSection::new();
        for w in &[1., 3., 1., 3.] {
            xs.accumulate(&ev, *w);
        }

        assert_eq!(xs.number_of_events(), 4);
        let (mean, error) = xs.value().unwrap();
        assert_eq!(mean, 2.);
        assert_relative_eq!(error, 0.5);

        let mut out = Vec::new();
        xs.report(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Total cross section is 2e0 +/- 5e-1\n");
    }

    #[test]
    fn analyse_alone_does_not_count() {
        let ev = Event::new(2);
        let mut xs = TotalCrossSection::new();
        xs.analyse(&ev, 1.);
        assert_eq!(xs.number_of_events(), 0);
        assert!(matches!(xs.report(&mut Vec::new()), Err(Error::NoEvents)));
    }

    #[test]
    fn pt_histogram_of_first_lepton() {
        let mut pt = PtDistribution::default();
        assert_eq!(pt.histogram().bins().len(), 20);
        assert_eq!(pt.histogram().name(), "lepton pT distribution");

        pt.accumulate(&event_with_pt(10.), 2.);
        pt.accumulate(&event_with_pt(45.), 3.);
        pt.accumulate(&event_with_pt(500.), 7.);

        assert_eq!(pt.number_of_events(), 3);
        let bins = pt.histogram().bins();
        assert_eq!(bins[0].sum_of_weights, 2.);
        assert_eq!(bins[2].sum_of_weights, 3.);
        let total: f64 = bins.iter().map(|b| b.sum_of_weights).sum();
        assert_eq!(total, 5.);

        let mut out = Vec::new();
        pt.report(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 21);
        assert!(text.starts_with("#   lepton pT distribution\n"));
    }

    #[test]
    fn custom_binning() {
        let pt = PtDistribution::new(vec![0., 50., 100.]).unwrap();
        assert_eq!(pt.histogram().edges(), &[0., 50., 100.]);
        assert!(PtDistribution::new(vec![100., 50.]).is_err());
    }
}
