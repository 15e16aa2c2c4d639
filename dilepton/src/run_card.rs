use crate::histogram::Histogram;
use crate::{Error, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

/// Binning of the lepton transverse momentum spectrum.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistogramCard {
    pub lower: f64,
    pub upper: f64,
    pub bins: usize,
    pub logarithmic: bool,
}

impl Default for HistogramCard {
    fn default() -> HistogramCard {
        HistogramCard {
            lower: 0.,
            upper: 400.,
            bins: 20,
            logarithmic: false,
        }
    }
}

impl HistogramCard {
    pub fn bin_edges(&self) -> Vec<f64> {
        if self.logarithmic {
            Histogram::log_bin_edges(self.lower, self.upper, self.bins)
        } else {
            Histogram::regular_bin_edges(self.lower, self.upper, self.bins)
        }
    }

    fn validate(&self) -> Result<()> {
        if self.bins == 0 {
            return Err(Error::InvalidRunCard(
                "pt_histogram needs at least one bin".to_owned(),
            ));
        }
        if !(self.lower.is_finite() && self.upper.is_finite() && self.lower < self.upper) {
            return Err(Error::InvalidRunCard(format!(
                "pt_histogram range [{}, {}) is empty",
                self.lower, self.upper
            )));
        }
        if self.logarithmic && self.lower <= 0. {
            return Err(Error::InvalidRunCard(format!(
                "logarithmic pt_histogram needs a positive lower edge, got {}",
                self.lower
            )));
        }
        Ok(())
    }
}

/// Run parameters. Every field is optional in the YAML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunCard {
    /// Hadronic centre-of-mass energy in GeV
    pub collider_energy: f64,
    pub n_events: u64,
    pub seed: u64,
    pub pt_histogram: HistogramCard,
}

impl Default for RunCard {
    fn default() -> RunCard {
        RunCard {
            collider_energy: 14000.,
            n_events: 1_000_000,
            seed: 5489,
            pt_histogram: HistogramCard::default(),
        }
    }
}

impl RunCard {
    /// Read and validate a run card.
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<RunCard> {
        let f = File::open(filename)?;
        let reader = BufReader::new(f);
        let card: RunCard = serde_yaml::from_reader(reader)?;
        card.validate()?;
        Ok(card)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.collider_energy.is_finite() && self.collider_energy > 0.) {
            return Err(Error::InvalidRunCard(format!(
                "collider_energy must be positive, got {}",
                self.collider_energy
            )));
        }
        if self.n_events == 0 {
            return Err(Error::InvalidRunCard(
                "n_events must be positive".to_owned(),
            ));
        }
        self.pt_histogram.validate()
    }
}

impl FromStr for RunCard {
    type Err = Error;

    fn from_str(s: &str) -> Result<RunCard> {
        let card: RunCard = serde_yaml::from_str(s)?;
        card.validate()?;
        Ok(card)
    }
}
