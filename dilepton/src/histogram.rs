use crate::{Error, Result};
use std::io::Write;

/// Running sums of weights and squared weights.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Bin {
    pub sum_of_weights: f64,
    pub sum_of_squared_weights: f64,
}

impl Bin {
    #[inline]
    pub fn count(&mut self, weight: f64) {
        self.sum_of_weights += weight;
        self.sum_of_squared_weights += weight * weight;
    }

    /// Monte-Carlo estimate over `n` events.
    pub fn mean(&self, n: u64) -> f64 {
        self.sum_of_weights / n as f64
    }

    /// Statistical error of [`Bin::mean`].
    pub fn error(&self, n: u64) -> f64 {
        let n = n as f64;
        let mean = self.sum_of_weights / n;
        let variance = (self.sum_of_squared_weights / n - mean * mean).max(0.);
        (variance / n).sqrt()
    }
}

/// A one-dimensional weighted histogram with bins `[edges[k], edges[k + 1])`.
#[derive(Debug, Clone)]
pub struct Histogram {
    name: String,
    edges: Vec<f64>,
    bins: Vec<Bin>,
}

impl Histogram {
    pub fn new(name: &str, edges: Vec<f64>) -> Result<Histogram> {
        if edges.len() < 2 {
            return Err(Error::InvalidBinning(format!(
                "{} needs at least two bin edges",
                name
            )));
        }
        if edges.windows(2).any(|w| !(w[0] < w[1])) {
            return Err(Error::InvalidBinning(format!(
                "bin edges of {} must be strictly increasing",
                name
            )));
        }

        Ok(Histogram::new_unchecked(name, edges))
    }

    /// `edges` must hold at least two strictly increasing values.
    pub(crate) fn new_unchecked(name: &str, edges: Vec<f64>) -> Histogram {
        debug_assert!(edges.len() >= 2 && edges.windows(2).all(|w| w[0] < w[1]));
        Histogram {
            name: name.to_owned(),
            bins: vec![Bin::default(); edges.len() - 1],
            edges,
        }
    }

    /// `n_bins + 1` equally spaced edges from `lower` to `upper`.
    pub fn regular_bin_edges(lower: f64, upper: f64, n_bins: usize) -> Vec<f64> {
        let step = (upper - lower) / n_bins as f64;
        (0..=n_bins).map(|k| lower + k as f64 * step).collect()
    }

    /// `n_bins + 1` logarithmically spaced edges from `lower` to `upper`.
    pub fn log_bin_edges(lower: f64, upper: f64, n_bins: usize) -> Vec<f64> {
        let step = (upper / lower).log10() / n_bins as f64;
        (0..=n_bins)
            .map(|k| lower * 10f64.powf(k as f64 * step))
            .collect()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    #[inline]
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Add `weight` to the bin containing `observable`. Values outside the
    /// histogram range are dropped.
    pub fn accumulate(&mut self, observable: f64, weight: f64) {
        let (lower, upper) = (self.edges[0], self.edges[self.edges.len() - 1]);
        if !(observable >= lower && observable < upper) {
            return;
        }

        let k = self.edges.partition_point(|e| *e <= observable) - 1;
        self.bins[k].count(weight);
    }

    /// Write the differential distribution normalised to `n_events`, one
    /// line `lower upper value error` per bin.
    pub fn print(&self, w: &mut dyn Write, n_events: u64) -> Result<()> {
        if n_events == 0 {
            return Err(Error::NoEvents);
        }

        writeln!(w, "#   {}", self.name)?;
        for (bin, e) in self.bins.iter().zip(self.edges.windows(2)) {
            let dx = e[1] - e[0];
            writeln!(
                w,
                "{}  {}  {:e}  {:e}",
                e[0],
                e[1],
                bin.mean(n_events) / dx,
                bin.error(n_events) / dx
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::SQRT_2;

    #[test]
    fn regular_edges() {
        let edges = Histogram::regular_bin_edges(0., 400., 20);
        assert_eq!(edges.len(), 21);
        assert_eq!(edges[0], 0.);
        assert_eq!(edges[1], 20.);
        assert_eq!(edges[20], 400.);
    }

    #[test]
    fn log_edges() {
        let edges = Histogram::log_bin_edges(1., 1000., 3);
        assert_eq!(edges.len(), 4);
        assert_relative_eq!(edges[1], 10., max_relative = 1e-12);
        assert_relative_eq!(edges[3], 1000., max_relative = 1e-12);
    }

    #[test]
    fn binning_is_half_open() {
        let mut h = Histogram::new("test", vec![0., 1., 2., 4.]).unwrap();
        h.accumulate(0., 1.);
        h.accumulate(1., 2.);
        h.accumulate(1.5, 3.);
        h.accumulate(3.999, 4.);
        h.accumulate(4., 100.);
        h.accumulate(-0.1, 100.);
        h.accumulate(f64::NAN, 100.);

        let sums: Vec<f64> = h.bins().iter().map(|b| b.sum_of_weights).collect();
        assert_eq!(sums, vec![1., 5., 4.]);
        assert_eq!(h.bins()[1].sum_of_squared_weights, 13.);
    }

    #[test]
    fn rejects_bad_edges() {
        assert!(Histogram::new("empty", vec![1.]).is_err());
        assert!(Histogram::new("unsorted", vec![0., 2., 1.]).is_err());
        assert!(Histogram::new("duplicate", vec![0., 1., 1.]).is_err());
    }

    #[test]
    fn bin_statistics() {
        let mut b = Bin::default();
        for w in &[1., 3., 1., 3.] {
            b.count(*w);
        }
        assert_eq!(b.mean(4), 2.);
        // population variance 1, error sqrt(1/4)
        assert_relative_eq!(b.error(4), 0.5);
    }

    #[test]
    fn print_normalises_by_bin_width() {
        let mut h = Histogram::new("pT", vec![0., 2., 3.]).unwrap();
        h.accumulate(1., 4.);
        h.accumulate(2.5, 4.);

        let mut out = Vec::new();
        h.print(&mut out, 2).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "#   pT");
        let first: Vec<f64> = lines[1].split_whitespace().map(|v| v.parse().unwrap()).collect();
        assert_eq!(first, vec![0., 2., 1., SQRT_2 / 2.]);
        let second: Vec<f64> = lines[2].split_whitespace().map(|v| v.parse().unwrap()).collect();
        assert_eq!(second, vec![2., 3., 2., SQRT_2]);
    }

    #[test]
    fn print_without_events_fails() {
        let h = Histogram::new("pT", vec![0., 1.]).unwrap();
        let mut out = Vec::new();
        assert!(matches!(h.print(&mut out, 0), Err(Error::NoEvents)));
    }
}
