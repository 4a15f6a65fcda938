use rayon::prelude::*;
use textplots::{Chart, Plot, Shape};

/// Terminal chart size in braille dots.
const CHART_WIDTH: u32 = 160;
const CHART_HEIGHT: u32 = 40;

/// Gaussian kernel density estimate over an ascending sample.
pub struct Kde<'a> {
    data: &'a [f64],
    bandwidth: f64,
}

impl<'a> Kde<'a> {
    /// Bandwidth from Silverman's rule of thumb: h = 1.06 * sd * n^(-1/5).
    ///
    /// `None` for an empty sample or zero spread, where no density exists.
    pub fn new(sorted: &'a [f64], std_dev: f64) -> Option<Self> {
        if sorted.is_empty() {
            return None;
        }

        let n = sorted.len() as f64;
        let bandwidth = 1.06 * std_dev * n.powf(-0.2);
        if !(bandwidth > 0.0) {
            return None;
        }

        Some(Kde {
            data: sorted,
            bandwidth,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Evaluate the probability density function at point x
    pub fn pdf(&self, x: f64) -> f64 {
        let n = self.data.len() as f64;
        let h = self.bandwidth;

        // Kernel contribution beyond 4 bandwidths is below 0.00003
        let cutoff = 4.0 * h;
        let start = self.data.partition_point(|&xi| xi < x - cutoff);
        let end = self.data.partition_point(|&xi| xi <= x + cutoff);

        let sum: f64 = self.data[start..end]
            .iter()
            .map(|&xi| gaussian_kernel((x - xi) / h))
            .sum();

        sum / (n * h)
    }

    /// Data range padded by 10% on each side, clamped at 0 for non-negative data.
    pub fn bounds(&self) -> (f64, f64) {
        let min = self.data[0];
        let max = self.data[self.data.len() - 1];
        let padding = (max - min) * 0.1;

        let lower = if min >= 0.0 {
            (min - padding).max(0.0)
        } else {
            min - padding
        };

        (lower, max + padding)
    }

    /// Density sampled at `width` evenly spaced points across [`Kde::bounds`].
    pub fn curve(&self, width: usize) -> Vec<(f32, f32)> {
        let (lo, hi) = self.bounds();
        let steps = width.saturating_sub(1).max(1) as f64;

        (0..width)
            .into_par_iter()
            .map(|i| {
                let x = lo + (hi - lo) * (i as f64 / steps);
                (x as f32, self.pdf(x) as f32)
            })
            .collect()
    }
}

/// Draws the density of `sorted` to stdout. Returns false when there is
/// nothing to draw (constant or empty data).
pub fn plot_density(sorted: &[f64], std_dev: f64) -> bool {
    let Some(kde) = Kde::new(sorted, std_dev) else {
        return false;
    };

    let (lo, hi) = kde.bounds();
    let points = kde.curve(CHART_WIDTH as usize);

    Chart::new(CHART_WIDTH, CHART_HEIGHT, lo as f32, hi as f32)
        .lineplot(&Shape::Lines(&points))
        .nice();
    true
}

/// Standard Gaussian kernel: K(u) = (1/√(2π)) * e^(-u²/2)
fn gaussian_kernel(u: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.3989422804014327;
    INV_SQRT_2PI * (-0.5 * u * u).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_kernel_peak() {
        assert!((gaussian_kernel(0.0) - 0.3989422804014327).abs() < 1e-12);
        assert_eq!(gaussian_kernel(1.5), gaussian_kernel(-1.5));
    }

    #[test]
    fn test_silverman_bandwidth() {
        let data: Vec<f64> = (1..=32).map(|i| i as f64).collect();
        let kde = Kde::new(&data, 2.0).unwrap();

        // 32^(-1/5) = 0.5
        assert!((kde.bandwidth() - 1.06).abs() < 1e-12);
    }

    #[test]
    fn test_constant_data_has_no_density() {
        assert!(Kde::new(&[5.0, 5.0, 5.0], 0.0).is_none());
        assert!(Kde::new(&[], 1.0).is_none());
        assert!(!plot_density(&[5.0, 5.0], 0.0));
    }

    #[test]
    fn test_density_integrates_to_one() {
        let data = vec![1.0, 2.0, 2.5, 3.0, 7.0];
        let kde = Kde::new(&data, 2.3).unwrap();

        let (lo, hi) = (-20.0, 30.0);
        let steps = 5000;
        let dx = (hi - lo) / steps as f64;
        let area: f64 = (0..steps).map(|i| kde.pdf(lo + (i as f64 + 0.5) * dx) * dx).sum();

        assert!((area - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_bounds_clamped_for_positive_data() {
        let data = vec![1.0, 2.0, 100.0];
        let kde = Kde::new(&data, 10.0).unwrap();
        let (lo, hi) = kde.bounds();

        assert_eq!(lo, 0.0);
        assert!((hi - 109.9).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_negative_data() {
        let data = vec![-10.0, 0.0, 10.0];
        let kde = Kde::new(&data, 10.0).unwrap();

        let (lo, hi) = kde.bounds();

        assert!((lo + 12.0).abs() < 1e-9);
        assert!((hi - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_curve_width() {
        let data = vec![1.0, 2.0, 3.0];
        let kde = Kde::new(&data, 1.0).unwrap();
        let curve = kde.curve(160);

        assert_eq!(curve.len(), 160);
        assert!(curve.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(curve.iter().all(|&(_, y)| y >= 0.0));
    }
}
