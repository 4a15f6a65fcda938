//! Compact one-line encodings of a sample's shape.
//!
//! The histogram buckets by value and is order-independent. The trendline
//! buckets by input position and must be fed the sample in its original order.

/// Intensity palette, lowest to highest.
pub const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Map bucket counts onto the palette relative to the fullest bucket.
fn render_counts(counts: &[usize]) -> String {
    let max_count = counts.iter().copied().max().unwrap_or(0);

    counts
        .iter()
        .map(|&count| {
            if count == 0 || max_count == 0 {
                BLOCKS[0]
            } else {
                BLOCKS[(count * (BLOCKS.len() - 1) / max_count).min(BLOCKS.len() - 1)]
            }
        })
        .collect()
}

/// Value-range histogram of an ascending sample.
///
/// Empty when there are fewer than two values or the range is zero.
pub fn histogram(sorted: &[f64], bins: usize) -> String {
    if sorted.len() < 2 || bins == 0 {
        return String::new();
    }

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    if min == max {
        return String::new();
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];

    for &x in sorted {
        // Clamp so the maximum lands in the last bucket
        let idx = (((x - min) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    render_counts(&counts)
}

/// Mean of each of `chunks` contiguous, near-equal slices of `data`.
fn chunk_means(data: &[f64], chunks: usize) -> Vec<f64> {
    let n = data.len();

    (0..chunks)
        .map(|i| {
            let start = i * n / chunks;
            let end = (i + 1) * n / chunks;
            let chunk = &data[start..end];
            chunk.iter().sum::<f64>() / chunk.len() as f64
        })
        .collect()
}

/// Positional trendline of a sample in input order.
///
/// The sample is split into `bins` contiguous chunks (fewer if there are
/// fewer values than bins) and each chunk mean is scaled between the lowest
/// and highest chunk mean. Empty when there are fewer than two values or all
/// chunk means are equal.
pub fn trendline(data: &[f64], bins: usize) -> String {
    if data.len() < 2 || bins == 0 {
        return String::new();
    }

    let means = chunk_means(data, bins.min(data.len()));

    let min = means.iter().copied().fold(f64::INFINITY, f64::min);
    let max = means.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return String::new();
    }

    let top = BLOCKS.len() - 1;
    means
        .iter()
        .map(|&m| {
            // The highest mean always gets the top glyph, whatever the rounding
            let level = if m >= max {
                top
            } else {
                ((m - min) * top as f64 / (max - min)).floor() as usize
            };
            BLOCKS[level.min(top)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(s: &str) -> Vec<usize> {
        s.chars()
            .map(|c| BLOCKS.iter().position(|&b| b == c).unwrap())
            .collect()
    }

    #[test]
    fn test_histogram_uniform() {
        let data: Vec<f64> = (1..=16).map(|i| i as f64).collect();
        assert_eq!(histogram(&data, 16), "████████████████");
    }

    #[test]
    fn test_histogram_width_matches_bins() {
        let data: Vec<f64> = (0..100).map(|i| (i as f64).sqrt()).collect();

        assert_eq!(histogram(&data, 8).chars().count(), 8);
        assert_eq!(histogram(&data, 50).chars().count(), 50);
    }

    #[test]
    fn test_histogram_skewed() {
        let data = vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 10.0];
        let result = histogram(&data, 5);

        // 8 values in the first bucket, nothing in the middle, one at the top
        assert_eq!(result, "█▁▁▁▁");
        assert_eq!(levels(&result), vec![7, 0, 0, 0, 0]);
    }

    #[test]
    fn test_histogram_sparse_bucket_keeps_low_glyph() {
        let mut data = vec![0.0; 20];
        data.push(10.0);
        let result = histogram(&data, 5);

        // One value against twenty rounds down to the lowest level
        assert_eq!(levels(&result), vec![7, 0, 0, 0, 0]);
    }

    #[test]
    fn test_histogram_degenerate() {
        assert_eq!(histogram(&[42.0], 16), "");
        assert_eq!(histogram(&[5.0, 5.0, 5.0, 5.0], 16), "");
        assert_eq!(histogram(&[], 16), "");
    }

    #[test]
    fn test_histogram_thinning_tail() {
        let data: Vec<f64> = (1..=64).map(|i| (i * i) as f64).collect();
        let lv = levels(&histogram(&data, 8));

        // Squares spread out, so buckets empty toward the top
        assert_eq!(lv[0], 7);
        assert!(lv.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_trendline_ascending() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        assert_eq!(trendline(&data, 8), "▁▂▃▄▅▆▇█");
    }

    #[test]
    fn test_trendline_is_order_dependent() {
        let up = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let down: Vec<f64> = up.iter().rev().copied().collect();

        assert_eq!(trendline(&down, 8), "█▇▆▅▄▃▂▁");
    }

    #[test]
    fn test_trendline_monotonic_input() {
        let data: Vec<f64> = (0..200).map(|i| i as f64 * 0.5).collect();
        let lv = levels(&trendline(&data, 16));

        assert_eq!(lv.len(), 16);
        assert!(lv.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(lv[0], 0);
        assert_eq!(lv[15], 7);
    }

    #[test]
    fn test_trendline_fewer_values_than_bins() {
        let result = trendline(&[1.0, 3.0, 2.0], 16);
        assert_eq!(result, "▁█▄");
    }

    #[test]
    fn test_trendline_degenerate() {
        assert_eq!(trendline(&[42.0], 16), "");
        assert_eq!(trendline(&[5.0, 5.0, 5.0, 5.0], 16), "");
    }

    #[test]
    fn test_trendline_flat_chunk_means() {
        // Varying data whose chunk means all coincide
        let data = vec![1.0, 3.0, 3.0, 1.0];
        assert_eq!(trendline(&data, 2), "");
    }
}
