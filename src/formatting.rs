use std::fmt::Write;

use crate::stats::Stats;

/// Width of the label column in the report, excluding the separating space.
const LABEL_WIDTH: usize = 17;

/// Formats a number without scientific notation.
/// Integers print without decimals; anything else keeps at most 4 decimals,
/// with trailing zeros trimmed.
pub fn format_float(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value == value.trunc() {
        return format!("{:.0}", value);
    }

    let s = format!("{:.4}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    // Tiny negatives like -0.00001 would otherwise print as "-0"
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Formats values as `[a b c]`.
pub fn format_slice(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|&v| format_float(v)).collect();
    format!("[{}]", parts.join(" "))
}

/// Human-readable label for a skewness value.
pub fn interpret_skewness(skewness: f64) -> &'static str {
    let magnitude = skewness.abs();
    if magnitude < 0.5 {
        "Fairly Symmetrical"
    } else if magnitude < 1.0 {
        if skewness > 0.0 {
            "Moderately Right Skewed"
        } else {
            "Moderately Left Skewed"
        }
    } else if skewness > 0.0 {
        "Highly Right Skewed"
    } else {
        "Highly Left Skewed"
    }
}

/// Human-readable label for an excess kurtosis value.
pub fn interpret_kurtosis(kurtosis: f64) -> &'static str {
    if kurtosis < -1.0 {
        "Platykurtic - flat, thin tails"
    } else if kurtosis > 1.0 {
        "Leptokurtic - peaked, heavy tails"
    } else {
        "Mesokurtic - normal-like"
    }
}

/// Human-readable label for a coefficient of variation in percent.
pub fn interpret_cv(cv: f64) -> &'static str {
    if cv < 15.0 {
        "Low Variability"
    } else if cv < 30.0 {
        "Moderate Variability"
    } else {
        "High Variability"
    }
}

/// Display options that do not affect the computed statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// The sample was log-transformed before computing.
    pub log_transformed: bool,
}

/// Renders the full text report.
pub fn render_report(stats: &Stats, options: ReportOptions) -> String {
    let mut out = String::new();
    let row = |out: &mut String, label: &str, value: String| {
        let label = format!("{}:", label);
        let _ = writeln!(out, "{:<width$} {}", label, value, width = LABEL_WIDTH);
    };

    if options.log_transformed {
        out.push_str("Note: statistics computed on ln(x) of the input\n\n");
    }

    out.push_str("--- Descriptive Statistics ---\n");
    row(&mut out, "Count", stats.count.to_string());
    row(&mut out, "Sum", format_float(stats.sum));
    row(&mut out, "Min", format_float(stats.min));
    row(&mut out, "Max", format_float(stats.max));

    out.push_str("\n--- Measures of Central Tendency ---\n");
    row(&mut out, "Mean", format_float(stats.mean));
    row(&mut out, "Median (p50)", format_float(stats.median));
    match stats.mode.as_slice() {
        [] => row(&mut out, "Mode", "None".to_string()),
        [single] => row(&mut out, "Mode", format_float(*single)),
        many => row(&mut out, "Mode (multi)", format_slice(many)),
    }
    if let Some(trimmed) = stats.trimmed_mean {
        row(
            &mut out,
            &format!("Trimmed Mean ({}%)", format_float(stats.trim_percent)),
            format_float(trimmed),
        );
    }

    out.push_str("\n--- Measures of Spread & Distribution ---\n");
    row(&mut out, "Std Deviation", format_float(stats.std_dev));
    row(&mut out, "Variance", format_float(stats.variance));
    if let Some(cv) = stats.cv {
        row(
            &mut out,
            "CV",
            format!("{}% ({})", format_float(cv), interpret_cv(cv)),
        );
        if stats.has_negative_data {
            out.push_str("  (caution: CV assumes non-negative, ratio-scale data)\n");
        }
    }
    row(&mut out, "Quartile 1 (p25)", format_float(stats.q1));
    row(&mut out, "Quartile 3 (p75)", format_float(stats.q3));
    row(&mut out, "Percentile (p95)", format_float(stats.p95));
    row(&mut out, "Percentile (p99)", format_float(stats.p99));
    for p in &stats.custom_percentiles {
        row(
            &mut out,
            &format!("Percentile (p{})", format_float(p.rank)),
            format_float(p.value),
        );
    }
    row(&mut out, "IQR", format_float(stats.iqr));
    let outliers = if stats.outliers.is_empty() {
        "None".to_string()
    } else {
        format_slice(&stats.outliers)
    };
    row(
        &mut out,
        &format!("Outliers (k={})", format_float(stats.iqr_multiplier)),
        outliers,
    );
    if let Some(flagged) = &stats.z_score_outliers {
        let value = if flagged.is_empty() {
            "None".to_string()
        } else {
            format_slice(flagged)
        };
        row(
            &mut out,
            &format!("Z-Outliers (z>{})", format_float(stats.z_score_threshold)),
            value,
        );
    }

    out.push_str("\n--- Distribution Shape ---\n");
    row(
        &mut out,
        "Skewness",
        format!(
            "{} ({})",
            format_float(stats.skewness),
            interpret_skewness(stats.skewness)
        ),
    );
    row(
        &mut out,
        "Kurtosis",
        format!(
            "{} ({})",
            format_float(stats.kurtosis),
            interpret_kurtosis(stats.kurtosis)
        ),
    );
    if !stats.histogram.is_empty() {
        row(&mut out, "Histogram", stats.histogram.clone());
    }
    if !stats.trendline.is_empty() {
        row(&mut out, "Trendline", stats.trendline.clone());
    }

    out
}
