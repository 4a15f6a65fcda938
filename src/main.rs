use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use stats_cli::config::{Config, DEFAULT_BINS, DEFAULT_IQR_MULTIPLIER};
use stats_cli::formatting::{ReportOptions, render_report};
use stats_cli::parsing::{self, ParsedInput};
use stats_cli::{Stats, kde, transform};

#[derive(Parser)]
#[command(about = "Computes descriptive statistics from a list of numbers", version)]
struct Args {
    /// Input file, one number per line ("-" or omitted for stdin)
    input: Option<PathBuf>,

    /// Extra percentiles to report, comma-separated (e.g. 10,90,99.9)
    #[arg(short, long, value_delimiter = ',')]
    percentiles: Vec<f64>,

    /// IQR multiplier for outlier fences (3.0 flags only far-out values)
    #[arg(short = 'k', long, default_value_t = DEFAULT_IQR_MULTIPLIER)]
    iqr_multiplier: f64,

    /// Bucket count for the histogram and trendline
    #[arg(short, long, default_value_t = DEFAULT_BINS)]
    bins: usize,

    /// Flag values whose |z| exceeds this threshold (0 disables)
    #[arg(short, long, default_value_t = 0.0)]
    zscore: f64,

    /// Percent trimmed from each end for the trimmed mean (0 disables)
    #[arg(short, long, default_value_t = 0.0)]
    trim: f64,

    /// Compute statistics on ln(x) instead of x
    #[arg(short, long)]
    log: bool,

    /// Draw a kernel density plot after the report
    #[arg(long)]
    plot: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            percentiles: self.percentiles.clone(),
            iqr_multiplier: self.iqr_multiplier,
            bins: self.bins,
            z_score_threshold: self.zscore,
            trim_percent: self.trim,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let config = args.config();
    if let Err(e) = config.validate() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let read_stdin = match &args.input {
        Some(path) => path.as_os_str() == "-",
        None => {
            if io::stdin().is_terminal() {
                eprintln!("Usage:\n  stats <filename>\n  stats -");
                eprintln!("Provide a filename or use '-' to read from standard input.");
                std::process::exit(1);
            }
            true
        }
    };

    let parsed = read_input(args.input.as_ref().filter(|_| !read_stdin));
    debug!(
        values = parsed.values.len(),
        skipped = parsed.skipped.len(),
        "input read"
    );

    let data = if args.log {
        transform::log_transform(&parsed.values).unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        })
    } else {
        parsed.values
    };

    let stats = Stats::compute(&data, &config).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    print!(
        "{}",
        render_report(
            &stats,
            ReportOptions {
                log_transformed: args.log
            }
        )
    );

    if args.plot {
        let mut sorted = data;
        sorted.sort_by(f64::total_cmp);
        println!();
        if !kde::plot_density(&sorted, stats.std_dev) {
            println!("(no density plot: data has no spread)");
        }
    }
}

/// Read numbers from the file at `path`, or stdin when `None`.
fn read_input(path: Option<&PathBuf>) -> ParsedInput {
    let result = match path {
        Some(path) => {
            let file = std::fs::File::open(path).unwrap_or_else(|e| {
                eprintln!("error opening {}: {}", path.display(), e);
                std::process::exit(1);
            });
            parsing::read_file_mmap(&file)
        }
        None => parsing::read_lines(io::stdin().lock()),
    };

    result.unwrap_or_else(|e| {
        eprintln!("error reading input: {}", e);
        std::process::exit(1);
    })
}
