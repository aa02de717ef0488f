use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use showcase::constants::CATEGORIES;
use showcase::{CarouselEngine, Catalog, CategoryFilter, headless};

#[derive(Debug, Parser)]
#[command(name = "showcase", version, about = "Rotating project showcase")]
struct Args {
    /// Catalog file (TOML). The built-in projects are used when omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Auto-advance period in milliseconds, overriding the catalog.
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Only show projects whose category contains this tag.
    #[arg(long, default_value = "All")]
    filter: String,

    /// Randomize project order once at startup.
    #[arg(long)]
    shuffle: bool,

    /// Seed for --shuffle.
    #[arg(long, requires = "shuffle")]
    seed: Option<u64>,

    /// Run without a window at a fixed frame step.
    #[arg(long)]
    headless: bool,

    /// Simulated seconds for --headless.
    #[arg(long, default_value_t = 30.0)]
    duration: f64,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut catalog = match &args.catalog {
        Some(path) => Catalog::load(path).with_context(|| format!("loading catalog {path:?}"))?,
        None => Catalog::builtin(),
    };

    if args.shuffle {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        catalog.shuffle(&mut rng);
    }

    let mut filter = CategoryFilter::new();
    filter.select(&args.filter);
    if !CATEGORIES.iter().any(|c| c.eq_ignore_ascii_case(filter.selected())) {
        info!(filter = filter.selected(), "filter is not one of the portfolio tabs");
    }
    let items: Vec<_> = filter.apply(&catalog.items).into_iter().cloned().collect();
    info!(selected = items.len(), total = catalog.items.len(), filter = filter.selected(), "catalog ready");

    let config = catalog.config.with_interval_ms(args.interval_ms);
    let mut engine = CarouselEngine::new(items, config)
        .with_context(|| format!("building carousel for filter {:?}", filter.selected()))?;

    if args.headless {
        let duration = Duration::try_from_secs_f64(args.duration)
            .context("--duration must be a non-negative number of seconds")?;
        let report = headless::run(&mut engine, duration);
        info!(frames = report.frames, cursor = report.cursor, transitions = report.key, "headless run finished");
        return Ok(());
    }

    run_window(&mut engine)
}

#[cfg(feature = "window")]
fn run_window(engine: &mut CarouselEngine) -> Result<()> {
    showcase::window::run(engine);
    Ok(())
}

#[cfg(not(feature = "window"))]
fn run_window(_engine: &mut CarouselEngine) -> Result<()> {
    anyhow::bail!("built without the `window` feature; rerun with --headless")
}
