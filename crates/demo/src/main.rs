// File: crates/demo/src/main.rs
// Summary: Renders a line chart growing one point per frame and writes it as an animated GIF.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_animate::{run, AnimationConfig, LoopMode};
use chart_core::theme;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Animate a randomly trending line chart into a GIF, entirely in memory.
#[derive(Parser, Debug)]
#[command(name = "line-gif")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of intervals; the GIF has one more frame than this
    #[arg(short = 'n', long, default_value_t = chart_animate::config::DEFAULT_INTERVALS)]
    intervals: usize,

    /// Output GIF path
    #[arg(short, long, value_name = "FILE", default_value = chart_animate::config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Frame width in pixels
    #[arg(long, default_value_t = 800)]
    width: i32,

    /// Frame height in pixels
    #[arg(long, default_value_t = 500)]
    height: i32,

    /// Display time per frame in milliseconds
    #[arg(long, default_value_t = 100)]
    delay_ms: u32,

    /// Play the animation once instead of looping
    #[arg(long)]
    once: bool,

    /// Color theme (light, dark, solarized-light, high-contrast-dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Seed for reproducible data; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Skip tick labels and axis titles
    #[arg(long)]
    no_labels: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let theme = theme::find(&cli.theme).with_context(|| {
        let names: Vec<_> = theme::presets().iter().map(|t| t.name).collect();
        format!("unknown theme '{}' (available: {})", cli.theme, names.join(", "))
    })?;

    let mut config = AnimationConfig::default();
    config.intervals = cli.intervals;
    config.output = cli.output;
    config.render.width = cli.width;
    config.render.height = cli.height;
    config.render.theme = theme;
    config.render.draw_labels = !cli.no_labels;
    config.gif.delay_ms = cli.delay_ms;
    if cli.once {
        config.gif.repeat = LoopMode::Finite(0);
    }

    let mut rng = match cli.seed {
        Some(seed) => {
            info!("using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let report = run(&config, &mut rng)
        .with_context(|| format!("failed to render animation to '{}'", config.output.display()))?;

    println!(
        "Wrote {} ({} frames, {}x{}, {} bytes; y axis 0..{} step {})",
        report.output.display(),
        report.frames,
        report.width,
        report.height,
        report.bytes_written,
        report.y_upper_bound,
        report.y_tick_step
    );
    Ok(())
}
