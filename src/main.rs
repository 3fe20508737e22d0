mod animation;
mod config;
mod encode;
mod metrics;
mod relativity;
mod render;
mod scene;
mod timeline;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use config::{DEFAULT_FPS, RenderConfig};
use scene::Scenario;

/// boostviz - Galilean and Lorentz boosts as spacetime animations
#[derive(Parser)]
#[command(name = "boostviz", about = "Render spacetime diagram animations of frame boosts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Args)]
struct GlobalArgs {
    /// Directory for the finished videos
    #[arg(long, global = true, default_value = "output")]
    out_dir: PathBuf,

    #[arg(long, global = true, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Keep the PNG frames after encoding
    #[arg(long, global = true)]
    keep_frames: bool,

    /// ffmpeg binary used for encoding
    #[arg(long, global = true, default_value = "ffmpeg")]
    ffmpeg: PathBuf,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the single and two-panel Galilean animations
    Galilean,
    /// Render the three-panel Lorentz animation
    Lorentz,
    /// Render all three animations
    All,
    /// Export per-frame coordinates to CSV with a summary chart
    Metrics {
        #[arg(long, value_enum, default_value_t = MetricsScenario::Lorentz)]
        scenario: MetricsScenario,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricsScenario {
    Galilean,
    Lorentz,
}

impl From<MetricsScenario> for Scenario {
    fn from(s: MetricsScenario) -> Self {
        match s {
            MetricsScenario::Galilean => Scenario::GalileanTwoPanel,
            MetricsScenario::Lorentz => Scenario::LorentzThreePanel,
        }
    }
}

impl GlobalArgs {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            out_dir: self.out_dir.clone(),
            fps: self.fps,
            keep_frames: self.keep_frames,
            ffmpeg: self.ffmpeg.clone(),
            ..RenderConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.global.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to set tracing subscriber")?;

    let config = cli.global.render_config();
    match cli.command {
        Some(Commands::Galilean) => {
            animation::render_all(&[Scenario::GalileanSingle, Scenario::GalileanTwoPanel], &config)?;
        }
        Some(Commands::Lorentz) => {
            animation::render_all(&[Scenario::LorentzThreePanel], &config)?;
        }
        Some(Commands::All) | None => {
            animation::render_all(&Scenario::ALL, &config)?;
        }
        Some(Commands::Metrics { scenario }) => run_metrics(scenario.into(), &config)?,
    }

    Ok(())
}

fn run_metrics(scenario: Scenario, config: &RenderConfig) -> Result<()> {
    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("failed to create {}", config.out_dir.display()))?;
    let log = metrics::collect(scenario);

    let csv_path = config.out_dir.join(format!("{}_metrics.csv", scenario.name()));
    metrics::export_csv(&log, &csv_path)?;
    info!("✅ Metrics written to {}", csv_path.display());

    let png_path = config.out_dir.join(format!("{}_metrics.png", scenario.name()));
    let caption = format!("{}: events A and B in S' against v", scenario.name());
    metrics::plot_results(&log, &png_path, &caption)?;
    info!("✅ Chart written to {}", png_path.display());
    Ok(())
}
