use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Instant;

use trigen::case::{EmptyAnswer, FormatKind};
use trigen::config::GenConfig;
use trigen::generator::generate;

/// Generate randomized triangle test cases for intersection engines
///
/// Examples:
///   # Generate the groups described in a JSON config
///   trigen tests.json
///
///   # Reproducible run written to a different directory
///   trigen tests.toml --seed 42 -o cases/
///
///   # One triangle per line instead of the legacy run-together layout
///   trigen tests.json --format spaced
#[derive(Parser, Debug)]
#[command(name = "trigen")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (.json, or .toml)
    config: PathBuf,

    /// Seed for the random generator (overrides the config seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory (overrides output_path from the config)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Test file layout (overrides format from the config)
    #[arg(long)]
    format: Option<FormatKind>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let total_start = Instant::now();
    let mut config = GenConfig::from_path(&args.config)
        .with_context(|| format!("Failed to load config file: {:?}", args.config))?;

    if let Some(output) = args.output {
        config.output_path = output;
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    let seed = args
        .seed
        .or(config.seed)
        .unwrap_or_else(rand::random::<u64>);
    debug!("Configuration: {:?}", config);
    info!("Using seed {}", seed);

    std::fs::create_dir_all(&config.output_path).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_path.display()
        )
    })?;

    let spinner = create_spinner(&format!("Generating {} test cases...", config.groups.len()));
    let mut rng = StdRng::seed_from_u64(seed);
    let reports = generate(&config, &EmptyAnswer, &mut rng).context("Failed to generate tests")?;

    let total_triangles: usize = reports.iter().map(|r| r.triangles).sum();
    spinner.finish_with_message(format!(
        "Wrote {} cases with {} triangles to {} [{:.1}s]",
        reports.len(),
        total_triangles,
        config.output_path.display(),
        total_start.elapsed().as_secs_f32()
    ));

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
