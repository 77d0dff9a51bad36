//! webpify CLI Tool
//!
//! Command-line interface for converting PNG and JPEG logos to WebP.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use webpify_core::{ConversionResult, ConvertConfig, Outcome};
use webpify_encoder::summary::format_kib;
use webpify_encoder::{BatchDriver, BatchImageConverter, RunSummary};

/// Directory converted when `batch` is given no argument
const DEFAULT_LOGO_DIR: &str = "assets/game logos";

#[derive(Parser)]
#[command(name = "webpify")]
#[command(about = "Convert PNG/JPEG images to WebP, flattening transparency onto white")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every PNG/JPEG in a directory that has no WebP yet
    Batch {
        /// Directory holding the source images
        #[arg(default_value = DEFAULT_LOGO_DIR)]
        dir: PathBuf,

        #[command(flatten)]
        encode: EncodeArgs,
    },

    /// Convert an explicit list of image files
    Convert {
        /// Source image files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Replace WebP files that already exist
        #[arg(long)]
        overwrite: bool,

        #[command(flatten)]
        encode: EncodeArgs,
    },
}

#[derive(Args)]
struct EncodeArgs {
    /// WebP encoding quality (0-100)
    #[arg(long, default_value = "85")]
    quality: f32,

    /// Compression effort (0-6, higher is slower and smaller)
    #[arg(long, default_value = "6")]
    method: u8,

    /// Encode transparency instead of flattening onto white
    #[arg(long)]
    keep_alpha: bool,
}

impl EncodeArgs {
    fn into_config(self) -> Result<ConvertConfig> {
        let config = ConvertConfig {
            quality: self.quality,
            method: self.method,
            flatten: !self.keep_alpha,
            ..Default::default()
        };
        config.validate().context("Invalid encoder options")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Batch { dir, encode } => convert_directory(&dir, encode.into_config()?)?,

        Commands::Convert {
            files,
            overwrite,
            encode,
        } => convert_files(&files, overwrite, encode.into_config()?),
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn convert_directory(dir: &Path, config: ConvertConfig) -> Result<()> {
    println!("Converting images in {} to WebP...\n", dir.display());

    let start = Instant::now();
    let driver = BatchDriver::new(BatchImageConverter::new(config));
    let results = driver
        .run_with(dir, print_result)
        .with_context(|| format!("Failed to convert directory {}", dir.display()))?;

    print_summary(&results, start);
    Ok(())
}

fn convert_files(files: &[PathBuf], overwrite: bool, config: ConvertConfig) {
    println!("Converting {} file(s) to WebP...\n", files.len());

    let start = Instant::now();
    let driver = BatchDriver::new(BatchImageConverter::new(config)).with_overwrite(overwrite);
    let results = driver.run_files_with(files, print_result);

    print_summary(&results, start);
}

fn print_result(result: &ConversionResult) {
    let name = display_name(&result.source);

    match &result.outcome {
        Outcome::Converted {
            original_bytes,
            output_bytes,
            width,
            height,
            ..
        } => {
            let savings = result.savings_percent().unwrap_or_default();
            let direction = if savings < 0.0 { "larger" } else { "smaller" };
            println!(
                "✓ {} → {} ({}x{})",
                name,
                display_name(&result.destination),
                width,
                height
            );
            println!(
                "  {} → {} ({:.1}% {})",
                format_kib(*original_bytes),
                format_kib(*output_bytes),
                savings.abs(),
                direction
            );
        }
        Outcome::Skipped => println!("⊘ Skipping {} (WebP already exists)", name),
        Outcome::Failed { kind, message } => {
            println!("✗ Error converting {} [{}]: {}", name, kind, message)
        }
    }
}

fn print_summary(results: &[ConversionResult], start: Instant) {
    let summary = RunSummary::from_results(results, start.elapsed());
    tracing::info!(
        converted = summary.converted,
        skipped = summary.skipped,
        failed = summary.failed,
        "run finished"
    );
    println!("\n✓ Conversion complete: {}", summary);
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
