// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! Boxscope CLI

use anyhow::{bail, Context, Result};
use boxscope::geometry::{corner_stages, MAIN_CATEGORY};
use boxscope::io::import_objects_file;
use boxscope::render::{CommandLogBackend, DisplayBackend, PngBackend, ViewOptions};
use boxscope::utils::math::{deg_to_rad, rad_to_deg, wrap_angle};
use boxscope::{FrameRenderer, VisualizerConfig};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "boxscope")]
#[command(
    about = "Boxscope - wireframe view of oriented boxes around a sensor platform",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one frame of objects
    Render {
        /// JSON file with object records
        objects: PathBuf,

        /// Configuration file (.json or .toml)
        #[arg(short, long, default_value = "config.json")]
        config: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
        format: OutputFormat,

        /// Image width in pixels
        #[arg(long, default_value_t = 1024)]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = 768)]
        height: u32,

        /// Camera elevation in degrees
        #[arg(long, default_value_t = 30.0, allow_hyphen_values = true)]
        elevation: f64,

        /// Camera azimuth in degrees
        #[arg(long, default_value_t = -60.0, allow_hyphen_values = true)]
        azimuth: f64,
    },

    /// Print the corner computation stages for one box
    #[command(allow_negative_numbers = true)]
    Inspect {
        x: f64,
        y: f64,
        length: f64,
        width: f64,
        height: f64,
        angle: f64,

        /// Angle is given in degrees instead of radians
        #[arg(long)]
        degrees: bool,
    },

    /// Show version information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Raster image
    Png,
    /// JSON draw-command log
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command {
        Commands::Render {
            objects,
            config,
            output,
            format,
            width,
            height,
            elevation,
            azimuth,
        } => {
            let view = ViewOptions {
                width,
                height,
                elevation_deg: elevation,
                azimuth_deg: azimuth,
                ..ViewOptions::default()
            };
            render_command(&objects, &config, output, format, view)
        }
        Commands::Inspect {
            x,
            y,
            length,
            width,
            height,
            angle,
            degrees,
        } => {
            let angle = if degrees { deg_to_rad(angle) } else { angle };
            inspect_command([x, y, length, width, height, angle])
        }
        Commands::Version => {
            println!("Boxscope v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn render_command(
    objects_path: &Path,
    config_path: &Path,
    output: PathBuf,
    format: OutputFormat,
    view: ViewOptions,
) -> Result<()> {
    if view.width == 0 || view.height == 0 {
        bail!("Image size must be non-zero, got {}x{}", view.width, view.height);
    }

    let config = VisualizerConfig::from_file(config_path)
        .with_context(|| format!("Failed to load config: {}", config_path.display()))?;
    let objects = import_objects_file(objects_path)?;
    info!("Rendering {} objects from {}", objects.len(), objects_path.display());

    let mut backend: Box<dyn DisplayBackend> = match format {
        OutputFormat::Png => Box::new(PngBackend::with_options(&output, view)),
        OutputFormat::Json => Box::new(CommandLogBackend::new(&output)),
    };

    let start = std::time::Instant::now();
    let summary = FrameRenderer::new(&config)
        .render_frame(&objects, backend.as_mut())
        .with_context(|| format!("Failed to render {}", objects_path.display()))?;

    println!(
        "{} {} boxes, {} draw commands in {:.2?} -> {}",
        "Rendered".green().bold(),
        summary.boxes.to_string().cyan(),
        summary.commands,
        start.elapsed(),
        output.display().to_string().cyan()
    );
    Ok(())
}

fn inspect_command([x, y, length, width, height, angle]: [f64; 6]) -> Result<()> {
    let stages = corner_stages(x, y, length, width, height, angle)?;

    println!("{}", "━".repeat(60).bright_black());
    println!(
        "{} center ({x}, {y}), length {length}, width {width}, height {height}",
        "Box:".bold()
    );
    println!(
        "{} {:.4} rad ({:.2}°)",
        "Heading:".bold(),
        wrap_angle(angle),
        rad_to_deg(wrap_angle(angle))
    );
    println!("{}", "━".repeat(60).bright_black());

    println!("\n{}", "Local corners:".bold());
    for (i, p) in stages.local.iter().enumerate() {
        println!("  {i}: ({:>9.4}, {:>9.4})", p.x, p.y);
    }

    println!("\n{}", "Rotated corners:".bold());
    for (i, p) in stages.rotated.iter().enumerate() {
        println!("  {i}: ({:>9.4}, {:>9.4})", p.x, p.y);
    }

    println!("\n{}", "World corners:".bold());
    for (i, p) in stages.translated.as_slice().iter().enumerate() {
        let label = if i < 4 { "base" } else { "top " };
        println!(
            "  {label} {}: ({:>9.4}, {:>9.4}, {:>9.4})",
            i % 4,
            p.x,
            p.y,
            p.z
        );
    }

    println!(
        "\n{} front face between corners 0 and 1 (cross-lines base0→top1, base1→top0)",
        "Marker:".bright_black()
    );
    println!(
        "{} \"{MAIN_CATEGORY}\" is reserved for the reference box",
        "Note:".bright_black()
    );
    Ok(())
}
