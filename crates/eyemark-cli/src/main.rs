//! eyemark CLI — render oriented line markers onto a fisheye image frame.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use eyemark_core::{Background, RenderConfig, render_markers, rotate_rgb8, zip_samples};
use image::RgbImage;

#[derive(Parser, Debug)]
#[command(name = "eyemark")]
#[command(about = "Render oriented line markers onto a circular fisheye image")]
#[command(version)]
struct Cli {
    /// Path to the input image (any raster format the decoder supports).
    input: PathBuf,

    /// Path the annotated image is written to.
    output: PathBuf,

    /// Azimuth angles in degrees, comma-separated, e.g. "[10.0,20.0]" or "10.0,20.0".
    azimuth: String,

    /// Elevation angles in degrees (0 = zenith, 90 = horizon), comma-separated.
    elevation: String,

    /// Marker orientation angles in degrees, comma-separated.
    orientation: String,

    /// Canvas background.
    #[arg(long, value_enum, default_value_t = BackgroundArg::White)]
    background: BackgroundArg,

    /// Rotate the source frame by this many degrees (counterclockwise on
    /// screen) before reading its dimensions. The canvas is never rotated.
    #[arg(long, default_value_t = 0.0)]
    rotation_degrees: f64,

    /// Negate every orientation angle (companion-eye rendering).
    #[arg(long)]
    negate_orientation: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BackgroundArg {
    White,
    Transparent,
}

impl BackgroundArg {
    fn to_core(self) -> Background {
        match self {
            Self::White => Background::White,
            Self::Transparent => Background::Transparent,
        }
    }
}

struct AngleLists {
    azimuth: Vec<f64>,
    elevation: Vec<f64>,
    orientation: Vec<f64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Malformed list text is a usage error: report and exit before any
    // image is touched.
    let lists = match parse_angle_lists(&cli) {
        Ok(lists) => lists,
        Err(e) => {
            eprintln!("error: {e:#}");
            eprintln!(
                "angle lists are comma-separated numbers, optionally bracket-delimited, \
                 e.g. \"[10.0,20.0]\""
            );
            return ExitCode::from(2);
        }
    };

    match run(&cli, lists) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("An error occurred: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn parse_angle_lists(cli: &Cli) -> Result<AngleLists> {
    Ok(AngleLists {
        azimuth: parse_angle_list(&cli.azimuth).context("parsing azimuth list")?,
        elevation: parse_angle_list(&cli.elevation).context("parsing elevation list")?,
        orientation: parse_angle_list(&cli.orientation).context("parsing orientation list")?,
    })
}

/// Parses "10.0,20.0" or "[10.0,20.0]". Brackets are stripped per element,
/// not just at the ends of the string.
fn parse_angle_list(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(|item| {
            let item = item.trim().trim_matches(|c| c == '[' || c == ']').trim();
            item.parse::<f64>()
                .with_context(|| format!("invalid number {item:?}"))
        })
        .collect()
}

fn run(cli: &Cli, lists: AngleLists) -> Result<()> {
    tracing::info!("Loading image: {}", cli.input.display());
    let decoded = image::open(&cli.input)
        .with_context(|| format!("opening input image {}", cli.input.display()))?
        .to_rgb8();

    // Pass-through pre-processing on the source frame only; the canvas
    // below starts blank either way.
    let source = if cli.rotation_degrees != 0.0 {
        let (w, h) = (decoded.width() as usize, decoded.height() as usize);
        let rotated = rotate_rgb8(decoded.as_raw(), w, h, cli.rotation_degrees);
        RgbImage::from_raw(w as u32, h as u32, rotated)
            .context("rebuilding rotated source frame")?
    } else {
        decoded
    };

    let (width, height) = (source.width() as usize, source.height() as usize);
    tracing::info!("Image size: {}x{}", width, height);

    let orientation: Vec<f64> = if cli.negate_orientation {
        lists.orientation.iter().map(|v| -v).collect()
    } else {
        lists.orientation
    };

    let samples = zip_samples(&lists.azimuth, &lists.elevation, &orientation);
    tracing::info!("Rendering {} markers", samples.len());

    let cfg = RenderConfig {
        background: cli.background.to_core(),
        ..RenderConfig::default()
    };
    let canvas = render_markers(width, height, &samples, &cfg)?;

    let out = RgbImage::from_raw(width as u32, height as u32, canvas.into_writer_order())
        .context("assembling output image buffer")?;
    out.save(&cli.output)
        .with_context(|| format!("saving output image {}", cli.output.display()))?;
    tracing::info!("Projection image saved to {}", cli.output.display());

    Ok(())
}
