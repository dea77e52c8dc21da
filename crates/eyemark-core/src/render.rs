use tracing::warn;

use crate::canvas::{BLACK, Canvas, Rgb, WHITE};
use crate::error::Error;
use crate::marker::oriented_segment;
use crate::project::project_equidistant;

/// One marker: where it sits on the sphere and how its line tilts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularSample {
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
    pub orientation_deg: f64,
}

/// Canvas background variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    #[default]
    White,
    /// Zeroed canvas; markers draw on black.
    Transparent,
}

impl Background {
    fn fill(self) -> Rgb {
        match self {
            Self::White => WHITE,
            Self::Transparent => [0, 0, 0],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub background: Background,
    /// Half the marker line length in pixels.
    pub half_length: f64,
    /// Stroke width in pixels.
    pub stroke: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Background::White,
            half_length: 15.0,
            stroke: 2,
        }
    }
}

/// Zips the three angle lists positionally into samples.
///
/// The marker count is the shortest list's length; longer tails are dropped
/// with a warning rather than rejected.
pub fn zip_samples(
    azimuth_deg: &[f64],
    elevation_deg: &[f64],
    orientation_deg: &[f64],
) -> Vec<AngularSample> {
    let n = azimuth_deg
        .len()
        .min(elevation_deg.len())
        .min(orientation_deg.len());
    let longest = azimuth_deg
        .len()
        .max(elevation_deg.len())
        .max(orientation_deg.len());
    if longest != n {
        warn!("angle lists have unequal lengths; truncating to {n} markers");
    }

    (0..n)
        .map(|i| AngularSample {
            azimuth_deg: azimuth_deg[i],
            elevation_deg: elevation_deg[i],
            orientation_deg: orientation_deg[i],
        })
        .collect()
}

/// Renders every marker onto a fresh canvas of the given dimensions.
///
/// The projection radius is half the smaller dimension. Projected x offsets
/// are shifted by the horizontal center so azimuth 0 points at the image
/// top; y is already top-relative. Markers draw in input order, in black.
pub fn render_markers(
    width: usize,
    height: usize,
    samples: &[AngularSample],
    cfg: &RenderConfig,
) -> Result<Canvas, Error> {
    let mut canvas = Canvas::filled(width, height, cfg.background.fill())?;

    let center_x = (width / 2) as i32;
    let center_y = (height / 2) as i32;
    let radius = center_x.min(center_y) as f64;

    for s in samples {
        let center = project_equidistant(radius, s.azimuth_deg, s.elevation_deg)
            .shifted_x(center_x);
        let seg = oriented_segment(center, s.orientation_deg, cfg.half_length);
        canvas.draw_segment(seg, BLACK, cfg.stroke);
    }

    Ok(canvas)
}
