use crate::geom::PixelPoint;

/// Maps an (azimuth, elevation) angular pair to a pixel offset using the
/// equidistant fisheye model.
///
/// `radius` is the projection radius in pixels, half the smaller image
/// dimension. Elevation drives the inset from the projection rim: at
/// elevation 90 the radial term vanishes and every azimuth collapses onto
/// `(0, radius)`. Elevations outside [0, 90] extrapolate past the rim and
/// are deliberately not rejected.
///
/// Both coordinates truncate toward zero. The returned y is already
/// image-relative (0 = top); the caller shifts x by the horizontal center.
pub fn project_equidistant(radius: f64, azimuth_deg: f64, elevation_deg: f64) -> PixelPoint {
    let inset = radius * elevation_deg / 90.0;
    let azimuth = azimuth_deg.to_radians();
    let radial = radius - inset;
    PixelPoint {
        x: (radial * azimuth.sin()) as i32,
        y: (radius - radial * azimuth.cos()) as i32,
    }
}
