use crate::geom::{PixelPoint, Segment};

/// Builds the marker line segment centered on `center`.
///
/// Orientation 0 runs along +x. Positive angles rotate with the screen-space
/// y axis (downward), so the visible turn direction is mirrored relative to
/// a mathematical plane; this mirroring is part of the contract. The angle
/// is not range-checked, the trigonometry wraps it implicitly.
pub fn oriented_segment(center: PixelPoint, orientation_deg: f64, half_length: f64) -> Segment {
    let angle = orientation_deg.to_radians();
    let dx = half_length * angle.cos();
    let dy = half_length * angle.sin();
    Segment {
        p0: PixelPoint {
            x: (center.x as f64 - dx) as i32,
            y: (center.y as f64 - dy) as i32,
        },
        p1: PixelPoint {
            x: (center.x as f64 + dx) as i32,
            y: (center.y as f64 + dy) as i32,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::oriented_segment;
    use crate::geom::PixelPoint;

    #[test]
    fn horizontal_at_zero_degrees() {
        let seg = oriented_segment(PixelPoint::new(100, 50), 0.0, 15.0);
        assert_eq!(seg.p0, PixelPoint::new(85, 50));
        assert_eq!(seg.p1, PixelPoint::new(115, 50));
    }

    #[test]
    fn ninety_degrees_points_down_screen() {
        // y grows downward, so +90 tilts the second endpoint below center.
        let seg = oriented_segment(PixelPoint::new(100, 100), 90.0, 15.0);
        assert!(seg.p1.y > seg.p0.y);
        assert_eq!(seg.p0.x, seg.p1.x);
    }

    #[test]
    fn midpoint_stays_on_center_within_truncation() {
        for deg in [0.0, 17.0, 45.0, 133.0, 278.5, -31.0] {
            let center = PixelPoint::new(64, 91);
            let seg = oriented_segment(center, deg, 15.0);
            let mid = seg.midpoint();
            assert!((mid.x - center.x).abs() <= 1, "orientation {deg}");
            assert!((mid.y - center.y).abs() <= 1, "orientation {deg}");
        }
    }

    #[test]
    fn endpoint_distance_is_twice_half_length() {
        for deg in [0.0, 30.0, 60.0, 90.0, 120.0, 211.0] {
            let seg = oriented_segment(PixelPoint::new(200, 200), deg, 15.0);
            // truncation can shave up to one pixel per axis off each endpoint
            assert!((seg.length() - 30.0).abs() <= 2.0, "orientation {deg}");
        }
    }

    #[test]
    fn wrapped_angles_agree_within_truncation() {
        let a = oriented_segment(PixelPoint::new(100, 100), 10.0, 15.0);
        let b = oriented_segment(PixelPoint::new(100, 100), 370.0, 15.0);
        assert!((a.p0.x - b.p0.x).abs() <= 1);
        assert!((a.p0.y - b.p0.y).abs() <= 1);
        assert!((a.p1.x - b.p1.x).abs() <= 1);
        assert!((a.p1.y - b.p1.y).abs() <= 1);
    }
}
