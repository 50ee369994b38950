//! Orbit path geometry: closed circular polylines drawn under each planet.

/// Segments per orbit circle.
pub const ORBIT_PATH_SEGMENTS: u32 = 128;

/// Points of a closed circle of `radius` in the y=0 plane, suitable for a
/// line-strip upload. Returns `segments + 1` points; the last repeats the
/// first to close the loop.
pub fn orbit_path_points(radius: f64, segments: u32) -> Vec<[f32; 3]> {
    let mut points = Vec::with_capacity(segments as usize + 1);
    for i in 0..=segments {
        let theta = (i as f64 / segments as f64) * std::f64::consts::TAU;
        points.push([
            (theta.cos() * radius) as f32,
            0.0,
            (theta.sin() * radius) as f32,
        ]);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_count_closes_the_loop() {
        let points = orbit_path_points(20.0, ORBIT_PATH_SEGMENTS);
        assert_eq!(points.len(), 129);
        assert_eq!(points[0], *points.last().unwrap());
    }

    #[test]
    fn test_every_point_lies_on_the_circle() {
        let points = orbit_path_points(45.0, 64);
        for (i, p) in points.iter().enumerate() {
            let r = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!((r - 45.0).abs() < 1e-3, "point {i} at radius {r}");
            assert_eq!(p[1], 0.0);
        }
    }

    #[test]
    fn test_starts_on_positive_x_axis() {
        let points = orbit_path_points(10.0, 16);
        assert!((points[0][0] - 10.0).abs() < 1e-6);
        assert!(points[0][2].abs() < 1e-6);
    }
}
