use clip_stamp::ortho_for_drawable;
use glam::Vec4;

#[cfg(test)]
mod projection_tests {
    use super::*;

    fn project(width: f32, height: f32, x: f32, y: f32) -> (f32, f32) {
        let out = ortho_for_drawable(width, height) * Vec4::new(x, y, 0.0, 1.0);
        (out.x / out.w, out.y / out.w)
    }

    #[test]
    fn test_top_left_maps_to_upper_left_ndc() {
        let (x, y) = project(800.0, 600.0, 0.0, 0.0);
        assert!((x + 1.0).abs() < 1e-6);
        assert!((y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_bottom_right_maps_to_lower_right_ndc() {
        let (x, y) = project(800.0, 600.0, 800.0, 600.0);
        assert!((x - 1.0).abs() < 1e-6);
        assert!((y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_corner_mapping_holds_for_any_drawable_size() {
        for (w, h) in [(800.0, 600.0), (1.0, 1.0), (1920.0, 1080.0), (333.0, 777.0)] {
            let (x, y) = project(w, h, 0.0, 0.0);
            assert!((x + 1.0).abs() < 1e-5 && (y - 1.0).abs() < 1e-5);

            let (x, y) = project(w, h, w, h);
            assert!((x - 1.0).abs() < 1e-5 && (y + 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_projection_is_invertible() {
        let m = ortho_for_drawable(800.0, 600.0);
        assert!(m.determinant().abs() > 1e-12);

        let inv = m.inverse();
        let p = Vec4::new(250.0, 417.0, 0.0, 1.0);
        let roundtrip = inv * (m * p);
        assert!((roundtrip.x - p.x).abs() < 1e-3);
        assert!((roundtrip.y - p.y).abs() < 1e-3);
    }

    #[test]
    fn test_depth_stays_in_clip_range() {
        // The quad lives at z = 0; it must land inside [0, 1] depth.
        let out = ortho_for_drawable(800.0, 600.0) * Vec4::new(400.0, 300.0, 0.0, 1.0);
        let z = out.z / out.w;
        assert!((0.0..=1.0).contains(&z), "z = {} outside clip range", z);
    }
}
