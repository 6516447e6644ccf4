use clip_stamp::{ClipInstance, ClipRegion, Rect};

#[cfg(test)]
mod clip_tests {
    use super::*;

    #[test]
    fn test_flattening_matches_rect_bounds() {
        let instance = ClipInstance::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(instance.bounds, [0.0, 100.0, 0.0, 100.0]);

        let instance = ClipInstance::from_rect(Rect::new(300.0, 350.0, 100.0, 250.0));
        assert_eq!(instance.bounds, [300.0, 400.0, 350.0, 600.0]);

        let instance = ClipInstance::from_rect(Rect::new(0.0, 400.0, 30.0, 150.0));
        assert_eq!(instance.bounds, [0.0, 30.0, 400.0, 550.0]);
    }

    #[test]
    fn test_bounds_are_min_before_max() {
        let instance = ClipInstance::from_rect(Rect::new(300.0, 350.0, 100.0, 250.0));
        let [x_min, x_max, y_min, y_max] = instance.bounds;
        assert!(x_min < x_max);
        assert!(y_min < y_max);
    }

    #[test]
    fn test_instance_count_tracks_rect_count() {
        for n in 0..16 {
            let mut region = ClipRegion::new();
            for i in 0..n {
                region.push(Rect::new(i as f32, 0.0, 5.0, 5.0));
            }
            assert_eq!(region.rect_count(), n);
            assert_eq!(region.instances().len(), n);
        }
    }

    #[test]
    fn test_instances_keep_insertion_order() {
        let rects = [
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(300.0, 350.0, 100.0, 250.0),
            Rect::new(0.0, 400.0, 30.0, 150.0),
        ];

        let mut region = ClipRegion::new();
        for rect in rects {
            region.push(rect);
        }

        let instances = region.instances();
        for (rect, instance) in rects.iter().zip(&instances) {
            assert_eq!(*instance, ClipInstance::from_rect(*rect));
        }
    }

    #[test]
    fn test_overlapping_rects_are_kept_separate() {
        // The union happens on the GPU; the region itself never merges rects.
        let mut region = ClipRegion::new();
        region.push(Rect::new(0.0, 0.0, 100.0, 100.0));
        region.push(Rect::new(50.0, 50.0, 100.0, 100.0));
        assert_eq!(region.rect_count(), 2);
        assert_eq!(region.instances().len(), 2);
    }
}
