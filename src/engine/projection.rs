use crate::{engine::types::ProjectedSpan, world::CameraConfig};

impl CameraConfig {
    /// Project something `height` cells tall standing `distance` cells away
    /// along a ray `angle` radians off the view axis.
    ///
    /// ```text
    /// z      = distance * cos(angle)        (fisheye correction)
    /// height = H * height / z
    /// bottom = H / 2 * (1 + 1 / z)
    /// top    = bottom - height
    /// ```
    ///
    /// `z` is not guarded: a zero distance yields infinite spans, which the
    /// surface clips.
    #[inline]
    pub fn project(&self, distance: f32, angle: f32, height: f32) -> ProjectedSpan {
        let h = self.height_f();
        let z = distance * angle.cos();
        let wall_height = h * height / z;
        let bottom = h / 2.0 * (1.0 + 1.0 / z);
        ProjectedSpan {
            top: bottom - wall_height,
            height: wall_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::world::CameraConfig;

    fn cam() -> CameraConfig {
        CameraConfig::with_defaults(800, 600, 160).unwrap()
    }

    #[test]
    fn unit_wall_five_cells_ahead() {
        let span = cam().project(5.0, 0.0, 1.0);
        assert!((span.height - 120.0).abs() < 1e-4);
        assert!((span.top - 240.0).abs() < 1e-4);
        // bottom = 300 * (1 + 1/5)
        assert!((span.top + span.height - 360.0).abs() < 1e-4);
    }

    #[test]
    fn deterministic() {
        let c = cam();
        let a = c.project(3.7, 0.21, 0.6);
        for _ in 0..16 {
            assert_eq!(c.project(3.7, 0.21, 0.6), a);
        }
    }

    #[test]
    fn oblique_rays_are_fisheye_corrected() {
        let c = cam();
        let angle = 0.4f32;
        // a wall hit at distance d along an angled ray lies d*cos(angle) ahead
        let oblique = c.project(4.0 / angle.cos(), angle, 1.0);
        let straight = c.project(4.0, 0.0, 1.0);
        assert!((oblique.height - straight.height).abs() < 1e-3);
        assert!((oblique.top - straight.top).abs() < 1e-3);
    }

    #[test]
    fn farther_walls_shrink_towards_horizon() {
        let c = cam();
        let near = c.project(2.0, 0.0, 1.0);
        let far = c.project(8.0, 0.0, 1.0);
        assert!(far.height < near.height);
        assert!(far.top > near.top);
        assert!(far.top + far.height < near.top + near.height);
    }

    #[test]
    fn zero_distance_is_unbounded_not_a_panic() {
        let span = cam().project(0.0, 0.0, 1.0);
        assert!(span.height.is_infinite());
    }
}
