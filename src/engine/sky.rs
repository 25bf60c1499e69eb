use std::f32::consts::PI;

use crate::{
    renderer::{Rect, Surface, TexRect, WHITE},
    world::{CameraConfig, Texture},
};

/// Horizontal placement of the sky panorama for one heading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyLayout {
    /// Screen x of the first tile, always in `(-width, 0]`.
    pub left: f32,
    /// Scaled tile width in pixels.
    pub width: f32,
    /// Copies drawn side by side starting at `left`.
    pub tiles: usize,
}

impl SkyLayout {
    /// Scale a `sky_w`×`sky_h` panorama to twice the viewport height's aspect
    /// and pan it with `direction`.
    pub fn new(cam: &CameraConfig, direction: f32, sky_w: usize, sky_h: usize) -> Self {
        let width = sky_w as f32 * (cam.height_f() / sky_h as f32) * 2.0;
        let pan = (direction / 2.0) * PI * width;
        let mut left = -pan.rem_euclid(width);
        // rem_euclid may round up to `width` for tiny negative pans
        if left <= -width {
            left = 0.0;
        }

        let mut tiles = 1;
        let mut right = left + width;
        while right < cam.width_f() {
            tiles += 1;
            right += width;
        }
        Self { left, width, tiles }
    }

    /// Screen x of every tile, left to right.
    pub fn tile_lefts(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.tiles).map(|i| self.left + i as f32 * self.width)
    }
}

/// Paint the wrapped sky and, when `ambient > 0`, brighten the horizon band.
pub fn draw_sky<S: Surface>(
    surface: &mut S,
    cam: &CameraConfig,
    direction: f32,
    sky: &Texture,
    ambient: f32,
) {
    let layout = SkyLayout::new(cam, direction, sky.w, sky.h);
    for x in layout.tile_lefts() {
        surface.draw_image(
            sky,
            TexRect::full(sky),
            Rect::new(x, 0.0, layout.width, cam.height_f()),
            1.0,
        );
    }

    if ambient > 0.0 {
        let half = cam.height_f() * 0.5;
        surface.fill_rect(Rect::new(0.0, half, cam.width_f(), half), WHITE, ambient * 0.1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::recorder::Recorder;
    use std::f32::consts::TAU;

    fn cam() -> CameraConfig {
        CameraConfig::with_defaults(800, 600, 160).unwrap()
    }

    fn sky() -> Texture {
        Texture::from_pixels("SKY", 40, 15, vec![0xFF_101030; 40 * 15]).unwrap()
    }

    #[test]
    fn tile_width_doubles_height_aspect() {
        let layout = SkyLayout::new(&cam(), 0.0, 40, 15);
        // 40 * (600 / 15) * 2
        assert!((layout.width - 3200.0).abs() < 1e-3);
        assert_eq!(layout.left, 0.0);
        assert_eq!(layout.tiles, 1);
    }

    #[test]
    fn pans_proportionally_before_wrapping() {
        let layout = SkyLayout::new(&cam(), 0.5, 40, 15);
        let expected = -(0.5 / 2.0) * PI * 3200.0;
        assert!((layout.left - expected).abs() < 1e-2);
    }

    #[test]
    fn tiles_cover_viewport_for_all_headings() {
        let c = cam();
        for (w, h) in [(40, 15), (16, 16), (10, 40)] {
            for i in -64..256 {
                let direction = i as f32 * (2.0 * TAU) / 256.0;
                let l = SkyLayout::new(&c, direction, w, h);
                assert!(l.left <= 0.0 && l.left > -l.width, "left {} at {direction}", l.left);
                let right = l.left + l.tiles as f32 * l.width;
                assert!(right >= c.width_f(), "gap at heading {direction}");
                // no tile beyond the one that reaches the right edge
                assert!(right - l.width < c.width_f());
            }
        }
    }

    #[test]
    fn second_copy_only_when_first_falls_short() {
        let c = cam();
        for i in 0..256 {
            let direction = i as f32 * (2.0 * TAU) / 256.0;
            let l = SkyLayout::new(&c, direction, 40, 15);
            let short = l.left + l.width < c.width_f();
            assert_eq!(l.tiles == 2, short);
            assert!(l.tiles <= 2);
        }
    }

    #[test]
    fn full_turn_lands_off_tile_boundary() {
        // one turn pans π²·width, so crossing heading 0 shifts the sky by
        // the fractional part of π² of a tile
        let c = cam();
        let start = SkyLayout::new(&c, 0.0, 40, 15);
        let turned = SkyLayout::new(&c, TAU - 1e-4, 40, 15);
        let jump = (PI * PI).fract() * start.width;
        assert_eq!(start.left, 0.0);
        assert!((turned.left + jump).abs() < 2.0, "left {}", turned.left);
    }

    #[test]
    fn dark_sky_skips_horizon_overlay() {
        let mut rec = Recorder::default();
        draw_sky(&mut rec, &cam(), 1.0, &sky(), 0.0);
        assert_eq!(rec.fills().count(), 0);
        assert!(rec.images().count() >= 1);
    }

    #[test]
    fn lightning_brightens_lower_half() {
        let mut rec = Recorder::default();
        draw_sky(&mut rec, &cam(), 1.0, &sky(), 2.0);
        let fills: Vec<_> = rec.fills().collect();
        assert_eq!(fills.len(), 1);
        let (dst, colour, alpha) = fills[0];
        assert_eq!(*dst, Rect::new(0.0, 300.0, 800.0, 300.0));
        assert_eq!(colour, WHITE);
        assert!((alpha - 0.2).abs() < 1e-6);
    }
}
