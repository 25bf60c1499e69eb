//! Procedurally generated images for the viewer.
//!
//! Nothing here is loaded from disk: the wall, the sky panorama and the
//! weapon sprite are painted into [`Texture`]s at start-up.

use rand::Rng;

use crate::world::texture::{Texture, TextureError};

pub const WALL: &str = "WALL";
pub const SKY: &str = "SKY";
pub const WEAPON: &str = "WEAPON";

const OPAQUE: u32 = 0xFF_000000;

#[inline]
fn rgb(r: u8, g: u8, b: u8) -> u32 {
    OPAQUE | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Cheap integer hash for stable per-brick colour jitter.
#[inline]
fn jitter(a: usize, b: usize) -> u8 {
    let mut h = (a as u32).wrapping_mul(0x9E37_79B1) ^ (b as u32).wrapping_mul(0x85EB_CA6B);
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    (h >> 24) as u8 & 0x1F
}

/// Staggered red bricks with grey mortar, `w`×`h` texels.
pub fn bricks(w: usize, h: usize) -> Result<Texture, TextureError> {
    const BRICK_H: usize = 16;
    const BRICK_W: usize = 32;
    const MORTAR: usize = 2;

    let mut pixels = vec![0u32; w * h];
    for y in 0..h {
        let row = y / BRICK_H;
        let shift = if row % 2 == 0 { 0 } else { BRICK_W / 2 };
        for x in 0..w {
            let bx = (x + shift) % BRICK_W;
            let by = y % BRICK_H;
            pixels[y * w + x] = if bx < MORTAR || by < MORTAR {
                rgb(0x70, 0x6C, 0x66)
            } else {
                let j = jitter((x + shift) / BRICK_W, row);
                rgb(0x80 + j, 0x30 + j / 2, 0x24)
            };
        }
    }
    Texture::from_pixels(WALL, w, h, pixels)
}

/// Night sky: dark zenith fading to a hazy horizon, with stars in the upper
/// part. Only the vertical gradient varies, so the image tiles horizontally.
pub fn night_sky<R: Rng>(w: usize, h: usize, rng: &mut R) -> Result<Texture, TextureError> {
    let mut pixels = Vec::with_capacity(w * h);
    for y in 0..h {
        let t = y as f32 / h as f32;
        let r = (0x06 as f32 + t * 0x30 as f32) as u8;
        let g = (0x08 as f32 + t * 0x34 as f32) as u8;
        let b = (0x18 as f32 + t * 0x50 as f32) as u8;
        pixels.extend(std::iter::repeat_n(rgb(r, g, b), w));
    }

    let band = h * 2 / 3;
    let stars = if band == 0 { 0 } else { w * h / 400 };
    for _ in 0..stars {
        let x = rng.gen_range(0..w);
        let y = rng.gen_range(0..band);
        let v: u8 = rng.gen_range(0x90..=0xFF);
        pixels[y * w + x] = rgb(v, v, v);
    }

    Texture::from_pixels(SKY, w, h, pixels)
}

/// A gloved hand holding a knife, pointing up-left, on a transparent
/// background. `size` is both width and height.
pub fn knife(size: usize) -> Result<Texture, TextureError> {
    let s = size as f32;
    let mut pixels = vec![0u32; size * size];

    for y in 0..size {
        for x in 0..size {
            let (fx, fy) = (x as f32 / s, y as f32 / s);
            // blade: thin wedge along the diagonal from (0.15, 0.1) to (0.55, 0.55)
            let along = (fx + fy - 0.25) / 2.0;
            let across = (fx - fy - 0.05).abs();
            let blade = (0.0..0.4).contains(&along) && across < 0.02 + along * 0.12;
            // guard
            let guard = (fx + fy - 1.1).abs() < 0.03 && (fx - fy).abs() < 0.18;
            // fist
            let dx = fx - 0.68;
            let dy = fy - 0.72;
            let fist = dx * dx + dy * dy < 0.045;
            // forearm towards the bottom-right corner
            let arm = fx > 0.6 && fy > 0.75 && (fx - fy).abs() < 0.2;

            pixels[y * size + x] = if guard {
                rgb(0x50, 0x48, 0x40)
            } else if blade {
                let shine = (0xB0 as f32 + (1.0 - across * 20.0).max(0.0) * 0x40 as f32) as u8;
                rgb(shine, shine, shine.saturating_add(8))
            } else if fist || arm {
                rgb(0x3A, 0x2A, 0x20)
            } else {
                0
            };
        }
    }

    Texture::from_pixels(WEAPON, size, size, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn bricks_are_opaque_and_sized() {
        let t = bricks(64, 64).unwrap();
        assert_eq!(t.pixels.len(), 64 * 64);
        assert!(t.pixels.iter().all(|&p| p >> 24 == 0xFF));
        // mortar on the first rows, brick inside
        assert_ne!(t.texel(0, 0), t.texel(10, 8));
    }

    #[test]
    fn sky_wraps_at_the_horizon() {
        let t = night_sky(128, 48, &mut StdRng::seed_from_u64(1)).unwrap();
        // below the star band every row is uniform
        for y in 40..48 {
            assert_eq!(t.texel(0, y), t.texel(127, y));
        }
        // brighter towards the horizon
        assert!(t.texel(0, 47) & 0xFF > t.texel(0, 33) & 0xFF);
    }

    #[test]
    fn knife_has_transparent_background() {
        let t = knife(100).unwrap();
        assert_eq!(t.texel(99, 0) >> 24, 0);
        assert_eq!(t.texel(68, 72) >> 24, 0xFF);
    }

    #[test]
    fn empty_images_are_refused() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(bricks(0, 4), Err(TextureError::BadSize { w: 0, .. })));
        assert!(matches!(night_sky(16, 0, &mut rng), Err(TextureError::BadSize { h: 0, .. })));
        assert!(matches!(knife(0), Err(TextureError::BadSize { w: 0, h: 0, .. })));
    }

    #[test]
    fn one_row_sky_has_no_star_band() {
        let t = night_sky(800, 1, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(t.pixels.len(), 800);
        assert!(t.pixels.iter().all(|&p| p == t.pixels[0]));
    }
}
