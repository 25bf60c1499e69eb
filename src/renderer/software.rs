//! ---------------------------------------------------------------------------
//! CPU frame-buffer surface
//!
//! * Fills a `Vec<u32>` frame-buffer in **0x00RRGGBB** format, ready for
//!   `minifb::Window::update_with_buffer`.
//! * A rectangle covers every pixel whose centre lies inside it; anything
//!   outside the viewport is clipped, so infinite or NaN extents coming from
//!   degenerate projections simply draw nothing.
//! ---------------------------------------------------------------------------

use std::ops::Range;

use crate::{
    renderer::{Rect, Rgba, Surface, TexRect, blend},
    world::Texture,
};

/// Clear colour between frames.
const CLEAR: Rgba = 0x00_000000;

/// Software back-end with an internal scratch buffer for one frame.
#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Software {
    /// (Re)allocate scratch for the requested resolution and clear it.
    pub fn begin_frame(&mut self, w: usize, h: usize) {
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, CLEAR);
        }
        self.scratch.fill(CLEAR);
    }

    /// Finish the frame and **loan** the finished buffer to `submit`.
    pub fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        submit(&self.scratch, self.width, self.height)
    }

    /// Read back one pixel (tests and debugging).
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.scratch[y * self.width + x]
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.scratch
    }
}

/// Pixel indices whose centres fall inside `[start, start + len)`.
fn covered(start: f32, len: f32, limit: usize) -> Range<usize> {
    let lim = limit as f32;
    let lo = (start - 0.5).ceil().clamp(0.0, lim) as usize;
    let hi = (start + len - 0.5).ceil().clamp(0.0, lim) as usize;
    lo..hi.max(lo)
}

/*──────────────────────── Surface trait impl ─────────────────────────*/
impl Surface for Software {
    fn draw_image(&mut self, tex: &Texture, src: TexRect, dst: Rect, alpha: f32) {
        if alpha <= 0.0 || src.w == 0 || src.h == 0 {
            return;
        }
        let dst = dst.normalized();
        if dst.w <= 0.0 || dst.h <= 0.0 {
            return;
        }

        let xs = covered(dst.x, dst.w, self.width);
        let ys = covered(dst.y, dst.h, self.height);
        if xs.is_empty() || ys.is_empty() {
            return;
        }

        /* texel column for every screen column, computed once */
        let us: Vec<usize> = xs
            .clone()
            .map(|px| {
                let t = (px as f32 + 0.5 - dst.x) / dst.w;
                src.x + ((t * src.w as f32) as usize).min(src.w - 1)
            })
            .collect();

        for py in ys {
            let t = (py as f32 + 0.5 - dst.y) / dst.h;
            let v = src.y + ((t * src.h as f32) as usize).min(src.h - 1);
            let row = py * self.width;
            for (px, &u) in xs.clone().zip(&us) {
                let texel = tex.texel(u, v);
                let a = (texel >> 24) as f32 / 255.0 * alpha;
                if a > 0.0 {
                    let idx = row + px;
                    self.scratch[idx] = blend(self.scratch[idx], texel, a);
                }
            }
        }
    }

    fn fill_rect(&mut self, dst: Rect, colour: Rgba, alpha: f32) {
        if alpha <= 0.0 {
            return;
        }
        let dst = dst.normalized();
        let xs = covered(dst.x, dst.w, self.width);
        for py in covered(dst.y, dst.h, self.height) {
            let row = py * self.width;
            for idx in xs.clone().map(|px| row + px) {
                self.scratch[idx] = blend(self.scratch[idx], colour, alpha);
            }
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
