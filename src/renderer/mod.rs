//! Output-surface abstraction.
//!
//! *The render core never touches a pixel buffer directly.*
//! It issues image blits and solid fills against a type that implements
//! [`Surface`], which composites them with source-over alpha blending.
//!
//! * [`Software`] is the CPU frame-buffer back-end used by the viewer.
//! * Tests substitute a recording surface to assert on the issued calls.

use crate::world::Texture;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

pub const BLACK: Rgba = 0x00_000000;
pub const WHITE: Rgba = 0x00_FFFFFF;

/// Destination rectangle in screen pixels; may be fractional, negative or
/// larger than the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Same rectangle with non-negative width and height.
    pub fn normalized(self) -> Self {
        let (x, w) = if self.w < 0.0 {
            (self.x + self.w, -self.w)
        } else {
            (self.x, self.w)
        };
        let (y, h) = if self.h < 0.0 {
            (self.y + self.h, -self.h)
        } else {
            (self.y, self.h)
        };
        Self { x, y, w, h }
    }
}

/// Source rectangle in texels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TexRect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl TexRect {
    /// The whole texture.
    pub fn full(tex: &Texture) -> Self {
        Self {
            x: 0,
            y: 0,
            w: tex.w,
            h: tex.h,
        }
    }

    /// One texel wide, full height, at column `x`.
    pub fn column(tex: &Texture, x: usize) -> Self {
        Self {
            x,
            y: 0,
            w: 1,
            h: tex.h,
        }
    }
}

/// A drawing target that owns one frame at a time.
pub trait Surface {
    /// Stretch `src` of `tex` onto `dst`, blended at `alpha`
    /// (multiplied by each texel's own alpha).
    fn draw_image(&mut self, tex: &Texture, src: TexRect, dst: Rect, alpha: f32);

    /// Blend a solid `colour` over `dst` at `alpha`.
    /// `alpha <= 0` leaves the surface untouched, `alpha >= 1` is opaque.
    fn fill_rect(&mut self, dst: Rect, colour: Rgba, alpha: f32);
}

/// Source-over blend of `src` onto `dst` with coverage `alpha` in `[0, 1]`.
#[inline]
pub fn blend(dst: Rgba, src: Rgba, alpha: f32) -> Rgba {
    if alpha >= 1.0 {
        return src & 0x00_FFFFFF;
    }
    let a = (alpha * 256.0) as u32;
    let inv = 256 - a;
    let mix = |shift: u32| {
        let s = (src >> shift) & 0xFF;
        let d = (dst >> shift) & 0xFF;
        ((s * a + d * inv) >> 8) << shift
    };
    mix(16) | mix(8) | mix(0)
}

pub mod software;
pub use software::Software;
