// Format-agnostic repository of images used by the renderer.
// The map and the player refer to images through `TextureId` only.

use std::collections::HashMap;

/// Runtime handle for a texture in this bank.
///
/// *Guaranteed* to remain stable for the lifetime of the bank.
pub type TextureId = u16;

/// `TextureId` whose pixels are the checkerboard fallback.
/// Always = 0 because `TextureBank::new()` inserts it first.
pub const NO_TEXTURE: TextureId = 0;

/// CPU-side storage: 32-bit **ARGB** (0xAARRGGBB) in row-major order.
/// Texels with alpha 0 are fully transparent when blitted.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub name: String,
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<u32>,
}

/// Convenience checkerboard 8×8 (magenta/black).
impl Default for Texture {
    fn default() -> Self {
        const LIGHT: u32 = 0xFF_FF00FF;
        const DARK: u32 = 0xFF_000000;
        let mut pix = vec![0u32; 8 * 8];
        for y in 0..8 {
            for x in 0..8 {
                pix[y * 8 + x] = if (x ^ y) & 1 == 0 { LIGHT } else { DARK };
            }
        }
        Texture {
            name: "CHECKER".to_string(),
            w: 8,
            h: 8,
            pixels: pix,
        }
    }
}

impl Texture {
    /// Wrap a pixel buffer, checking that it matches `w * h`.
    pub fn from_pixels<S: Into<String>>(
        name: S,
        w: usize,
        h: usize,
        pixels: Vec<u32>,
    ) -> Result<Self, TextureError> {
        if w == 0 || h == 0 || pixels.len() != w * h {
            return Err(TextureError::BadSize {
                w,
                h,
                len: pixels.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            w,
            h,
            pixels,
        })
    }

    /// Texel at (`x`, `y`), both clamped into the image.
    #[inline]
    pub fn texel(&self, x: usize, y: usize) -> u32 {
        let x = x.min(self.w - 1);
        let y = y.min(self.h - 1);
        self.pixels[y * self.w + x]
    }
}

/// Things that can go wrong when using the bank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    /// Attempted to insert a second texture with an existing name.
    #[error("texture name `{0}` already present in bank")]
    Duplicate(String),

    /// Pixel buffer does not match the declared dimensions.
    #[error("texture {w}x{h} needs {} pixels, got {len}", .w * .h)]
    BadSize { w: usize, h: usize, len: usize },
}

/// A format-agnostic cache of textures.
///
/// * Does **not** know where pixels come from – that’s the caller’s job.
/// * Stores exactly one copy of every name.
/// * ID **0** is always the “missing” checkerboard.
pub struct TextureBank {
    by_name: HashMap<String, TextureId>,
    data: Vec<Texture>,
}

impl TextureBank {
    // ---------------------------------------------------------------------
    // Constructors
    // ---------------------------------------------------------------------

    /// Create an empty bank with a mandatory *missing* texture used as
    /// fallback.  The texture is inserted under the fixed name `"MISSING"`
    /// and obtains the handle **0**.
    pub fn new(missing_tex: Texture) -> Self {
        let mut by_name = HashMap::new();
        by_name.insert("MISSING".into(), NO_TEXTURE);
        Self {
            by_name,
            data: vec![missing_tex],
        }
    }

    pub fn default_with_checker() -> Self {
        Self::new(Texture::default())
    }

    // ---------------------------------------------------------------------
    // Query helpers
    // ---------------------------------------------------------------------

    /// Fallback-safe borrow: unknown ids resolve to the checkerboard.
    pub fn texture_or_missing(&self, id: TextureId) -> &Texture {
        self.data
            .get(id as usize)
            .unwrap_or(&self.data[NO_TEXTURE as usize])
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Insert a texture under its own name.
    ///
    /// * Returns the newly assigned `TextureId`.
    /// * Fails if the name already exists (`Duplicate`).
    pub fn insert(&mut self, tex: Texture) -> Result<TextureId, TextureError> {
        if self.by_name.contains_key(&tex.name) {
            return Err(TextureError::Duplicate(tex.name));
        }
        let id = self.data.len() as TextureId;
        self.by_name.insert(tex.name.clone(), id);
        self.data.push(tex);
        Ok(id)
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
