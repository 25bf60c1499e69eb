use glam::Vec2;
use rand::Rng;

use crate::{
    engine::{Ray, RayCaster, RayStep, Scene},
    world::texture::TextureId,
};

/// Chance that a randomised cell becomes a wall.
const WALL_DENSITY: f64 = 0.3;
/// Ambient light right after a lightning strike.
pub const LIGHTNING_LEVEL: f32 = 2.0;
/// Light units lost per second after a strike.
const LIGHT_DECAY: f32 = 10.0;
/// Mean seconds between strikes once the sky is dark again.
const MEAN_STRIKE_INTERVAL: f32 = 5.0;

/// Square grid of wall heights (0 = open floor).
///
/// * Also carries the per-map lighting and texture handles, so it can serve
///   as the frame composer's [`Scene`].
#[derive(Clone, Debug)]
pub struct GridMap {
    size: usize,
    cells: Vec<u8>,
    light: f32,
    wall_texture: TextureId,
    sky_texture: TextureId,
}

impl GridMap {
    /// An empty `size`×`size` map.
    pub fn new(size: usize, wall_texture: TextureId, sky_texture: TextureId) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
            light: 0.0,
            wall_texture,
            sky_texture,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Height of the cell containing (`x`, `y`); `-1.0` outside the map.
    #[inline]
    pub fn get(&self, x: f32, y: f32) -> f32 {
        let (cx, cy) = (x.floor(), y.floor());
        let n = self.size as f32;
        if !(cx >= 0.0 && cy >= 0.0 && cx < n && cy < n) {
            return -1.0;
        }
        self.cells[cy as usize * self.size + cx as usize] as f32
    }

    /// True when (`x`, `y`) lies on open floor inside the map.
    #[inline]
    pub fn is_open(&self, x: f32, y: f32) -> bool {
        self.get(x, y) == 0.0
    }

    /// Set one cell; out-of-range coordinates are ignored.
    pub fn set(&mut self, x: usize, y: usize, height: u8) {
        if x < self.size && y < self.size {
            self.cells[y * self.size + x] = height;
        }
    }

    /// Refill every cell, making roughly 30 % of them walls.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = rng.gen_bool(WALL_DENSITY) as u8;
        }
        log::trace!(
            "randomised {0}x{0} map, {1} walls",
            self.size,
            self.cells.iter().filter(|&&c| c > 0).count()
        );
    }

    #[inline]
    pub fn light(&self) -> f32 {
        self.light
    }

    pub fn set_light(&mut self, light: f32) {
        self.light = light;
    }

    /// Advance the lightning by `dt` seconds: a lit sky decays back to dark,
    /// a dark sky strikes with probability `dt / 5`.
    pub fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        if self.light > 0.0 {
            self.light = (self.light - LIGHT_DECAY * dt).max(0.0);
        } else if rng.gen_range(0.0..1.0) * MEAN_STRIKE_INTERVAL < dt {
            self.light = LIGHTNING_LEVEL;
            log::debug!("lightning strike");
        }
    }
}

/*──────────────────────────── traversal ───────────────────────────────*/

/// Hop from `along` to the next grid line on the axis advancing by `run`,
/// returning `(d_along, d_across)`. `None` when the ray never crosses it.
#[inline]
fn hop(rise: f32, run: f32, along: f32) -> Option<(f32, f32)> {
    if run == 0.0 {
        return None;
    }
    let d_along = if run > 0.0 {
        (along + 1.0).floor() - along
    } else {
        (along - 1.0).ceil() - along
    };
    Some((d_along, d_along * (rise / run)))
}

#[inline]
fn fract(v: f32) -> f32 {
    v - v.floor()
}

impl RayCaster for GridMap {
    fn cast(&self, origin: Vec2, angle: f32, range: f32) -> Ray {
        let (sin, cos) = angle.sin_cos();
        let mut ray = Ray::new();
        ray.push(RayStep::default());

        let mut pos = origin;
        let mut distance = 0.0;
        loop {
            /* candidate crossings of a vertical (x) and horizontal (y) line */
            let via_x = hop(sin, cos, pos.x).map(|(dx, dy)| Vec2::new(dx, dy));
            let via_y = hop(cos, sin, pos.y).map(|(dy, dx)| Vec2::new(dx, dy));

            let (delta, crosses_x) = match (via_x, via_y) {
                (Some(x), Some(y)) if x.length_squared() < y.length_squared() => (x, true),
                (Some(x), None) => (x, true),
                (_, Some(y)) => (y, false),
                (None, None) => break,
            };

            pos += delta;
            distance += delta.length();
            // land exactly on the crossed line so the next hop is a full cell
            if crosses_x {
                pos.x = pos.x.round();
            } else {
                pos.y = pos.y.round();
            }
            // also stops on NaN
            if !(distance <= range) {
                break;
            }

            let step = if crosses_x {
                let back = if cos < 0.0 { 1.0 } else { 0.0 };
                RayStep {
                    distance,
                    height: self.get(pos.x - back, pos.y),
                    offset: fract(pos.y),
                    shading: if cos < 0.0 { 2.0 } else { 0.0 },
                }
            } else {
                let back = if sin < 0.0 { 1.0 } else { 0.0 };
                RayStep {
                    distance,
                    height: self.get(pos.x, pos.y - back),
                    offset: fract(pos.x),
                    shading: if sin < 0.0 { 2.0 } else { 1.0 },
                }
            };
            ray.push(step);
        }
        ray
    }
}

impl Scene for GridMap {
    fn light(&self) -> f32 {
        self.light
    }

    fn wall_texture(&self) -> TextureId {
        self.wall_texture
    }

    fn sky_texture(&self) -> TextureId {
        self.sky_texture
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
