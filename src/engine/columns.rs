//! Per-column wall and rain compositing.
//!
//! A ray arrives nearest-first. The column is painted by walking it
//! **back-to-front**: every step may scatter rain drops into the column,
//! and the hit step (the nearest step with a wall) additionally lays down
//! its texture slice and fog. Rain belonging to steps nearer than the wall
//! is therefore drawn over it.

use rand::Rng;

use crate::{
    engine::types::RayStep,
    renderer::{BLACK, Rect, Surface, TexRect, WHITE},
    world::{CameraConfig, Texture},
};

/// World height used to size rain streaks, independent of the wall.
pub const RAIN_HEIGHT: f32 = 0.1;
/// Opacity of a single rain streak.
pub const RAIN_ALPHA: f32 = 0.15;

/// Screen-space x extent of one column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnBounds {
    pub left: f32,
    pub width: f32,
}

impl ColumnBounds {
    /// `left = floor(column * spacing)`, `width = ceil(spacing)`.
    /// Neighbours may overlap by one pixel but never leave a gap.
    pub fn new(cam: &CameraConfig, column: usize) -> Self {
        Self {
            left: (column as f32 * cam.spacing()).floor(),
            width: cam.spacing().ceil(),
        }
    }
}

/// Map state the column needs besides the ray.
#[derive(Clone, Copy)]
pub struct ColumnContext<'a> {
    pub texture: &'a Texture,
    pub light: f32,
}

/// Index of the first step that actually carries a wall.
#[inline]
pub fn hit_index(ray: &[RayStep]) -> Option<usize> {
    ray.iter().position(|step| step.height > 0.0)
}

/// Opacity of the black wash over a wall slice. Never negative, and never
/// decreasing with distance.
#[inline]
pub fn fog_alpha(distance: f32, shading: f32, light_range: f32, light: f32) -> f32 {
    ((distance + shading) / light_range - light).max(0.0)
}

/// Streaks drawn for a rain weight: one fewer than `ceil(rain)`.
#[inline]
pub fn rain_drop_count(rain: f32) -> usize {
    if rain > 1.0 {
        rain.ceil() as usize - 1
    } else {
        0
    }
}

#[inline]
fn unit<R: Rng>(rng: &mut R) -> f32 {
    rng.gen_range(0.0..1.0)
}

/// Composite one column of the frame.
pub fn draw_column<S: Surface, R: Rng>(
    surface: &mut S,
    cam: &CameraConfig,
    column: usize,
    ray: &[RayStep],
    angle: f32,
    ctx: ColumnContext<'_>,
    rng: &mut R,
) {
    let bounds = ColumnBounds::new(cam, column);
    let hit = hit_index(ray);

    for (s, step) in ray.iter().enumerate().rev() {
        // cubing keeps most steps dry; deeper steps may carry more drops
        let rain = unit(rng).powi(3) * s as f32;
        let rain_span = (rain > 0.0).then(|| cam.project(step.distance, angle, RAIN_HEIGHT));

        if hit == Some(s) {
            draw_wall(surface, cam, bounds, step, angle, ctx);
        }

        if let Some(span) = rain_span {
            for _ in 0..rain_drop_count(rain) {
                let y = unit(rng) * span.top;
                surface.fill_rect(
                    Rect::new(bounds.left, y, 1.0, span.height),
                    WHITE,
                    RAIN_ALPHA,
                );
            }
        }
    }
}

fn draw_wall<S: Surface>(
    surface: &mut S,
    cam: &CameraConfig,
    bounds: ColumnBounds,
    step: &RayStep,
    angle: f32,
    ctx: ColumnContext<'_>,
) {
    let tex = ctx.texture;
    let Some(last_x) = tex.w.checked_sub(1) else {
        return;
    };
    // offsets outside [0, 1) are the caster's bug; clamp rather than index out
    let tex_x = ((tex.w as f32 * step.offset).floor() as usize).min(last_x);
    let wall = cam.project(step.distance, angle, step.height);
    let dst = Rect::new(bounds.left, wall.top, bounds.width, wall.height);

    surface.draw_image(tex, TexRect::column(tex, tex_x), dst, 1.0);
    surface.fill_rect(
        dst,
        BLACK,
        fog_alpha(step.distance, step.shading, cam.light_range(), ctx.light),
    );
}

/*──────────────────────────────── Tests ───────────────────────────────*/
