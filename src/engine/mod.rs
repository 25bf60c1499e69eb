mod columns;
mod frame;
mod projection;
mod sky;
mod types;

#[cfg(test)]
mod recorder;

pub use columns::{
    ColumnBounds, ColumnContext, RAIN_ALPHA, RAIN_HEIGHT, draw_column, fog_alpha, hit_index,
    rain_drop_count,
};
pub use frame::{FrameComposer, draw_weapon, weapon_rect};
pub use sky::{SkyLayout, draw_sky};
pub use types::{ProjectedSpan, Ray, RayCaster, RayStep, Scene};
