use glam::Vec2;
use smallvec::SmallVec;

use crate::world::TextureId;

/// One grid-line crossing along a cast ray.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RayStep {
    /// Distance from the viewer in map cells (≥ 0).
    pub distance: f32,
    /// Wall height of the cell entered; `<= 0` means nothing to draw.
    pub height: f32,
    /// Horizontal texture coordinate in `[0, 1)`.
    pub offset: f32,
    /// Extra fog distance; makes the two wall orientations read differently.
    pub shading: f32,
}

/// Steps ordered nearest first, starting with the viewer's own position.
/// 32 inline slots cover the default 14-cell range without spilling.
pub type Ray = SmallVec<[RayStep; 32]>;

/// Vertical screen extent of something standing on the floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedSpan {
    pub top: f32,
    pub height: f32,
}

/// Grid traversal used to build one [`Ray`] per column.
pub trait RayCaster {
    /// Walk from `origin` along `angle` until `range` is exceeded.
    /// Never fails; a ray that hits nothing still carries the origin step.
    fn cast(&self, origin: Vec2, angle: f32, range: f32) -> Ray;
}

/// Everything the frame composer reads from the map for one frame.
/// There is no light threshold: nothing in the frame consumes one.
pub trait Scene: RayCaster {
    /// Ambient light level; 0 is a dark night, lightning pushes it to 2.
    fn light(&self) -> f32;
    fn wall_texture(&self) -> TextureId;
    fn sky_texture(&self) -> TextureId;
}
