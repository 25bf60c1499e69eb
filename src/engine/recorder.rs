//! Surface double that records draw calls instead of rasterising them.

use crate::{
    renderer::{Rect, Rgba, Surface, TexRect},
    world::Texture,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Image {
        texture: String,
        src: TexRect,
        dst: Rect,
        alpha: f32,
    },
    Fill {
        dst: Rect,
        colour: Rgba,
        alpha: f32,
    },
}

#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn images(&self) -> impl Iterator<Item = (&str, &TexRect, &Rect)> {
        self.ops.iter().filter_map(|op| match op {
            Op::Image {
                texture, src, dst, ..
            } => Some((texture.as_str(), src, dst)),
            Op::Fill { .. } => None,
        })
    }

    pub fn fills(&self) -> impl Iterator<Item = (&Rect, Rgba, f32)> {
        self.ops.iter().filter_map(|op| match op {
            Op::Fill { dst, colour, alpha } => Some((dst, *colour, *alpha)),
            Op::Image { .. } => None,
        })
    }
}

impl Surface for Recorder {
    fn draw_image(&mut self, tex: &Texture, src: TexRect, dst: Rect, alpha: f32) {
        self.ops.push(Op::Image {
            texture: tex.name.clone(),
            src,
            dst,
            alpha,
        });
    }

    fn fill_rect(&mut self, dst: Rect, colour: Rgba, alpha: f32) {
        self.ops.push(Op::Fill { dst, colour, alpha });
    }
}
