pub mod art;
mod camera;
mod grid;
mod player;
mod texture;

pub use camera::{
    CameraConfig, ConfigError, DEFAULT_FOCAL_LENGTH, DEFAULT_LIGHT_RANGE, DEFAULT_RANGE,
};

pub use grid::{GridMap, LIGHTNING_LEVEL};

pub use player::{InputCmd, Player, TURN_RATE, WALK_SPEED};

pub use texture::{NO_TEXTURE, Texture, TextureBank, TextureError, TextureId};
