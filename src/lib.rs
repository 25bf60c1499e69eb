//! Rainy-night grid raycaster.
//!
//! * [`world`] holds the collaborators: camera configuration, textures, the
//!   grid map with its ray traversal, and the player.
//! * [`engine`] is the render core: projection, sky, columns and the frame
//!   composer.
//! * [`renderer`] is the output surface the engine draws into.

pub mod config;
pub mod engine;
pub mod renderer;
pub mod world;
