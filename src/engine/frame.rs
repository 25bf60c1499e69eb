use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    engine::{
        columns::{ColumnContext, draw_column},
        sky::draw_sky,
        types::Scene,
    },
    renderer::{Rect, Surface, TexRect},
    world::{CameraConfig, Player, Texture, TextureBank},
};

/// Draws whole frames: sky, then every column left to right, then the
/// weapon on top.
///
/// * Owns the camera and the random source used for rain.
/// * Columns share boundary pixels, so they are composited strictly in
///   increasing column order.
pub struct FrameComposer<R: Rng = StdRng> {
    camera: CameraConfig,
    rng: R,
}

impl FrameComposer<StdRng> {
    /// Composer with a rain generator seeded from `seed`.
    pub fn seeded(camera: CameraConfig, seed: u64) -> Self {
        Self::new(camera, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FrameComposer<R> {
    pub fn new(camera: CameraConfig, rng: R) -> Self {
        Self { camera, rng }
    }

    /// Render one complete frame of `scene` as seen by `player`.
    pub fn render<S: Surface, M: Scene>(
        &mut self,
        surface: &mut S,
        player: &Player,
        scene: &M,
        bank: &TextureBank,
    ) {
        let light = scene.light();
        let cam = &self.camera;

        draw_sky(
            surface,
            cam,
            player.direction,
            bank.texture_or_missing(scene.sky_texture()),
            light,
        );

        let ctx = ColumnContext {
            texture: bank.texture_or_missing(scene.wall_texture()),
            light,
        };
        for column in 0..cam.resolution() {
            let angle = cam.column_angle(column);
            let ray = scene.cast(player.pos, player.direction + angle, cam.range());
            draw_column(surface, cam, column, &ray, angle, ctx, &mut self.rng);
        }

        draw_weapon(
            surface,
            cam,
            bank.texture_or_missing(player.weapon),
            player.paces,
        );
    }
}

/// Where the weapon sprite lands for a walk phase of `paces`.
///
/// ```text
/// bob = (cos(2p), sin(4p)) * scale * 6
/// at  = (0.66 W, 0.6 H) + bob
/// ```
pub fn weapon_rect(cam: &CameraConfig, weapon: &Texture, paces: f32) -> Rect {
    let scale = cam.scale();
    let bob_x = (paces * 2.0).cos() * scale * 6.0;
    let bob_y = (paces * 4.0).sin() * scale * 6.0;
    Rect::new(
        cam.width_f() * 0.66 + bob_x,
        cam.height_f() * 0.6 + bob_y,
        weapon.w as f32 * scale,
        weapon.h as f32 * scale,
    )
}

pub fn draw_weapon<S: Surface>(surface: &mut S, cam: &CameraConfig, weapon: &Texture, paces: f32) {
    surface.draw_image(
        weapon,
        TexRect::full(weapon),
        weapon_rect(cam, weapon, paces),
        1.0,
    );
}
