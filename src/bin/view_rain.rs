//! First-person walk through a randomly generated, rain-soaked grid.
//!
//! Controls  W/↑ = forward  S/↓ = back  A/← D/→ = turn  Esc = quit
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- --seed 7
//! ```

use clap::Parser;
use glam::Vec2;
use minifb::{Key, Window, WindowOptions};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::{Duration, Instant};

use raincaster::{
    config::Opts,
    engine::FrameComposer,
    renderer::Software,
    world::{GridMap, InputCmd, Player, TextureBank, art},
};

/// Longest frame step fed to the simulation, so a stall doesn't teleport.
const MAX_DT: f32 = 0.2;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::parse();
    let camera = opts.camera()?;

    let seed = opts.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    log::info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    // ─────────── images ───────────
    let mut bank = TextureBank::default_with_checker();
    let wall = bank.insert(art::bricks(64, 64)?)?;
    let sky = bank.insert(art::night_sky(1024, 384, &mut rng)?)?;
    let weapon = bank.insert(art::knife(240)?)?;

    // ─────────── world ────────────
    let mut map = GridMap::new(opts.map_size, wall, sky);
    map.randomize(&mut rng);
    let centre = opts.map_size / 2;
    map.set(centre, centre, 0);
    let mut player = Player::new(Vec2::splat(centre as f32 + 0.5), 0.0, weapon);

    let mut composer = FrameComposer::new(camera, StdRng::seed_from_u64(rng.r#gen()));
    let mut renderer = Software::default();

    let (w, h) = (camera.width(), camera.height());
    let mut win = Window::new("raincaster", w, h, WindowOptions::default())?;
    win.set_target_fps(opts.fps);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last
    let mut last_frame = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32().min(MAX_DT);
        last_frame = now;

        /* --------------- one InputCmd per frame --------------------------- */
        let mut cmd = InputCmd::empty();
        cmd.set(
            InputCmd::FORWARD,
            win.is_key_down(Key::Up) || win.is_key_down(Key::W),
        );
        cmd.set(
            InputCmd::BACKWARD,
            win.is_key_down(Key::Down) || win.is_key_down(Key::S),
        );
        cmd.set(
            InputCmd::TURN_LEFT,
            win.is_key_down(Key::Left) || win.is_key_down(Key::A),
        );
        cmd.set(
            InputCmd::TURN_RIGHT,
            win.is_key_down(Key::Right) || win.is_key_down(Key::D),
        );

        player.update(cmd, &map, dt);
        map.update(dt, &mut rng);

        /* draw */
        let t0 = Instant::now(); // ┌─ frame timer start
        renderer.begin_frame(w, h);
        composer.render(&mut renderer, &player, &map, &bank);
        acc_time += t0.elapsed();
        acc_frames += 1;
        renderer.end_frame(|fb, w, h| win.update_with_buffer(fb, w, h))?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            log::info!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
