use std::f32::consts::{PI, TAU};

use bitflags::bitflags;
use glam::Vec2;

use crate::world::{grid::GridMap, texture::TextureId};

/// Radians per second while a turn key is held.
pub const TURN_RATE: f32 = PI;
/// Cells per second while a walk key is held.
pub const WALK_SPEED: f32 = 3.0;

bitflags! {
    /// Keys held during one frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct InputCmd: u8 {
        const FORWARD    = 0b0001;
        const BACKWARD   = 0b0010;
        const TURN_LEFT  = 0b0100;
        const TURN_RIGHT = 0b1000;
    }
}

/// The viewer walking the grid.
#[derive(Clone, Copy, Debug)]
pub struct Player {
    /// Position in map cells.
    pub pos: Vec2,
    /// Heading in radians, kept in `[0, 2π)`; 0 looks along +x.
    pub direction: f32,
    /// Distance walked so far; drives the weapon bob.
    pub paces: f32,
    pub weapon: TextureId,
}

impl Player {
    pub fn new(pos: Vec2, direction: f32, weapon: TextureId) -> Self {
        Self {
            pos,
            direction: direction.rem_euclid(TAU),
            paces: 0.0,
            weapon,
        }
    }

    /// Turn by `angle` radians (positive = clockwise on screen).
    pub fn rotate(&mut self, angle: f32) {
        self.direction = (self.direction + angle).rem_euclid(TAU);
    }

    /// Move `distance` cells along the heading, sliding along walls: each
    /// axis is only applied if it lands on open floor.
    pub fn walk(&mut self, distance: f32, map: &GridMap) {
        let (s, c) = self.direction.sin_cos();
        let dx = c * distance;
        let dy = s * distance;
        if map.is_open(self.pos.x + dx, self.pos.y) {
            self.pos.x += dx;
        }
        if map.is_open(self.pos.x, self.pos.y + dy) {
            self.pos.y += dy;
        }
        self.paces += distance;
    }

    /// Apply one frame of input lasting `dt` seconds.
    pub fn update(&mut self, cmd: InputCmd, map: &GridMap, dt: f32) {
        if cmd.contains(InputCmd::TURN_LEFT) {
            self.rotate(-TURN_RATE * dt);
        }
        if cmd.contains(InputCmd::TURN_RIGHT) {
            self.rotate(TURN_RATE * dt);
        }
        if cmd.contains(InputCmd::FORWARD) {
            self.walk(WALK_SPEED * dt, map);
        }
        if cmd.contains(InputCmd::BACKWARD) {
            self.walk(-WALK_SPEED * dt, map);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn open_map() -> GridMap {
        GridMap::new(8, 1, 2)
    }

    #[test]
    fn heading_wraps() {
        let mut p = Player::new(Vec2::new(1.5, 1.5), -FRAC_PI_2, 3);
        assert!((p.direction - 3.0 * FRAC_PI_2).abs() < 1e-5);
        p.rotate(FRAC_PI_2);
        assert!(p.direction >= 0.0 && p.direction < TAU);
        assert!(p.direction.abs() < 1e-4 || (p.direction - TAU).abs() < 1e-4);
    }

    #[test]
    fn walking_accumulates_paces() {
        let map = open_map();
        let mut p = Player::new(Vec2::new(1.5, 1.5), 0.0, 3);
        p.walk(1.0, &map);
        assert!((p.pos - Vec2::new(2.5, 1.5)).length() < 1e-5);
        p.walk(-0.5, &map);
        assert!((p.paces - 0.5).abs() < 1e-6);
    }

    #[test]
    fn walls_block_but_allow_sliding() {
        let mut map = open_map();
        map.set(3, 1, 1);
        // heading diagonally into the wall east of us
        let mut p = Player::new(Vec2::new(2.8, 1.5), 0.5, 3);
        p.walk(0.5, &map);
        assert!(p.pos.x < 3.0, "walked into the wall");
        assert!(p.pos.y > 1.5, "should slide along y");
    }

    #[test]
    fn cannot_leave_the_map() {
        let map = open_map();
        let mut p = Player::new(Vec2::new(0.2, 4.5), PI, 3);
        p.walk(1.0, &map);
        assert!(p.pos.x >= 0.0);
    }

    #[test]
    fn input_drives_turn_and_walk() {
        let map = open_map();
        let mut p = Player::new(Vec2::new(4.5, 4.5), 0.0, 3);
        p.update(InputCmd::FORWARD | InputCmd::TURN_RIGHT, &map, 0.1);
        assert!((p.direction - PI * 0.1).abs() < 1e-5);
        assert!((p.paces - 0.3).abs() < 1e-5);

        p.update(InputCmd::TURN_LEFT, &map, 0.1);
        assert!(p.direction.abs() < 1e-5);

        let before = p.pos;
        p.update(InputCmd::empty(), &map, 0.5);
        assert_eq!(p.pos, before);
    }
}
