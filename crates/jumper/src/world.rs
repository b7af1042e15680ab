//! Player and platform bodies for the jumper.
//!
//! All positions are top-left corners in world units, y growing downwards.

use serde::Serialize;

use tui_arcade_core::SimpleRng;
use tui_arcade_types::WORLD_WIDTH;

pub const PLAYER_SIZE: f32 = 32.0;
pub const PLAYER_START_X: f32 = 400.0;
pub const PLAYER_SPEED: f32 = 200.0;

pub const PLATFORM_WIDTH: f32 = 100.0;
pub const PLATFORM_HEIGHT: f32 = 10.0;
/// Vertical gap between consecutive platforms
pub const PLATFORM_SPACING: f32 = 100.0;
/// Extra depth below a platform's surface that still counts as landing on it
pub const LANDING_TOLERANCE: f32 = 10.0;

/// Seconds a broken platform survives after being landed on
pub const CRUMBLE_SECS: f32 = 0.1;

pub const SPRING_CHANCE: f32 = 0.2;
pub const BROKEN_CHANCE: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformKind {
    Normal,
    /// Launches the player with the spring impulse
    Spring,
    /// Crumbles shortly after being landed on
    Broken,
}

impl PlatformKind {
    /// Spring with [`SPRING_CHANCE`], otherwise broken with [`BROKEN_CHANCE`], otherwise normal
    pub fn roll(rng: &mut SimpleRng) -> Self {
        if rng.next_f32() < SPRING_CHANCE {
            PlatformKind::Spring
        } else if rng.next_f32() < BROKEN_CHANCE {
            PlatformKind::Broken
        } else {
            PlatformKind::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub kind: PlatformKind,
    /// Seconds left before a landed-on broken platform disappears
    pub crumble: Option<f32>,
}

impl Platform {
    pub fn new(x: f32, y: f32, kind: PlatformKind) -> Self {
        Self {
            x,
            y,
            kind,
            crumble: None,
        }
    }

    /// Random column and kind at height `y`
    pub fn random(rng: &mut SimpleRng, y: f32) -> Self {
        let x = rng.next_f32() * (WORLD_WIDTH - PLATFORM_WIDTH);
        Self::new(x, y, PlatformKind::roll(rng))
    }

    pub fn width(&self) -> f32 {
        PLATFORM_WIDTH
    }

    pub fn height(&self) -> f32 {
        PLATFORM_HEIGHT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity, units per second (negative is up)
    pub vy: f32,
    pub grounded: bool,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            vy: 0.0,
            grounded: false,
        }
    }

    pub fn width(&self) -> f32 {
        PLAYER_SIZE
    }

    pub fn height(&self) -> f32 {
        PLAYER_SIZE
    }

    pub fn bottom(&self) -> f32 {
        self.y + PLAYER_SIZE
    }

    /// Falling, feet inside the platform's landing band, and overlapping it horizontally
    pub fn lands_on(&self, p: &Platform) -> bool {
        self.vy > 0.0
            && self.bottom() > p.y
            && self.bottom() < p.y + PLATFORM_HEIGHT + LANDING_TOLERANCE
            && self.x + PLAYER_SIZE > p.x
            && self.x < p.x + PLATFORM_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_requires_downward_motion() {
        let platform = Platform::new(100.0, 300.0, PlatformKind::Normal);
        let mut player = Player::new(120.0, 300.0 - PLAYER_SIZE + 2.0);

        player.vy = -10.0;
        assert!(!player.lands_on(&platform));

        player.vy = 10.0;
        assert!(player.lands_on(&platform));
    }

    #[test]
    fn landing_band_and_overlap() {
        let platform = Platform::new(100.0, 300.0, PlatformKind::Normal);
        let mut player = Player::new(120.0, 0.0);
        player.vy = 50.0;

        // Feet exactly on the surface do not count yet.
        player.y = 300.0 - PLAYER_SIZE;
        assert!(!player.lands_on(&platform));

        // Too deep below the surface.
        player.y = 300.0 + PLATFORM_HEIGHT + LANDING_TOLERANCE - PLAYER_SIZE;
        assert!(!player.lands_on(&platform));

        // Beside the platform.
        player.y = 300.0 - PLAYER_SIZE + 1.0;
        player.x = 100.0 + PLATFORM_WIDTH;
        assert!(!player.lands_on(&platform));
        player.x = 100.0 - PLAYER_SIZE;
        assert!(!player.lands_on(&platform));
    }

    #[test]
    fn random_platform_fits_the_world() {
        let mut rng = SimpleRng::new(5);
        for _ in 0..200 {
            let p = Platform::random(&mut rng, 0.0);
            assert!(p.x >= 0.0 && p.x + PLATFORM_WIDTH <= WORLD_WIDTH);
            assert!(p.crumble.is_none());
        }
    }

    #[test]
    fn all_kinds_are_rolled() {
        let mut rng = SimpleRng::new(77);
        let mut seen = [false; 3];
        for _ in 0..500 {
            match PlatformKind::roll(&mut rng) {
                PlatformKind::Normal => seen[0] = true,
                PlatformKind::Spring => seen[1] = true,
                PlatformKind::Broken => seen[2] = true,
            }
        }
        assert_eq!(seen, [true; 3]);
    }
}
