//! Jumper game module - endless platform-jumper state and physics
//!
//! The player falls under gravity, lands on platforms, and jumps from them.
//! When the player climbs above the scroll line the world shifts down and new
//! platforms appear at the top. Falling out of the bottom of the world ends
//! the run; the host shows its start screen until [`JumperGame::start`] runs again.

use arrayvec::ArrayVec;
use serde::Serialize;
use tracing::{debug, info};

use tui_arcade_core::SimpleRng;
use tui_arcade_types::{JumperAction, JumperInput, MAX_FRAME_DT, WORLD_HEIGHT, WORLD_WIDTH};

use crate::world::{
    Platform, PlatformKind, Player, CRUMBLE_SECS, PLATFORM_SPACING, PLATFORM_WIDTH, PLAYER_SIZE,
    PLAYER_SPEED, PLAYER_START_X,
};

/// Downward acceleration, units per second squared
pub const GRAVITY: f32 = 800.0;
pub const JUMP_VELOCITY: f32 = -400.0;
pub const SPRING_VELOCITY: f32 = -600.0;

/// The player is never drawn above this line; the world scrolls instead
pub const SCROLL_LINE: f32 = 200.0;
/// New platforms are added while the topmost one is below this line
pub const SPAWN_LINE: f32 = 100.0;

pub const FIRST_PLATFORM_Y: f32 = 500.0;
pub const INITIAL_PLATFORMS: usize = 5;
pub const MAX_PLATFORMS: usize = 16;

/// Points per touchdown; resting on a platform across frames scores once
pub const LANDING_SCORE: u32 = 10;

/// Result of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JumperOutcome {
    pub score: u32,
}

#[derive(Debug, Clone)]
pub struct JumperGame {
    player: Player,
    platforms: ArrayVec<Platform, MAX_PLATFORMS>,
    rng: SimpleRng,
    score: u32,
    running: bool,
    runs: u32,
    last_outcome: Option<JumperOutcome>,
}

impl JumperGame {
    /// A laid-out world that is not running yet
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            player: Player::new(PLAYER_START_X, FIRST_PLATFORM_Y - PLAYER_SIZE),
            platforms: ArrayVec::new(),
            rng: SimpleRng::new(seed),
            score: 0,
            running: false,
            runs: 0,
            last_outcome: None,
        };
        game.reset_world();
        game
    }

    /// Begin a new run; does nothing while a run is in progress
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.reset_world();
        self.running = true;
        self.runs += 1;
        info!(run = self.runs, "jumper run started");
        true
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn last_outcome(&self) -> Option<JumperOutcome> {
        self.last_outcome
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Start standing on a platform centred under the player, with four random ones above
    fn reset_world(&mut self) {
        self.platforms.clear();
        let first_x = PLAYER_START_X + PLAYER_SIZE / 2.0 - PLATFORM_WIDTH / 2.0;
        self.platforms
            .push(Platform::new(first_x, FIRST_PLATFORM_Y, PlatformKind::Normal));
        for i in 1..INITIAL_PLATFORMS {
            let y = FIRST_PLATFORM_Y - i as f32 * PLATFORM_SPACING;
            self.platforms.push(Platform::random(&mut self.rng, y));
        }

        self.player = Player::new(PLAYER_START_X, FIRST_PLATFORM_Y - PLAYER_SIZE);
        self.player.grounded = true;
        self.score = 0;
    }

    /// Jump if standing on a platform
    pub fn jump(&mut self) -> bool {
        if !self.running || !self.player.grounded {
            return false;
        }
        self.player.vy = JUMP_VELOCITY;
        self.player.grounded = false;
        true
    }

    /// Jump starts a run from the start screen as well
    pub fn apply_action(&mut self, action: JumperAction) -> bool {
        match action {
            JumperAction::Jump if !self.running => self.start(),
            JumperAction::Jump => self.jump(),
            JumperAction::Start => self.start(),
        }
    }

    /// Advance the world by `dt` seconds
    ///
    /// Returns the outcome if the run ended during this step.
    pub fn update(&mut self, dt: f32, input: JumperInput) -> Option<JumperOutcome> {
        if !self.running {
            return None;
        }
        let dt = dt.clamp(0.0, MAX_FRAME_DT);

        self.crumble(dt);

        let was_grounded = self.player.grounded;
        self.player.grounded = false;

        self.player.vy += GRAVITY * dt;
        self.player.y += self.player.vy * dt;

        let mut vx = 0.0;
        if input.left {
            vx -= PLAYER_SPEED;
        }
        if input.right {
            vx += PLAYER_SPEED;
        }
        self.player.x = (self.player.x + vx * dt).clamp(0.0, WORLD_WIDTH - PLAYER_SIZE);

        self.resolve_landing(was_grounded);
        self.scroll();

        if self.player.y > WORLD_HEIGHT {
            return Some(self.end_run());
        }
        None
    }

    fn crumble(&mut self, dt: f32) {
        for p in self.platforms.iter_mut() {
            if let Some(t) = p.crumble.as_mut() {
                *t -= dt;
            }
        }
        self.platforms.retain(|p| p.crumble.map_or(true, |t| t > 0.0));
    }

    fn resolve_landing(&mut self, was_grounded: bool) {
        let player = &mut self.player;
        let Some(platform) = self.platforms.iter_mut().find(|p| player.lands_on(p)) else {
            return;
        };

        player.y = platform.y - PLAYER_SIZE;
        player.vy = 0.0;
        player.grounded = true;
        if !was_grounded {
            self.score += LANDING_SCORE;
        }

        match platform.kind {
            PlatformKind::Normal => {}
            PlatformKind::Spring => {
                player.vy = SPRING_VELOCITY;
                player.grounded = false;
            }
            PlatformKind::Broken => {
                if platform.crumble.is_none() {
                    platform.crumble = Some(CRUMBLE_SECS);
                }
            }
        }
    }

    fn scroll(&mut self) {
        if self.player.y >= SCROLL_LINE {
            return;
        }
        let offset = SCROLL_LINE - self.player.y;
        self.player.y = SCROLL_LINE;
        for p in self.platforms.iter_mut() {
            p.y += offset;
        }
        self.platforms.retain(|p| p.y <= WORLD_HEIGHT);

        while !self.platforms.is_full() {
            let top = self
                .platforms
                .iter()
                .map(|p| p.y)
                .reduce(f32::min)
                .unwrap_or(SPAWN_LINE + PLATFORM_SPACING);
            if top <= SPAWN_LINE {
                break;
            }
            let platform = Platform::random(&mut self.rng, top - PLATFORM_SPACING);
            self.platforms.push(platform);
        }
    }

    fn end_run(&mut self) -> JumperOutcome {
        self.running = false;
        let outcome = JumperOutcome { score: self.score };
        self.last_outcome = Some(outcome);
        info!(score = outcome.score, "jumper run over");
        debug!(platforms = self.platforms.len(), "world at game over");
        outcome
    }

    pub fn snapshot_into(&self, out: &mut JumperSnapshot) {
        out.player = self.player;
        out.platforms.clear();
        out.platforms.extend_from_slice(&self.platforms);
        out.score = self.score;
        out.running = self.running;
        out.last_outcome = self.last_outcome;
    }

    pub fn snapshot(&self) -> JumperSnapshot {
        let mut snap = JumperSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

/// Copy of a jumper game for renderers and the JSON state dump
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JumperSnapshot {
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub score: u32,
    pub running: bool,
    pub last_outcome: Option<JumperOutcome>,
}

impl Default for JumperSnapshot {
    fn default() -> Self {
        Self {
            player: Player::new(PLAYER_START_X, FIRST_PLATFORM_Y - PLAYER_SIZE),
            platforms: Vec::with_capacity(MAX_PLATFORMS),
            score: 0,
            running: false,
            last_outcome: None,
        }
    }
}

impl JumperSnapshot {
    /// Nothing moves on the start screen
    pub fn is_static(&self) -> bool {
        !self.running
    }
}
