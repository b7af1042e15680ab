//! Blocks game module - the board engine
//!
//! Ties the board, the piece catalog and the RNG together: gravity, player
//! commands, locking, line sweeps, scoring and the overflow (game over) path.
//!
//! Every command either commits a legal state or leaves the state untouched
//! and returns `false`. Nothing here fails or panics on bad input.

use tracing::{debug, info};

use crate::board::Board;
use crate::pieces::{horizontal_kicks, Piece};
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{BlocksAction, PieceKind, RotateDir, DROP_INTERVAL_MS, LINE_BONUS, LOCK_BONUS};

/// Where the engine is in the per-piece cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// An active piece is falling and accepts commands
    Falling,
    /// A freshly spawned piece collided; waiting for the exit transition
    GameOver,
}

/// What happens when a spawned piece has no room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Leave game over immediately: clear the board, zero the score, spawn again
    #[default]
    Reset,
    /// Stay in game over until [`BlocksGame::restart`]
    Halt,
}

impl OverflowPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "reset" => Some(OverflowPolicy::Reset),
            "halt" => Some(OverflowPolicy::Halt),
            _ => None,
        }
    }
}

/// Emitted every time a piece locks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub rows_cleared: u32,
    /// Lock bonus plus line bonus awarded by this lock
    pub score_delta: u32,
    /// The replacement piece had no room
    pub overflow: bool,
}

/// Final numbers of a game that ended in overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct GameOverEvent {
    pub final_score: u32,
    pub final_lines: u32,
}

#[derive(Debug, Clone)]
pub struct BlocksGame {
    board: Board,
    active: Option<Piece>,
    next: Piece,
    rng: SimpleRng,
    score: u32,
    lines: u32,
    drop_timer_ms: u32,
    phase: Phase,
    policy: OverflowPolicy,
    started: bool,
    paused: bool,
    games_over: u32,
    last_event: Option<LockEvent>,
    last_game_over: Option<GameOverEvent>,
}

impl BlocksGame {
    /// New, not yet started game with the default overflow policy
    pub fn new(seed: u32) -> Self {
        Self::with_policy(seed, OverflowPolicy::default())
    }

    pub fn with_policy(seed: u32, policy: OverflowPolicy) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = Piece::spawn(rng.next_piece());
        Self {
            board: Board::new(),
            active: None,
            next,
            rng,
            score: 0,
            lines: 0,
            drop_timer_ms: 0,
            phase: Phase::Falling,
            policy,
            started: false,
            paused: false,
            games_over: 0,
            last_event: None,
            last_game_over: None,
        }
    }

    /// Start the game and bring in the first piece
    ///
    /// A second call while a game is running does nothing.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.promote_next();
        info!(seed = self.rng.seed(), "blocks game started");
        true
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn games_over(&self) -> u32 {
        self.games_over
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_piece(&self) -> Piece {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn last_game_over(&self) -> Option<GameOverEvent> {
        self.last_game_over
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Draw a fresh piece at the spawn position; does not assign it anywhere
    pub fn spawn_piece(&mut self) -> Piece {
        Piece::spawn(self.rng.next_piece())
    }

    pub fn collides(&self, piece: &Piece) -> bool {
        self.board.collides(piece)
    }

    fn accepts_input(&self) -> bool {
        self.started && !self.paused && self.phase == Phase::Falling
    }

    /// Shift the active piece one column (`dir` is -1 or +1); a blocked move is a no-op
    pub fn move_horizontal(&mut self, dir: i8) -> bool {
        if !self.accepts_input() || dir == 0 {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dir.signum(), 0);
        if self.board.collides(&moved) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Move the active piece one row down, or lock it where it is
    ///
    /// Returns true if the piece moved. Either way the drop timer restarts.
    pub fn soft_drop(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let dropped = active.shifted(0, 1);
        if self.board.collides(&dropped) {
            self.lock_piece();
            return false;
        }
        self.active = Some(dropped);
        self.drop_timer_ms = 0;
        true
    }

    /// Drop the active piece until it locks; returns the rows travelled
    pub fn hard_drop(&mut self) -> u32 {
        if !self.accepts_input() {
            return 0;
        }
        let mut rows = 0;
        while self.soft_drop() {
            rows += 1;
        }
        rows
    }

    /// Rotate the active piece a quarter turn
    ///
    /// A blocked rotation tries column offsets +1, -1, +2, -2, ... up to the
    /// piece's width and keeps the first one that fits. If none fits the
    /// piece keeps its old matrix and column.
    pub fn rotate(&mut self, dir: RotateDir) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotated(dir);
        if !self.board.collides(&rotated) {
            self.active = Some(rotated);
            return true;
        }

        for offset in horizontal_kicks(rotated.width()) {
            let kicked = rotated.shifted(offset, 0);
            if !self.board.collides(&kicked) {
                self.active = Some(kicked);
                return true;
            }
        }
        false
    }

    /// Remove full rows and score them; returns the number of rows removed
    pub fn sweep_lines(&mut self) -> u32 {
        let rows = self.board.sweep_lines().len() as u32;
        if rows > 0 {
            self.score += rows * LINE_BONUS;
            self.lines += rows;
        }
        rows
    }

    /// Commit the active piece into the board and bring in the next one
    ///
    /// Only reached through `soft_drop`, which has already checked that the
    /// game takes input.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge(&active);
        self.drop_timer_ms = 0;
        self.score += LOCK_BONUS;

        let rows_cleared = self.sweep_lines();
        if rows_cleared > 0 {
            debug!(rows_cleared, score = self.score, "rows swept");
        }

        let score_delta = LOCK_BONUS + rows_cleared * LINE_BONUS;
        let overflow = !self.promote_next();
        self.last_event = Some(LockEvent {
            kind: active.kind,
            rows_cleared,
            score_delta,
            overflow,
        });
    }

    /// Make the on-deck piece active and draw a new on-deck piece
    ///
    /// Returns false (and enters game over) when the piece has no room.
    fn promote_next(&mut self) -> bool {
        let piece = self.next;
        self.next = self.spawn_piece();

        if self.board.collides(&piece) {
            self.enter_game_over();
            return false;
        }
        self.active = Some(piece);
        true
    }

    fn enter_game_over(&mut self) {
        self.phase = Phase::GameOver;
        self.active = None;
        self.games_over += 1;
        let event = GameOverEvent {
            final_score: self.score,
            final_lines: self.lines,
        };
        self.last_game_over = Some(event);
        info!(
            final_score = event.final_score,
            final_lines = event.final_lines,
            policy = ?self.policy,
            "board overflow"
        );

        if self.policy == OverflowPolicy::Reset {
            self.leave_game_over();
        }
    }

    /// Exit transition of game over: empty board, zero score, new piece
    fn leave_game_over(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.drop_timer_ms = 0;
        self.phase = Phase::Falling;

        // The board is empty, so this piece always fits.
        let piece = self.next;
        self.next = self.spawn_piece();
        self.active = Some(piece);
    }

    /// Throw the current game away and begin a new one
    ///
    /// This is the explicit way out of a halted game over, and works at any time.
    pub fn restart(&mut self) {
        self.started = true;
        self.paused = false;
        self.last_event = None;
        self.leave_game_over();
        debug!("blocks game restarted");
    }

    pub fn toggle_pause(&mut self) -> bool {
        if !self.started || self.phase != Phase::Falling {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Advance gravity by `elapsed_ms`; returns true if a forced drop happened
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms > DROP_INTERVAL_MS {
            self.soft_drop();
            return true;
        }
        false
    }

    /// Row the active piece would lock on if dropped now
    pub fn ghost_y(&self) -> Option<i8> {
        let mut ghost = self.active?;
        while !self.board.collides(&ghost.shifted(0, 1)) {
            ghost = ghost.shifted(0, 1);
        }
        Some(ghost.y)
    }

    pub fn apply_action(&mut self, action: BlocksAction) -> bool {
        match action {
            BlocksAction::Start => self.start(),
            BlocksAction::MoveLeft => self.move_horizontal(-1),
            BlocksAction::MoveRight => self.move_horizontal(1),
            BlocksAction::SoftDrop => {
                // A lock also counts as having handled the command.
                let had_piece = self.accepts_input() && self.active.is_some();
                self.soft_drop() || had_piece
            }
            BlocksAction::HardDrop => {
                let had_piece = self.accepts_input() && self.active.is_some();
                self.hard_drop();
                had_piece
            }
            BlocksAction::RotateCw => self.rotate(RotateDir::Cw),
            BlocksAction::RotateCcw => self.rotate(RotateDir::Ccw),
            BlocksAction::Pause => self.toggle_pause(),
            BlocksAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_id_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next.kind;
        out.score = self.score;
        out.lines = self.lines;
        out.phase = self.phase;
        out.started = self.started;
        out.paused = self.paused;
        out.games_over = self.games_over;
        out.seed = self.rng.seed();
        out.drop_timer_ms = self.drop_timer_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for BlocksGame {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{shape_for, Shape};
    use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

    fn started(seed: u32) -> BlocksGame {
        let mut game = BlocksGame::new(seed);
        game.start();
        game
    }

    /// Fill row 1 under every spawn footprint so the next spawn collides.
    fn block_spawn_area(game: &mut BlocksGame) {
        for x in 4..=8 {
            game.board_mut().set(x, 1, Some(PieceKind::O));
        }
    }

    #[test]
    fn new_game_is_idle() {
        let game = BlocksGame::new(12345);
        assert!(!game.started());
        assert!(game.active().is_none());
        assert_eq!(game.score(), 0);
        assert_eq!(game.phase(), Phase::Falling);
        assert!(game.board().is_empty());
    }

    #[test]
    fn start_is_idempotent() {
        let mut game = BlocksGame::new(12345);
        assert!(game.start());
        let active = game.active();
        let next = game.next_piece();
        assert!(!game.start());
        assert_eq!(game.active(), active);
        assert_eq!(game.next_piece(), next);
    }

    #[test]
    fn start_promotes_the_on_deck_piece() {
        let mut game = BlocksGame::new(99);
        let on_deck = game.next_piece();
        game.start();
        assert_eq!(game.active(), Some(on_deck));
    }

    #[test]
    fn commands_before_start_are_ignored() {
        let mut game = BlocksGame::new(1);
        assert!(!game.move_horizontal(1));
        assert!(!game.soft_drop());
        assert!(!game.rotate(RotateDir::Cw));
        assert!(!game.tick(5000));
        assert_eq!(game.hard_drop(), 0);
    }

    #[test]
    fn move_rolls_back_at_the_wall() {
        let mut game = started(12345);
        for _ in 0..BOARD_WIDTH {
            game.move_horizontal(-1);
        }
        let piece = game.active().unwrap();
        assert!(!game.collides(&piece));
        assert!(!game.move_horizontal(-1));
        assert_eq!(game.active(), Some(piece));
    }

    #[test]
    fn soft_drop_resets_drop_timer() {
        let mut game = started(3);
        game.tick(500);
        assert_eq!(game.drop_timer_ms(), 500);
        assert!(game.soft_drop());
        assert_eq!(game.drop_timer_ms(), 0);
    }

    #[test]
    fn gravity_waits_for_the_interval_to_be_exceeded() {
        let mut game = started(3);
        let y0 = game.active().unwrap().y;

        assert!(!game.tick(DROP_INTERVAL_MS));
        assert_eq!(game.active().unwrap().y, y0);

        assert!(game.tick(1));
        assert_eq!(game.active().unwrap().y, y0 + 1);
        assert_eq!(game.drop_timer_ms(), 0);
    }

    #[test]
    fn lock_awards_lock_bonus() {
        let mut game = started(8);
        game.hard_drop();
        assert_eq!(game.score(), LOCK_BONUS);
        let ev = game.take_last_event().unwrap();
        assert_eq!(ev.rows_cleared, 0);
        assert_eq!(ev.score_delta, LOCK_BONUS);
        assert!(!ev.overflow);
        assert!(game.take_last_event().is_none());
    }

    #[test]
    fn lock_replaces_active_with_on_deck() {
        let mut game = started(8);
        let on_deck = game.next_piece();
        game.lock_piece();
        assert_eq!(game.active(), Some(on_deck));
    }

    #[test]
    fn single_row_clear_scores_line_bonus() {
        let mut game = started(5);
        let bottom = BOARD_HEIGHT as i8 - 1;
        game.board_mut().fill_row_except(bottom, PieceKind::J, &[0]);

        // A one-cell piece sitting in the hole at column 0.
        let plug = Piece {
            kind: PieceKind::T,
            shape: Shape::new(1, [[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]),
            x: 0,
            y: bottom,
        };
        assert!(!game.collides(&plug));
        game.active = Some(plug);

        assert!(!game.soft_drop());

        assert_eq!(game.score(), LOCK_BONUS + LINE_BONUS);
        assert_eq!(game.lines(), 1);
        assert!(game.board().is_empty());
        assert_eq!(game.board().height(), BOARD_HEIGHT);
    }

    #[test]
    fn overflow_with_reset_policy_clears_everything() {
        let mut game = started(11);
        game.score = 990;
        block_spawn_area(&mut game);

        game.lock_piece();

        assert_eq!(game.phase(), Phase::Falling);
        assert!(game.board().is_empty());
        assert_eq!(game.score(), 0);
        assert_eq!(game.games_over(), 1);
        assert_eq!(
            game.last_game_over(),
            Some(GameOverEvent {
                final_score: 990 + LOCK_BONUS,
                final_lines: 0
            })
        );
        let active = game.active().unwrap();
        assert!(!game.collides(&active));
        assert!(game.take_last_event().unwrap().overflow);
    }

    #[test]
    fn overflow_with_halt_policy_waits_for_restart() {
        let mut game = BlocksGame::with_policy(11, OverflowPolicy::Halt);
        game.start();
        block_spawn_area(&mut game);

        game.lock_piece();

        assert_eq!(game.phase(), Phase::GameOver);
        assert!(game.active().is_none());
        assert!(!game.board().is_empty());
        assert!(!game.tick(5000));
        assert!(!game.move_horizontal(1));
        assert!(!game.toggle_pause());

        game.restart();

        assert_eq!(game.phase(), Phase::Falling);
        assert!(game.board().is_empty());
        assert_eq!(game.score(), 0);
        assert!(game.active().is_some());
    }

    #[test]
    fn rotation_kicks_off_the_wall() {
        let mut game = started(1);
        // Vertical I hugging the left wall: column 1 of its matrix sits on x = 0.
        game.active = Some(Piece {
            kind: PieceKind::I,
            shape: shape_for(PieceKind::I),
            x: -1,
            y: 5,
        });
        assert!(!game.collides(&game.active().unwrap()));

        assert!(game.rotate(RotateDir::Cw));
        let rotated = game.active().unwrap();
        assert!(!game.collides(&rotated));
        assert_ne!(rotated.x, -1);
    }

    #[test]
    fn blocked_rotation_is_a_no_op() {
        let mut game = started(1);
        let piece = Piece {
            kind: PieceKind::I,
            shape: shape_for(PieceKind::I),
            x: 0,
            y: 10,
        };
        game.active = Some(piece);
        // Wall every column except the I's own column (x = 1) on its rows.
        for y in 10..14 {
            game.board_mut().fill_row_except(y, PieceKind::O, &[1]);
        }

        assert!(!game.rotate(RotateDir::Cw));
        assert_eq!(game.active(), Some(piece));
    }

    #[test]
    fn blocked_rotation_prefers_right_kick() {
        let mut game = started(1);
        let piece = Piece {
            kind: PieceKind::T,
            shape: shape_for(PieceKind::T),
            x: 5,
            y: 5,
        };
        game.active = Some(piece);
        // Only the turned T's top cell is blocked; both +1 and -1 fit.
        game.board_mut().set(6, 5, Some(PieceKind::O));
        let turned = piece.rotated(RotateDir::Cw);
        assert!(game.collides(&turned));
        assert!(!game.collides(&turned.shifted(1, 0)));
        assert!(!game.collides(&turned.shifted(-1, 0)));

        assert!(game.rotate(RotateDir::Cw));
        let active = game.active().unwrap();
        assert_eq!(active.x, 6);
        assert_eq!(active.shape, turned.shape);
    }

    #[test]
    fn kicks_stop_at_piece_width() {
        let mut game = started(1);
        let piece = Piece {
            kind: PieceKind::T,
            shape: shape_for(PieceKind::T),
            x: 4,
            y: 10,
        };
        game.active = Some(piece);
        // Holes for the T itself and for the turned T four columns right.
        game.board_mut().fill_row_except(10, PieceKind::O, &[9]);
        game.board_mut().fill_row_except(11, PieceKind::O, &[4, 5, 6, 8, 9]);
        game.board_mut().fill_row_except(12, PieceKind::O, &[5, 9]);
        assert!(!game.collides(&piece));

        let turned = piece.rotated(RotateDir::Cw);
        assert_eq!(turned.width(), 3);
        for offset in -3..=3 {
            assert!(game.collides(&turned.shifted(offset, 0)), "offset {}", offset);
        }
        assert!(!game.collides(&turned.shifted(4, 0)));

        assert!(!game.rotate(RotateDir::Cw));
        assert_eq!(game.active(), Some(piece));
    }

    #[test]
    fn paused_piece_at_rest_does_not_lock() {
        let mut game = started(6);
        let ghost = game.ghost_y().unwrap();
        while game.active().unwrap().y < ghost {
            assert!(game.soft_drop());
        }
        let resting = game.active();
        assert!(game.toggle_pause());

        assert!(!game.soft_drop());
        assert_eq!(game.hard_drop(), 0);
        assert!(!game.tick(5000));
        assert!(!game.rotate(RotateDir::Cw));

        assert_eq!(game.score(), 0);
        assert!(game.board().is_empty());
        assert_eq!(game.active(), resting);
        assert!(game.take_last_event().is_none());
    }

    #[test]
    fn pause_freezes_gravity_and_commands() {
        let mut game = started(2);
        assert!(game.toggle_pause());
        assert!(!game.tick(5000));
        assert!(!game.move_horizontal(1));
        assert!(game.toggle_pause());
        assert!(game.move_horizontal(1) || game.move_horizontal(-1));
    }

    #[test]
    fn ghost_is_below_active() {
        let game = started(4);
        let active = game.active().unwrap();
        let ghost = game.ghost_y().unwrap();
        assert!(ghost >= active.y);
        assert!(game.collides(&Piece { y: ghost + 1, ..active }));
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut game = started(4);
        game.hard_drop();
        let snap = game.snapshot();
        assert_eq!(snap.score, game.score());
        assert_eq!(snap.next, game.next_piece().kind);
        assert_eq!(snap.phase, Phase::Falling);
        assert!(snap.started);
        let filled = snap.board.iter().flatten().filter(|&&v| v != 0).count();
        assert_eq!(filled, game.board().filled_count());
    }
}
