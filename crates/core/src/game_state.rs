//! Game state module - the per-frame simulation
//!
//! Ties together the grid, the active piece and variant selection. One call to
//! [`GameState::frame`] is one loop iteration: lateral move, rotation, gravity,
//! locking and line clearing, in that order.

use tracing::{debug, info};

use crate::grid::{CommitOutcome, Grid};
use crate::piece::Piece;
use crate::rng::VariantPicker;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Complete game state
///
/// While playing there is always exactly one active piece. After a top-out
/// the last spawned piece is kept internally but is no longer live: frames
/// do nothing and snapshots report no active piece until `Restart`.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Piece,
    picker: VariantPicker,
    score: u32,
    lines: u32,
    fall_timer_ms: u32,
    paused: bool,
    game_over: bool,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game whose variant sequence is fixed by `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_picker(VariantPicker::seeded(seed))
    }

    /// Create a new game drawing variants from `picker`.
    ///
    /// The first piece is always an I piece.
    pub fn with_picker(picker: VariantPicker) -> Self {
        Self {
            grid: Grid::new(),
            active: Piece::spawn(Variant::I),
            picker,
            score: 0,
            lines: 0,
            fall_timer_ms: 0,
            paused: false,
            game_over: false,
            last_event: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn seed(&self) -> Option<u64> {
        self.picker.seed()
    }

    /// Gravity delay for this frame.
    pub fn fall_delay_ms(&self, soft_drop: bool) -> u32 {
        if soft_drop {
            SOFT_DROP_DELAY_MS
        } else {
            FALL_DELAY_MS
        }
    }

    /// Copy the current state into `out`.
    ///
    /// Once the game is over there is no active piece: `out.active` is `None`
    /// until a restart spawns a fresh one.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u8_grid(&mut out.board);
        out.active = if self.game_over {
            None
        } else {
            Some(ActiveSnapshot::from(self.active))
        };
        out.score = self.score;
        out.lines = self.lines;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Run one loop iteration.
    ///
    /// Returns the lock event if the active piece landed this frame.
    pub fn frame(&mut self, elapsed_ms: u32, input: &FrameInput) -> Option<LockEvent> {
        if self.paused || self.game_over {
            return None;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);

        let dx = input.dx();
        if dx != 0 {
            self.active.try_move(dx, &self.grid);
        }
        if input.rotate {
            self.active.try_rotate(&self.grid);
        }

        let mut event = None;
        if self.fall_timer_ms > self.fall_delay_ms(input.soft_drop) {
            if !self.active.try_fall(&self.grid) {
                event = Some(self.lock_active());
            }
            self.fall_timer_ms = 0;
        }

        // Rows are scanned every frame, not only after a lock.
        self.clear_rows();
        event
    }

    /// Commit the active piece, clear the rows it completed and spawn the
    /// next one.
    ///
    /// Top-out is decided against the grid after clearing, so a lock that
    /// frees the spawn area keeps the game going.
    fn lock_active(&mut self) -> LockEvent {
        let variant = self.active.variant();
        let outcome = self.grid.commit(self.active.points(), variant);
        let lines_cleared = self.clear_rows();

        let next = self.picker.next_variant();
        self.active = Piece::spawn(next);

        let top_out = outcome == CommitOutcome::Overflow || !self.active.fits(&self.grid);
        if top_out {
            self.game_over = true;
            info!(score = self.score, lines = self.lines, "game over");
        } else {
            debug!(locked = ?variant, next = ?next, "piece locked");
        }

        let event = LockEvent {
            variant,
            lines_cleared,
            score_delta: lines_cleared * SCORE_PER_LINE,
            top_out,
        };
        self.last_event = Some(event);
        event
    }

    fn clear_rows(&mut self) -> u32 {
        let cleared = self.grid.clear_full_rows().len() as u32;
        if cleared > 0 {
            self.lines += cleared;
            self.score += cleared * SCORE_PER_LINE;
            debug!(rows = cleared, score = self.score, "rows cleared");
        }
        cleared
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a single action outside the frame input path
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                if self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                let picker = self.picker.restarted();
                *self = Self::with_picker(picker);
                info!(seed = ?self.seed(), "game restarted");
                true
            }
            _ if self.paused || self.game_over => false,
            GameAction::MoveLeft => self.active.try_move(-1, &self.grid),
            GameAction::MoveRight => self.active.try_move(1, &self.grid),
            GameAction::Rotate => self.active.try_rotate(&self.grid),
            GameAction::SoftDrop => {
                if self.active.try_fall(&self.grid) {
                    return true;
                }
                self.lock_active();
                self.fall_timer_ms = 0;
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
