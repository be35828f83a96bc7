//! Per-frame input collector for terminal environments.
//!
//! Turns a stream of key press/repeat/release events into one [`FrameInput`]
//! per frame. Rotation is edge-triggered, horizontal moves fire on press and
//! on terminal auto-repeat, and soft drop is a held level.
//!
//! Terminals without keyboard enhancement report every auto-repeat as another
//! press and never report releases. Until a release has been seen, Up and Down
//! count as held until a timeout passes since their last event, and presses
//! inside that window are treated as repeats.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::{FrameInput, GameAction, KEY_RELEASE_TIMEOUT_MS};

/// Held state of one key, inferred from its events.
#[derive(Debug, Clone, Copy, Default)]
struct HeldKey {
    held: bool,
    /// Time since the last press or repeat.
    idle_ms: u32,
}

impl HeldKey {
    /// Record a press or repeat. Returns true if this starts a new hold.
    fn touch(&mut self) -> bool {
        let fresh = !self.held;
        self.held = true;
        self.idle_ms = 0;
        fresh
    }

    fn release(&mut self) {
        *self = Self::default();
    }

    fn age(&mut self, elapsed_ms: u32, timeout_ms: Option<u32>) {
        let Some(timeout_ms) = timeout_ms else {
            return;
        };
        if self.held {
            self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
            if self.idle_ms > timeout_ms {
                self.release();
            }
        }
    }
}

/// Tracks input state between frames.
#[derive(Debug, Clone)]
pub struct InputHandler {
    pending: FrameInput,
    up: HeldKey,
    down: HeldKey,
    key_release_timeout_ms: u32,
    /// Set once the terminal is known to deliver release events.
    release_events: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            pending: FrameInput::default(),
            up: HeldKey::default(),
            down: HeldKey::default(),
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
            release_events: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Declare up front that the terminal reports key releases.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn down_held(&self) -> bool {
        self.down.held
    }

    /// Feed one key event.
    ///
    /// Returns the action for keys that are not part of the frame input
    /// (pause, restart), so the caller can apply them directly.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<GameAction> {
        match key.kind {
            KeyEventKind::Press => self.handle_key_press(key.code),
            KeyEventKind::Repeat => {
                self.handle_key_repeat(key.code);
                None
            }
            KeyEventKind::Release => {
                self.handle_key_release(key.code);
                None
            }
        }
    }

    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        match handle_key_event(KeyEvent::from(code))? {
            GameAction::MoveLeft => self.pending.left = true,
            GameAction::MoveRight => self.pending.right = true,
            GameAction::Rotate => {
                if self.up.touch() {
                    self.pending.rotate = true;
                }
            }
            GameAction::SoftDrop => {
                self.down.touch();
            }
            other => return Some(other),
        }
        None
    }

    /// Auto-repeat moves the piece again but never rotates it.
    pub fn handle_key_repeat(&mut self, code: KeyCode) {
        match handle_key_event(KeyEvent::from(code)) {
            Some(GameAction::MoveLeft) => self.pending.left = true,
            Some(GameAction::MoveRight) => self.pending.right = true,
            Some(GameAction::Rotate) => {
                self.up.touch();
            }
            Some(GameAction::SoftDrop) => {
                self.down.touch();
            }
            _ => {}
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        self.release_events = true;
        match handle_key_event(KeyEvent::from(code)) {
            Some(GameAction::Rotate) => self.up.release(),
            Some(GameAction::SoftDrop) => self.down.release(),
            _ => {}
        }
    }

    /// Close the current frame and return its input.
    pub fn update(&mut self, elapsed_ms: u32) -> FrameInput {
        let timeout = (!self.release_events).then_some(self.key_release_timeout_ms);
        self.up.age(elapsed_ms, timeout);
        self.down.age(elapsed_ms, timeout);

        let mut frame = std::mem::take(&mut self.pending);
        frame.soft_drop = self.down.held;
        frame
    }

    pub fn reset(&mut self) {
        self.pending = FrameInput::default();
        self.up.release();
        self.down.release();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
