//! Held left/right state for the jumper.
//!
//! Many terminals only report presses (plus auto-repeat). Without release
//! events a key counts as held until `release_timeout_ms` passes with no
//! further press; with release events enabled the timeout is ignored.

use crossterm::event::KeyCode;

use crate::types::JumperInput;

// Long enough to bridge the initial auto-repeat delay of most terminals.
const DEFAULT_RELEASE_TIMEOUT_MS: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

fn side_of(code: KeyCode) -> Option<Side> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(Side::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(Side::Right)
        }
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct HeldKeys {
    left_ms: Option<u32>,
    right_ms: Option<u32>,
    release_events: bool,
    release_timeout_ms: u32,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            left_ms: None,
            right_ms: None,
            release_events: false,
            release_timeout_ms: DEFAULT_RELEASE_TIMEOUT_MS,
        }
    }

    /// The terminal reports key releases, so never auto-release
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    /// Record a press (or auto-repeat); returns true if the key is a direction
    pub fn press(&mut self, code: KeyCode) -> bool {
        match side_of(code) {
            // Pressing one side lets go of the other: last writer wins.
            Some(Side::Left) => {
                self.left_ms = Some(0);
                self.right_ms = None;
                true
            }
            Some(Side::Right) => {
                self.right_ms = Some(0);
                self.left_ms = None;
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, code: KeyCode) {
        match side_of(code) {
            Some(Side::Left) => self.left_ms = None,
            Some(Side::Right) => self.right_ms = None,
            None => {}
        }
    }

    /// Age held keys by `elapsed_ms`, dropping those past the timeout
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.release_events {
            return;
        }
        let timeout = self.release_timeout_ms;
        for slot in [&mut self.left_ms, &mut self.right_ms] {
            let expired = match slot.as_mut() {
                Some(age) => {
                    *age = age.saturating_add(elapsed_ms);
                    *age > timeout
                }
                None => false,
            };
            if expired {
                *slot = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.left_ms = None;
        self.right_ms = None;
    }

    pub fn input(&self) -> JumperInput {
        JumperInput {
            left: self.left_ms.is_some(),
            right: self.right_ms.is_some(),
        }
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut held = HeldKeys::new();
        assert!(held.press(KeyCode::Left));
        assert!(held.input().left);
        held.release(KeyCode::Left);
        assert_eq!(held.input(), JumperInput::default());
    }

    #[test]
    fn opposite_press_replaces_direction() {
        let mut held = HeldKeys::new();
        held.press(KeyCode::Left);
        held.press(KeyCode::Char('d'));
        assert_eq!(held.input(), JumperInput { left: false, right: true });
    }

    #[test]
    fn times_out_without_release_events() {
        let mut held = HeldKeys::new().with_release_timeout_ms(100);
        held.press(KeyCode::Right);
        held.update(60);
        assert!(held.input().right);
        // Auto-repeat refreshes the hold.
        held.press(KeyCode::Right);
        held.update(60);
        assert!(held.input().right);
        held.update(60);
        assert!(!held.input().right);
    }

    #[test]
    fn release_events_disable_timeout() {
        let mut held = HeldKeys::new().with_release_events(true);
        held.press(KeyCode::Left);
        held.update(10_000);
        assert!(held.input().left);
    }

    #[test]
    fn non_direction_keys_are_ignored() {
        let mut held = HeldKeys::new();
        assert!(!held.press(KeyCode::Char(' ')));
        assert_eq!(held.input(), JumperInput::default());
    }
}
