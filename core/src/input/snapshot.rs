//! Live input snapshots.
//!
//! Snapshots are owned and refreshed by the windowing/input layer once per
//! frame, before the binding tables are polled; the resolver only reads
//! them. Refresh and resolve are strictly ordered within a frame, so no
//! synchronization is involved.

use std::collections::HashSet;

use super::key::Key;

/// Momentary keyboard state: the set of keys currently held.
#[derive(Clone, Debug, Default)]
pub struct KeyboardState {
    held: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch `key` as held.
    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    /// Latch `key` as released.
    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Release every key (e.g. on focus loss, so nothing sticks).
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Momentary joypad state: a bitmask over physical button indices.
///
/// Indices at or beyond [`JoypadState::MAX_BUTTONS`] read as released and
/// are ignored on write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JoypadState {
    bits: u64,
}

impl JoypadState {
    /// Highest representable button index plus one.
    pub const MAX_BUTTONS: u8 = 64;

    pub fn new() -> Self {
        Self::default()
    }

    /// Latch the held state of one physical button.
    pub fn set(&mut self, button: u8, down: bool) {
        if button >= Self::MAX_BUTTONS {
            return;
        }
        if down {
            self.bits |= 1 << button;
        } else {
            self.bits &= !(1 << button);
        }
    }

    pub fn is_down(&self, button: u8) -> bool {
        button < Self::MAX_BUTTONS && self.bits & (1 << button) != 0
    }

    /// Release every button (e.g. when the device disconnects).
    pub fn clear(&mut self) {
        self.bits = 0;
    }
}
