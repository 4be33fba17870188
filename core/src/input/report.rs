//! Per-frame poll results.

use super::button::Button;

/// Mask covering the twelve controller buttons (device ids 0-11).
const CONTROLLER_BITS: u16 = 0x0FFF;

/// Pressed state of every button for one player, as a bit set indexed by
/// button id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonStates {
    bits: u16,
}

impl ButtonStates {
    pub(crate) fn set(&mut self, button: Button) {
        self.bits |= 1 << button.index();
    }

    /// Whether `button` was held when the report was taken.
    pub fn pressed(self, button: Button) -> bool {
        self.bits & (1 << button.index()) != 0
    }

    /// The 16-bit controller word the emulation core consumes: bit *n* is
    /// the controller button with device id *n*. Meta-action bits are
    /// masked out; they never reach controller state.
    pub fn controller_mask(self) -> u16 {
        self.bits & CONTROLLER_BITS
    }

    /// Buttons held in this report, in id order.
    pub fn held(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.pressed(*b))
    }
}

/// Result of one frame-level poll: one [`ButtonStates`] per player slot.
///
/// A report is a pure function of the snapshots it was taken from; nothing
/// is carried over between frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputReport {
    players: Vec<ButtonStates>,
}

impl InputReport {
    pub(crate) fn new(players: Vec<ButtonStates>) -> Self {
        Self { players }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// States for one player slot; out-of-range slots read as all-released.
    pub fn player(&self, player: usize) -> ButtonStates {
        self.players.get(player).copied().unwrap_or_default()
    }

    /// Pressed state for one (player, button) pair.
    pub fn pressed(&self, player: usize, button: Button) -> bool {
        self.player(player).pressed(button)
    }
}
