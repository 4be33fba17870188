//! Binding tables: authored rows compiled into per-player lookup tables.
//!
//! A table is authored as an ordered slice of [`BindingDef`] rows and
//! compiled once at startup into a [`PlayerBindings`] with a direct
//! button-indexed slot array, so per-frame queries are O(1). Tables are
//! immutable after construction and destroyed at process exit.

use crate::config::error::ConfigError;

use super::button::Button;
use super::key::Key;
use super::report::{ButtonStates, InputReport};
use super::snapshot::{JoypadState, KeyboardState};

/// One authored binding row: an abstract button and up to two physical
/// sources. The sources are independent alternatives; a row may carry both,
/// either, or neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BindingDef {
    pub button: Button,
    pub key: Option<Key>,
    pub joypad: Option<u8>,
}

impl BindingDef {
    /// Row bound to both a keyboard key and a joypad button.
    pub const fn new(button: Button, key: Key, joypad: u8) -> Self {
        Self {
            button,
            key: Some(key),
            joypad: Some(joypad),
        }
    }

    /// Row bound to a keyboard key only.
    pub const fn key_only(button: Button, key: Key) -> Self {
        Self {
            button,
            key: Some(key),
            joypad: None,
        }
    }

    /// Row bound to a joypad button only.
    pub const fn joypad_only(button: Button, joypad: u8) -> Self {
        Self {
            button,
            key: None,
            joypad: Some(joypad),
        }
    }
}

/// Physical sources bound to one button.
#[derive(Clone, Copy, Debug)]
struct Sources {
    key: Option<Key>,
    joypad: Option<u8>,
}

/// One player's compiled binding table. Immutable after construction.
#[derive(Clone, Debug)]
pub struct PlayerBindings {
    player: usize,
    slots: [Option<Sources>; Button::COUNT],
}

impl PlayerBindings {
    /// Compile an authored table for the given player slot.
    ///
    /// Authored tables carry an explicit length, so no terminating sentinel
    /// row exists or is accepted; the whole slice is meaningful.
    ///
    /// Fails with [`ConfigError::DuplicateBinding`] if the same button
    /// appears in two rows: precedence between duplicates would be
    /// undefined, so the authoring mistake is rejected outright.
    pub fn build(player: usize, defs: &[BindingDef]) -> Result<Self, ConfigError> {
        let mut slots = [None; Button::COUNT];
        for def in defs {
            let slot = &mut slots[def.button.index()];
            if slot.is_some() {
                return Err(ConfigError::DuplicateBinding {
                    player,
                    button: def.button,
                });
            }
            *slot = Some(Sources {
                key: def.key,
                joypad: def.joypad,
            });
        }
        Ok(Self { player, slots })
    }

    /// Player slot this table belongs to.
    pub fn player(&self) -> usize {
        self.player
    }

    /// Whether the table carries a row for `button`.
    pub fn is_bound(&self, button: Button) -> bool {
        self.slots[button.index()].is_some()
    }

    /// Live pressed state of `button` against the two snapshots.
    ///
    /// The keyboard and joypad sources are OR-combined: either alone
    /// triggers the action. An unbound button (or an absent source) is
    /// never pressed; that is a defined outcome, not an error.
    pub fn is_pressed(
        &self,
        button: Button,
        keyboard: &KeyboardState,
        joypad: &JoypadState,
    ) -> bool {
        let Some(sources) = &self.slots[button.index()] else {
            return false;
        };
        sources.key.is_some_and(|key| keyboard.is_down(key))
            || sources.joypad.is_some_and(|idx| joypad.is_down(idx))
    }
}

/// Compiled binding tables for every player slot, in order.
#[derive(Clone, Debug)]
pub struct Bindings {
    players: Vec<PlayerBindings>,
}

impl Bindings {
    /// Compile one authored table per player slot.
    pub fn build(tables: &[&[BindingDef]]) -> Result<Self, ConfigError> {
        let players = tables
            .iter()
            .enumerate()
            .map(|(player, defs)| PlayerBindings::build(player, defs))
            .collect::<Result<_, _>>()?;
        Ok(Self { players })
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// One player's table, if that slot exists.
    pub fn player(&self, player: usize) -> Option<&PlayerBindings> {
        self.players.get(player)
    }

    pub fn players(&self) -> &[PlayerBindings] {
        &self.players
    }

    /// Evaluate every (player, button) pair against the live snapshots.
    ///
    /// `pads` is indexed by player slot, one device per player; players
    /// without a pad resolve their joypad sources as released while their
    /// keyboard sources stay live. The result is a pure function of the
    /// snapshots and the immutable tables; nothing is cached between calls,
    /// since the snapshots change between frames.
    pub fn poll(&self, keyboard: &KeyboardState, pads: &[JoypadState]) -> InputReport {
        let no_pad = JoypadState::new();
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(slot, table)| {
                let pad = pads.get(slot).unwrap_or(&no_pad);
                let mut states = ButtonStates::default();
                for button in Button::ALL {
                    if table.is_pressed(button, keyboard, pad) {
                        states.set(button);
                    }
                }
                states
            })
            .collect();
        InputReport::new(players)
    }
}
