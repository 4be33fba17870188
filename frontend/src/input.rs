//! SDL input capture: scancode translation and snapshot maintenance.
//!
//! Owns the live [`KeyboardState`] and per-player [`JoypadState`]s and
//! refreshes them from SDL events. The binding tables are polled against
//! these snapshots after the frame's events have been drained, never while
//! they are still being applied.

use log::{info, warn};
use scanline_core::input::{JoypadState, Key, KeyboardState};
use sdl2::JoystickSubsystem;
use sdl2::event::Event;
use sdl2::joystick::Joystick;
use sdl2::keyboard::Scancode;

/// Translate an SDL scancode into a core key code.
pub fn key_from_scancode(scancode: Scancode) -> Option<Key> {
    match scancode {
        Scancode::A => Some(Key::A),
        Scancode::B => Some(Key::B),
        Scancode::C => Some(Key::C),
        Scancode::D => Some(Key::D),
        Scancode::E => Some(Key::E),
        Scancode::F => Some(Key::F),
        Scancode::G => Some(Key::G),
        Scancode::H => Some(Key::H),
        Scancode::I => Some(Key::I),
        Scancode::J => Some(Key::J),
        Scancode::K => Some(Key::K),
        Scancode::L => Some(Key::L),
        Scancode::M => Some(Key::M),
        Scancode::N => Some(Key::N),
        Scancode::O => Some(Key::O),
        Scancode::P => Some(Key::P),
        Scancode::Q => Some(Key::Q),
        Scancode::R => Some(Key::R),
        Scancode::S => Some(Key::S),
        Scancode::T => Some(Key::T),
        Scancode::U => Some(Key::U),
        Scancode::V => Some(Key::V),
        Scancode::W => Some(Key::W),
        Scancode::X => Some(Key::X),
        Scancode::Y => Some(Key::Y),
        Scancode::Z => Some(Key::Z),
        Scancode::Num0 => Some(Key::Num0),
        Scancode::Num1 => Some(Key::Num1),
        Scancode::Num2 => Some(Key::Num2),
        Scancode::Num3 => Some(Key::Num3),
        Scancode::Num4 => Some(Key::Num4),
        Scancode::Num5 => Some(Key::Num5),
        Scancode::Num6 => Some(Key::Num6),
        Scancode::Num7 => Some(Key::Num7),
        Scancode::Num8 => Some(Key::Num8),
        Scancode::Num9 => Some(Key::Num9),
        Scancode::Up => Some(Key::Up),
        Scancode::Down => Some(Key::Down),
        Scancode::Left => Some(Key::Left),
        Scancode::Right => Some(Key::Right),
        Scancode::Return => Some(Key::Enter),
        Scancode::Space => Some(Key::Space),
        Scancode::Escape => Some(Key::Escape),
        Scancode::Tab => Some(Key::Tab),
        Scancode::Backspace => Some(Key::Backspace),
        Scancode::LShift => Some(Key::LeftShift),
        Scancode::RShift => Some(Key::RightShift),
        Scancode::LCtrl => Some(Key::LeftCtrl),
        Scancode::RCtrl => Some(Key::RightCtrl),
        Scancode::F1 => Some(Key::F1),
        Scancode::F2 => Some(Key::F2),
        Scancode::F3 => Some(Key::F3),
        Scancode::F4 => Some(Key::F4),
        Scancode::F5 => Some(Key::F5),
        Scancode::F6 => Some(Key::F6),
        Scancode::F7 => Some(Key::F7),
        Scancode::F8 => Some(Key::F8),
        Scancode::F9 => Some(Key::F9),
        Scancode::F10 => Some(Key::F10),
        Scancode::F11 => Some(Key::F11),
        Scancode::F12 => Some(Key::F12),
        _ => None,
    }
}

/// Live snapshots for the frame loop: one keyboard, one joypad per player
/// slot.
pub struct InputSnapshots {
    keyboard: KeyboardState,
    pads: Vec<JoypadState>,
    // Joystick handles must stay open or SDL stops reporting their events.
    devices: Vec<Joystick>,
}

impl InputSnapshots {
    /// Open up to `players` joystick devices, assigned to player slots in
    /// device order. Missing devices leave their slot's pad released.
    pub fn open(subsystem: &JoystickSubsystem, players: usize) -> Self {
        let mut devices = Vec::new();
        let available = subsystem.num_joysticks().unwrap_or(0);
        for index in 0..available.min(players as u32) {
            match subsystem.open(index) {
                Ok(device) => {
                    info!(
                        "player {}: joystick \"{}\"",
                        devices.len() + 1,
                        device.name()
                    );
                    devices.push(device);
                }
                Err(e) => warn!("joystick {index}: {e}"),
            }
        }
        if devices.is_empty() {
            info!("no joysticks found; keyboard sources only");
        }

        Self {
            keyboard: KeyboardState::new(),
            pads: vec![JoypadState::new(); players],
            devices,
        }
    }

    /// Apply one SDL event to the snapshots.
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::KeyDown {
                scancode: Some(sc),
                repeat: false,
                ..
            } => {
                if let Some(key) = key_from_scancode(*sc) {
                    self.keyboard.press(key);
                }
            }
            Event::KeyUp {
                scancode: Some(sc), ..
            } => {
                if let Some(key) = key_from_scancode(*sc) {
                    self.keyboard.release(key);
                }
            }
            Event::JoyButtonDown {
                which, button_idx, ..
            } => self.set_pad(*which, *button_idx, true),
            Event::JoyButtonUp {
                which, button_idx, ..
            } => self.set_pad(*which, *button_idx, false),
            _ => {}
        }
    }

    fn set_pad(&mut self, instance: u32, button: u8, down: bool) {
        let slot = self
            .devices
            .iter()
            .position(|device| device.instance_id() == instance);
        if let Some(slot) = slot {
            self.pads[slot].set(button, down);
        }
    }

    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    pub fn pads(&self) -> &[JoypadState] {
        &self.pads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binding_keys_all_translate() {
        // Every scancode the stock tables rely on must map to a core key.
        for sc in [
            Scancode::X,
            Scancode::Z,
            Scancode::Up,
            Scancode::Right,
            Scancode::Return,
            Scancode::RShift,
            Scancode::Space,
            Scancode::F2,
            Scancode::F4,
        ] {
            assert!(key_from_scancode(sc).is_some(), "{sc:?} unmapped");
        }
    }

    #[test]
    fn unmapped_scancodes_are_dropped() {
        assert_eq!(key_from_scancode(Scancode::CapsLock), None);
        assert_eq!(key_from_scancode(Scancode::KpEnter), None);
    }
}
