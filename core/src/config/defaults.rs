//! Compiled-in defaults.
//!
//! Configuration is static for the process lifetime; these are the values a
//! build ships with. Overrides come from the command line at startup, not
//! from a configuration file.

use crate::input::{BindingDef, Button, Key};

use super::audio::{AudioParams, ResampleQuality};
use super::driver::{AudioDriver, VideoDriver};
use super::video::{VideoFilter, VideoParams};

/// Default backend pair. Both must stay within the default cargo features,
/// or [`Config::defaults`](super::Config::defaults) fails at startup.
pub const VIDEO_DRIVER: VideoDriver = VideoDriver::Gl;
pub const AUDIO_DRIVER: AudioDriver = AudioDriver::Alsa;

/// Default display parameters: 3x windowed scale, vsync and smoothing on,
/// 4:3 aspect lock, 1920x1200 fullscreen available but off at start.
pub fn video() -> VideoParams {
    VideoParams {
        xscale: 3.0,
        yscale: 3.0,
        fullscreen: false,
        fullscreen_width: 1920,
        fullscreen_height: 1200,
        vsync: true,
        smooth: true,
        force_aspect: true,
        filter: VideoFilter::None,
    }
}

/// Default audio parameters. The input rate sits slightly under the core's
/// nominal output rate; lower it further if dropouts occur while vsync is
/// enabled.
pub fn audio() -> AudioParams {
    AudioParams {
        enable: true,
        out_rate: 44_100,
        in_rate: 31_950,
        device: Some("hw:0".to_owned()),
        latency_ms: 16,
        sync: true,
        resample_quality: ResampleQuality::Linear,
    }
}

/// Player 1 bindings. Check jstest or similar to figure out which joypad
/// button indices your pad reports.
//  abstract button                              | keyboard key   | joypad button
pub const PLAYER_1: &[BindingDef] = &[
    BindingDef::new(Button::A, Key::X, 1),
    BindingDef::new(Button::B, Key::Z, 0),
    BindingDef::new(Button::X, Key::S, 3),
    BindingDef::new(Button::Y, Key::A, 2),
    BindingDef::new(Button::L, Key::Q, 4),
    BindingDef::new(Button::R, Key::W, 5),
    BindingDef::new(Button::Left, Key::Left, 11),
    BindingDef::new(Button::Right, Key::Right, 12),
    BindingDef::new(Button::Up, Key::Up, 13),
    BindingDef::new(Button::Down, Key::Down, 14),
    BindingDef::new(Button::Start, Key::Enter, 6),
    BindingDef::new(Button::Select, Key::RightShift, 7),
    BindingDef::new(Button::FastForward, Key::Space, 9),
    BindingDef::key_only(Button::SaveState, Key::F2),
    BindingDef::key_only(Button::LoadState, Key::F4),
    BindingDef::key_only(Button::ToggleFullscreen, Key::F),
];

/// Player 2 bindings. Keys are disjoint from player 1; joypad indices
/// repeat because each player polls their own device. Meta-actions are
/// player 1's alone.
pub const PLAYER_2: &[BindingDef] = &[
    BindingDef::new(Button::A, Key::B, 1),
    BindingDef::new(Button::B, Key::V, 0),
    BindingDef::new(Button::X, Key::G, 3),
    BindingDef::new(Button::Y, Key::F, 2),
    BindingDef::new(Button::L, Key::R, 4),
    BindingDef::new(Button::R, Key::T, 5),
    BindingDef::new(Button::Left, Key::J, 11),
    BindingDef::new(Button::Right, Key::L, 12),
    BindingDef::new(Button::Up, Key::I, 13),
    BindingDef::new(Button::Down, Key::K, 14),
    BindingDef::new(Button::Start, Key::P, 6),
    BindingDef::new(Button::Select, Key::O, 7),
];

/// Authored tables in player-slot order.
pub const PLAYER_TABLES: &[&[BindingDef]] = &[PLAYER_1, PLAYER_2];
