//! The interactive binding probe.
//!
//! Stands in for the emulation loop: once per frame it drains SDL events
//! into the snapshots, polls the binding tables, logs button transitions,
//! dispatches meta-actions, and presents the state panel. Useful for
//! verifying a binding table against a real keyboard and pad without
//! booting anything.

use log::info;
use scanline_core::config::{BASE_HEIGHT, BASE_WIDTH, Config};
use scanline_core::input::{Button, InputReport};
use sdl2::event::Event;
use sdl2::keyboard::Scancode;

use crate::input::InputSnapshots;
use crate::panel;
use crate::video::Video;

/// Run the probe until the window closes or Escape is pressed.
pub fn run(config: &Config) -> Result<(), String> {
    let sdl = sdl2::init()?;
    let video_subsystem = sdl.video()?;
    let joystick_subsystem = sdl.joystick()?;
    let mut event_pump = sdl.event_pump()?;

    let mut video = Video::new(&video_subsystem, &config.video)?;
    let mut snapshots =
        InputSnapshots::open(&joystick_subsystem, config.bindings.player_count());

    let mut framebuffer = vec![0u8; (BASE_WIDTH * BASE_HEIGHT * 3) as usize];
    let mut previous = InputReport::default();

    'main: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => break 'main,

                other => snapshots.apply(&other),
            }
        }

        // Snapshots are frozen for the rest of the frame: refresh first,
        // resolve after, never interleaved.
        let report = config.bindings.poll(snapshots.keyboard(), snapshots.pads());
        handle_transitions(config, &previous, &report, &mut video)?;

        panel::render(&config.bindings, &report, &mut framebuffer);
        video.present(&framebuffer)?;
        previous = report;

        if !config.video.vsync {
            // Fixed pace when presentation isn't throttling the loop.
            std::thread::sleep(std::time::Duration::from_millis(16));
        }
    }

    Ok(())
}

/// Log every button edge and dispatch meta-action presses.
fn handle_transitions(
    config: &Config,
    previous: &InputReport,
    report: &InputReport,
    video: &mut Video,
) -> Result<(), String> {
    for player in 0..config.bindings.player_count() {
        for button in Button::ALL {
            let now = report.pressed(player, button);
            if now == previous.pressed(player, button) {
                continue;
            }
            info!(
                "P{} {} {}",
                player + 1,
                button.name(),
                if now { "pressed" } else { "released" }
            );

            // Meta-actions are frontend control, read from player 1's
            // table, and fire on the press edge.
            if now && button.is_meta() && player == 0 {
                dispatch_meta(button, config, video)?;
            }
        }
    }
    Ok(())
}

fn dispatch_meta(button: Button, config: &Config, video: &mut Video) -> Result<(), String> {
    match button {
        Button::ToggleFullscreen => video.toggle_fullscreen(&config.video),

        // Receivers for these live with the emulation core; the probe only
        // proves that the binding resolves and routes.
        Button::SaveState | Button::LoadState | Button::FastForward => {
            info!("dispatched {} to frontend control", button.name());
            Ok(())
        }

        _ => Ok(()),
    }
}
