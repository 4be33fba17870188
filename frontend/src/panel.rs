//! Button-state panel rendered into the probe framebuffer.
//!
//! One row of cells per player, one cell per button in device-id order,
//! meta-actions last. A cell lights while its button resolves pressed;
//! unbound buttons render as empty sockets.

use scanline_core::config::{BASE_HEIGHT, BASE_WIDTH};
use scanline_core::input::{Bindings, Button, InputReport};

const CELL_W: u32 = 15;
const CELL_H: u32 = 22;
const CELL_GAP: u32 = 3;
const ROW_GAP: u32 = 10;
const MARGIN_X: u32 = 4;
const MARGIN_Y: u32 = 10;

const BACKGROUND: [u8; 3] = [14, 14, 18];
const SOCKET: [u8; 3] = [30, 30, 38];
const IDLE: [u8; 3] = [58, 58, 72];
const HELD: [u8; 3] = [92, 200, 120];
const HELD_META: [u8; 3] = [220, 170, 70];

/// Draw the poll result into an RGB24 framebuffer of the base frame size.
pub fn render(bindings: &Bindings, report: &InputReport, framebuffer: &mut [u8]) {
    fill(framebuffer, 0, 0, BASE_WIDTH, BASE_HEIGHT, BACKGROUND);

    for (player, table) in bindings.players().iter().enumerate() {
        let y = MARGIN_Y + player as u32 * (CELL_H + ROW_GAP);
        if y + CELL_H > BASE_HEIGHT {
            break;
        }

        for button in Button::ALL {
            let x = MARGIN_X + button.index() as u32 * (CELL_W + CELL_GAP);
            let color = if !table.is_bound(button) {
                SOCKET
            } else if report.pressed(player, button) {
                if button.is_meta() { HELD_META } else { HELD }
            } else {
                IDLE
            };
            fill(framebuffer, x, y, CELL_W, CELL_H, color);
        }
    }
}

fn fill(framebuffer: &mut [u8], x: u32, y: u32, w: u32, h: u32, color: [u8; 3]) {
    for row in y..(y + h).min(BASE_HEIGHT) {
        for col in x..(x + w).min(BASE_WIDTH) {
            let offset = ((row * BASE_WIDTH + col) * 3) as usize;
            framebuffer[offset..offset + 3].copy_from_slice(&color);
        }
    }
}
