//! Probe window and framebuffer presenter.
//!
//! Windowing plumbing only: geometry, vsync, and fullscreen come from the
//! configured [`VideoParams`]; filters, smoothing, and aspect handling
//! belong to the real rendering pipeline and are not executed here.

use scanline_core::config::{BASE_HEIGHT, BASE_WIDTH, VideoParams};
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{FullscreenType, Window, WindowContext};

pub struct Video {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    width: u32,
    height: u32,
}

impl Video {
    /// Create the probe window sized from the configured scale factors (or
    /// the fullscreen geometry, when fullscreen is requested at start).
    pub fn new(subsystem: &sdl2::VideoSubsystem, params: &VideoParams) -> Result<Self, String> {
        let (win_w, win_h) = params.window_size();
        let mut window = subsystem
            .window("Scanline Input Probe", win_w, win_h)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        if params.fullscreen {
            enter_fullscreen(&mut window, params)?;
        }

        let mut builder = window.into_canvas().accelerated();
        if params.vsync {
            builder = builder.present_vsync();
        }
        let canvas = builder.build().map_err(|e| e.to_string())?;
        let texture_creator = canvas.texture_creator();

        Ok(Self {
            canvas,
            texture_creator,
            width: BASE_WIDTH,
            height: BASE_HEIGHT,
        })
    }

    /// Switch between fullscreen and windowed mode.
    pub fn toggle_fullscreen(&mut self, params: &VideoParams) -> Result<(), String> {
        let window = self.canvas.window_mut();
        if window.fullscreen_state() == FullscreenType::Off {
            enter_fullscreen(window, params)
        } else {
            window.set_fullscreen(FullscreenType::Off)?;
            let (win_w, win_h) = params.window_size();
            window.set_size(win_w, win_h).map_err(|e| e.to_string())
        }
    }

    /// Upload an RGB24 framebuffer to a streaming texture and present it.
    pub fn present(&mut self, framebuffer: &[u8]) -> Result<(), String> {
        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::RGB24, self.width, self.height)
            .map_err(|e| e.to_string())?;

        texture
            .update(None, framebuffer, (self.width * 3) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

fn enter_fullscreen(window: &mut Window, params: &VideoParams) -> Result<(), String> {
    window
        .set_size(params.fullscreen_width, params.fullscreen_height)
        .map_err(|e| e.to_string())?;
    window.set_fullscreen(FullscreenType::True)
}
