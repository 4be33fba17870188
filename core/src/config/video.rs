//! Display parameters, consumed by the rendering pipeline.

use super::error::ConfigError;

/// Native frame width the windowed scale factors multiply.
pub const BASE_WIDTH: u32 = 296;

/// Native frame height the windowed scale factors multiply.
pub const BASE_HEIGHT: u32 = 224;

/// CPU-side video filter applied before scaling. Selected here, executed by
/// the rendering pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VideoFilter {
    #[default]
    None,
    Hq2x,
    Hq4x,
    Grayscale,
    Bleed,
    Ntsc,
}

/// Display geometry and timing parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoParams {
    /// Windowed horizontal scale over the base frame width.
    pub xscale: f32,
    /// Windowed vertical scale over the base frame height.
    pub yscale: f32,
    /// Start fullscreen rather than windowed.
    pub fullscreen: bool,
    pub fullscreen_width: u32,
    pub fullscreen_height: u32,
    /// Sync presentation to the display refresh.
    pub vsync: bool,
    /// Bilinear smoothing of the scaled picture. Recommended off when a
    /// filter is active.
    pub smooth: bool,
    /// Keep a 4:3 rendering area on resize and fullscreen.
    pub force_aspect: bool,
    pub filter: VideoFilter,
}

impl VideoParams {
    /// Windowed size in pixels implied by the scale factors.
    pub fn window_size(&self) -> (u32, u32) {
        (
            (BASE_WIDTH as f32 * self.xscale) as u32,
            (BASE_HEIGHT as f32 * self.yscale) as u32,
        )
    }

    /// Range-check every field. Values are not cross-checked against
    /// hardware capability; that is the rendering pipeline's concern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.xscale.is_finite() && self.xscale > 0.0) {
            return Err(invalid("xscale", self.xscale));
        }
        if !(self.yscale.is_finite() && self.yscale > 0.0) {
            return Err(invalid("yscale", self.yscale));
        }
        if self.fullscreen_width == 0 {
            return Err(invalid("fullscreen_width", self.fullscreen_width));
        }
        if self.fullscreen_height == 0 {
            return Err(invalid("fullscreen_height", self.fullscreen_height));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, value: impl ToString) -> ConfigError {
    ConfigError::InvalidParameter {
        name,
        value: value.to_string(),
        constraint: "greater than zero",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;

    #[test]
    fn window_size_scales_base_frame() {
        let params = defaults::video();
        assert_eq!(params.window_size(), (BASE_WIDTH * 3, BASE_HEIGHT * 3));
    }

    #[test]
    fn zero_and_non_finite_scales_are_rejected() {
        let mut params = defaults::video();
        params.xscale = 0.0;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidParameter { name: "xscale", .. })
        ));

        let mut params = defaults::video();
        params.yscale = f32::NAN;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidParameter { name: "yscale", .. })
        ));
    }

    #[test]
    fn zero_fullscreen_geometry_is_rejected() {
        let mut params = defaults::video();
        params.fullscreen_height = 0;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidParameter {
                name: "fullscreen_height",
                ..
            })
        ));
    }
}
