//! Startup configuration.
//!
//! One [`Config`] is assembled on the main thread before anything else runs
//! and passed by reference to the components that consume it; there is no
//! ambient global configuration state. Construction validates everything,
//! so a `Config` value is valid for the rest of the run.

pub mod audio;
pub mod defaults;
pub mod driver;
pub mod error;
pub mod video;

pub use audio::{AudioParams, ResampleQuality};
pub use driver::{AudioDriver, DriverSelection, VideoDriver};
pub use error::{BackendKind, ConfigError};
pub use video::{BASE_HEIGHT, BASE_WIDTH, VideoFilter, VideoParams};

use crate::input::Bindings;

/// The complete, validated startup configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub drivers: DriverSelection,
    pub video: VideoParams,
    pub audio: AudioParams,
    pub bindings: Bindings,
}

impl Config {
    /// Assemble and validate a configuration from parts.
    ///
    /// Runs driver selection and parameter range checks; the bindings were
    /// already validated when they were built. Any failure is fatal at
    /// startup and reported to the operator.
    pub fn build(
        video_driver: VideoDriver,
        audio_driver: AudioDriver,
        video: VideoParams,
        audio: AudioParams,
        bindings: Bindings,
    ) -> Result<Self, ConfigError> {
        let drivers = DriverSelection::select(video_driver, audio_driver)?;
        video.validate()?;
        audio.validate()?;
        Ok(Self {
            drivers,
            video,
            audio,
            bindings,
        })
    }

    /// The compiled-in default configuration.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::build(
            defaults::VIDEO_DRIVER,
            defaults::AUDIO_DRIVER,
            defaults::video(),
            defaults::audio(),
            Bindings::build(defaults::PLAYER_TABLES)?,
        )
    }
}
