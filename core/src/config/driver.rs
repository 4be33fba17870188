//! Video and audio backend selection.
//!
//! Both sets are closed enumerations; which members are actually compiled
//! into the binary is decided by cargo features (`video-*`, `audio-*`) on
//! this crate. Selection happens once at startup and is immutable for the
//! rest of the run; instantiating the chosen backends is the job of the
//! rendering and audio pipelines, which receive the [`DriverSelection`] as
//! a constructor parameter.

use super::error::{BackendKind, ConfigError};

/// Video backend identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoDriver {
    /// OpenGL windowed/fullscreen output.
    Gl,
}

impl VideoDriver {
    /// Every video backend this build knows about, compiled or not.
    pub const ALL: [VideoDriver; 1] = [VideoDriver::Gl];

    /// Lowercase identifier used in CLI arguments and operator messages.
    pub const fn name(self) -> &'static str {
        match self {
            VideoDriver::Gl => "gl",
        }
    }

    /// Whether this backend was compiled into the binary.
    pub fn compiled(self) -> bool {
        match self {
            VideoDriver::Gl => cfg!(feature = "video-gl"),
        }
    }

    /// Look up a backend by identifier, compiled or not.
    pub fn from_name(name: &str) -> Option<VideoDriver> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// The backends compiled into this binary.
    pub fn compiled_set() -> Vec<VideoDriver> {
        Self::ALL.into_iter().filter(|d| d.compiled()).collect()
    }
}

/// Audio backend identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioDriver {
    /// RSound network audio.
    Rsound,
    /// Open Sound System.
    Oss,
    /// ALSA.
    Alsa,
    /// RoarAudio.
    Roar,
    /// OpenAL.
    OpenAl,
}

impl AudioDriver {
    /// Every audio backend this build knows about, compiled or not.
    pub const ALL: [AudioDriver; 5] = [
        AudioDriver::Rsound,
        AudioDriver::Oss,
        AudioDriver::Alsa,
        AudioDriver::Roar,
        AudioDriver::OpenAl,
    ];

    /// Lowercase identifier used in CLI arguments and operator messages.
    pub const fn name(self) -> &'static str {
        match self {
            AudioDriver::Rsound => "rsound",
            AudioDriver::Oss => "oss",
            AudioDriver::Alsa => "alsa",
            AudioDriver::Roar => "roar",
            AudioDriver::OpenAl => "openal",
        }
    }

    /// Whether this backend was compiled into the binary.
    pub fn compiled(self) -> bool {
        match self {
            AudioDriver::Rsound => cfg!(feature = "audio-rsound"),
            AudioDriver::Oss => cfg!(feature = "audio-oss"),
            AudioDriver::Alsa => cfg!(feature = "audio-alsa"),
            AudioDriver::Roar => cfg!(feature = "audio-roar"),
            AudioDriver::OpenAl => cfg!(feature = "audio-openal"),
        }
    }

    /// Look up a backend by identifier, compiled or not.
    pub fn from_name(name: &str) -> Option<AudioDriver> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// The backends compiled into this binary.
    pub fn compiled_set() -> Vec<AudioDriver> {
        Self::ALL.into_iter().filter(|d| d.compiled()).collect()
    }
}

/// The video/audio backend pair active for the whole process run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverSelection {
    pub video: VideoDriver,
    pub audio: AudioDriver,
}

impl DriverSelection {
    /// Validate that both backends are compiled in and pin the pair.
    ///
    /// No side effects; selecting the same pair twice yields equal
    /// selections.
    pub fn select(video: VideoDriver, audio: AudioDriver) -> Result<Self, ConfigError> {
        if !video.compiled() {
            return Err(ConfigError::UnsupportedBackend {
                kind: BackendKind::Video,
                name: video.name(),
            });
        }
        if !audio.compiled() {
            return Err(ConfigError::UnsupportedBackend {
                kind: BackendKind::Audio,
                name: audio.name(),
            });
        }
        Ok(Self { video, audio })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for driver in VideoDriver::ALL {
            assert_eq!(VideoDriver::from_name(driver.name()), Some(driver));
        }
        for driver in AudioDriver::ALL {
            assert_eq!(AudioDriver::from_name(driver.name()), Some(driver));
        }
        assert_eq!(AudioDriver::from_name("pulse"), None);
    }

    #[cfg(all(feature = "video-gl", feature = "audio-alsa"))]
    #[test]
    fn default_features_compile_stock_pair() {
        assert!(VideoDriver::compiled_set().contains(&VideoDriver::Gl));
        assert!(AudioDriver::compiled_set().contains(&AudioDriver::Alsa));
    }
}
