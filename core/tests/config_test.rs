use scanline_core::config::{
    AudioDriver, BackendKind, Config, ConfigError, DriverSelection, VideoDriver, defaults,
};
use scanline_core::input::{Bindings, Button};

// =================================================================
// Driver selection
// =================================================================

#[test]
fn test_stock_pair_selects_and_is_idempotent() {
    let first = DriverSelection::select(VideoDriver::Gl, AudioDriver::Alsa).unwrap();
    let second = DriverSelection::select(VideoDriver::Gl, AudioDriver::Alsa).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.video, VideoDriver::Gl);
    assert_eq!(first.audio, AudioDriver::Alsa);
}

// The stock build compiles only GL + ALSA, so OSS exercises the
// not-compiled-in path. Skipped when the feature is enabled.
#[cfg(not(feature = "audio-oss"))]
#[test]
fn test_uncompiled_backend_is_rejected() {
    let err = DriverSelection::select(VideoDriver::Gl, AudioDriver::Oss).unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnsupportedBackend {
            kind: BackendKind::Audio,
            name: "oss",
        }
    );
    assert!(err.to_string().contains("oss"));
}

#[cfg(not(feature = "audio-oss"))]
#[test]
fn test_uncompiled_backend_fails_config_build() {
    let result = Config::build(
        VideoDriver::Gl,
        AudioDriver::Oss,
        defaults::video(),
        defaults::audio(),
        Bindings::build(defaults::PLAYER_TABLES).unwrap(),
    );
    assert!(matches!(
        result,
        Err(ConfigError::UnsupportedBackend { .. })
    ));
}

// =================================================================
// Parameter validation through Config::build
// =================================================================

#[test]
fn test_zero_in_rate_fails_startup() {
    let mut audio = defaults::audio();
    audio.in_rate = 0;
    let result = Config::build(
        defaults::VIDEO_DRIVER,
        defaults::AUDIO_DRIVER,
        defaults::video(),
        audio,
        Bindings::build(defaults::PLAYER_TABLES).unwrap(),
    );
    assert!(matches!(
        result,
        Err(ConfigError::InvalidParameter { name: "in_rate", .. })
    ));
}

#[test]
fn test_zero_scale_fails_startup() {
    let mut video = defaults::video();
    video.xscale = 0.0;
    let result = Config::build(
        defaults::VIDEO_DRIVER,
        defaults::AUDIO_DRIVER,
        video,
        defaults::audio(),
        Bindings::build(defaults::PLAYER_TABLES).unwrap(),
    );
    assert!(matches!(
        result,
        Err(ConfigError::InvalidParameter { name: "xscale", .. })
    ));
}

// =================================================================
// Compiled-in defaults
// =================================================================

#[test]
fn test_defaults_build() {
    let config = Config::defaults().expect("compiled-in defaults must be valid");
    assert_eq!(config.bindings.player_count(), 2);
    assert_eq!(config.drivers.video, defaults::VIDEO_DRIVER);
    assert_eq!(config.drivers.audio, defaults::AUDIO_DRIVER);
    assert_eq!(config.audio.out_rate, 44_100);
    assert_eq!(config.video.window_size(), (296 * 3, 224 * 3));
}

#[test]
fn test_default_tables_bind_every_controller_button() {
    let config = Config::defaults().unwrap();
    for player in 0..2 {
        let table = config.bindings.player(player).unwrap();
        for button in Button::ALL.into_iter().filter(|b| !b.is_meta()) {
            assert!(
                table.is_bound(button),
                "player {} missing {}",
                player + 1,
                button.name()
            );
        }
    }
}

#[test]
fn test_meta_actions_are_player_one_only() {
    let config = Config::defaults().unwrap();
    let meta = Button::ALL.into_iter().filter(|b| b.is_meta());
    for button in meta {
        assert!(config.bindings.player(0).unwrap().is_bound(button));
        assert!(!config.bindings.player(1).unwrap().is_bound(button));
    }
}
