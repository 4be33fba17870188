use clap::Parser;
use log::{error, info};
use scanline_core::config::{AudioDriver, Config, VideoDriver, defaults};
use scanline_core::input::Bindings;

mod input;
mod panel;
mod probe;
mod video;

/// Interactive binding probe for the scanline configuration core.
///
/// Opens a window, polls the compiled-in binding tables against live
/// keyboard/joystick state, and shows which abstract buttons each player
/// is holding.
#[derive(Parser)]
#[command(name = "scanline", version)]
struct Args {
    /// Video backend (see --list-drivers).
    #[arg(long, default_value = defaults::VIDEO_DRIVER.name())]
    video: String,

    /// Audio backend (see --list-drivers).
    #[arg(long, default_value = defaults::AUDIO_DRIVER.name())]
    audio: String,

    /// Override both windowed scale factors.
    #[arg(long)]
    scale: Option<f32>,

    /// Start in fullscreen mode.
    #[arg(long)]
    fullscreen: bool,

    /// List the backends compiled into this binary and exit.
    #[arg(long)]
    list_drivers: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.list_drivers {
        list_drivers();
        return;
    }

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    info!(
        "drivers: video={} audio={}",
        config.drivers.video.name(),
        config.drivers.audio.name()
    );
    info!(
        "audio: {} Hz out, {} Hz in, {} ms latency, device {}",
        config.audio.out_rate,
        config.audio.in_rate,
        config.audio.latency_ms,
        config.audio.device.as_deref().unwrap_or("(default)")
    );

    if let Err(e) = probe::run(&config) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn build_config(args: &Args) -> Result<Config, String> {
    let video_driver = VideoDriver::from_name(&args.video).ok_or_else(|| {
        format!(
            "unknown video backend \"{}\" (known: {})",
            args.video,
            names(VideoDriver::ALL.iter().map(|d| d.name()))
        )
    })?;
    let audio_driver = AudioDriver::from_name(&args.audio).ok_or_else(|| {
        format!(
            "unknown audio backend \"{}\" (known: {})",
            args.audio,
            names(AudioDriver::ALL.iter().map(|d| d.name()))
        )
    })?;

    let mut video = defaults::video();
    if let Some(scale) = args.scale {
        video.xscale = scale;
        video.yscale = scale;
    }
    if args.fullscreen {
        video.fullscreen = true;
    }

    let bindings = Bindings::build(defaults::PLAYER_TABLES).map_err(|e| e.to_string())?;
    Config::build(video_driver, audio_driver, video, defaults::audio(), bindings)
        .map_err(|e| e.to_string())
}

fn list_drivers() {
    println!(
        "video: {}",
        names(VideoDriver::compiled_set().iter().map(|d| d.name()))
    );
    println!(
        "audio: {}",
        names(AudioDriver::compiled_set().iter().map(|d| d.name()))
    );
}

fn names<'a>(iter: impl Iterator<Item = &'a str>) -> String {
    iter.collect::<Vec<_>>().join(", ")
}
