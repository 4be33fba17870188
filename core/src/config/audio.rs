//! Audio parameters, consumed by the audio pipeline.

use super::error::ConfigError;

/// Quality level of the output resampler, cheapest first. The audio
/// pipeline maps these onto its converter implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ResampleQuality {
    ZeroOrderHold,
    Linear,
    SincFastest,
    SincMedium,
    SincBest,
}

/// Audio output parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioParams {
    /// Audio output enabled at all.
    pub enable: bool,
    /// Output sample rate in Hz.
    pub out_rate: u32,
    /// Sample rate the emulation core produces, in Hz. Lowering it slightly
    /// trades pitch accuracy for fewer dropouts while vsync is enabled.
    pub in_rate: u32,
    /// Output device identifier (e.g. "hw:0" or "/dev/audio"); `None` uses
    /// the backend's default device.
    pub device: Option<String>,
    /// Desired output latency in milliseconds. Best effort; the backend may
    /// not honor it.
    pub latency_ms: u32,
    /// Let audio pacing drive emulation speed.
    pub sync: bool,
    pub resample_quality: ResampleQuality,
}

impl AudioParams {
    /// Range-check every field. Values are not cross-checked against
    /// hardware capability; that is the audio pipeline's concern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.out_rate == 0 {
            return Err(positive("out_rate", self.out_rate));
        }
        if self.in_rate == 0 {
            return Err(positive("in_rate", self.in_rate));
        }
        if self.latency_ms == 0 {
            return Err(positive("latency_ms", self.latency_ms));
        }
        if let Some(device) = &self.device
            && device.is_empty()
        {
            return Err(ConfigError::InvalidParameter {
                name: "device",
                value: "\"\"".to_owned(),
                constraint: "a non-empty device identifier, or unset for the default device",
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: u32) -> ConfigError {
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
    fn zero_rates_are_rejected() {
        let mut params = defaults::audio();
        params.in_rate = 0;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidParameter { name: "in_rate", .. })
        ));

        let mut params = defaults::audio();
        params.out_rate = 0;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidParameter { name: "out_rate", .. })
        ));
    }

    #[test]
    fn zero_latency_is_rejected() {
        let mut params = defaults::audio();
        params.latency_ms = 0;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidParameter {
                name: "latency_ms",
                ..
            })
        ));
    }

    #[test]
    fn empty_device_is_rejected_but_none_is_fine() {
        let mut params = defaults::audio();
        params.device = Some(String::new());
        assert!(params.validate().is_err());

        params.device = None;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn quality_levels_order_by_cost() {
        assert!(ResampleQuality::ZeroOrderHold < ResampleQuality::Linear);
        assert!(ResampleQuality::Linear < ResampleQuality::SincBest);
    }
}
