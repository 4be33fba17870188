pub mod config;
pub mod input;

pub mod prelude {
    pub use crate::config::{
        AudioDriver, AudioParams, Config, ConfigError, DriverSelection, VideoDriver, VideoParams,
    };
    pub use crate::input::{
        BindingDef, Bindings, Button, ButtonStates, InputReport, JoypadState, Key, KeyboardState,
        PlayerBindings,
    };
}
