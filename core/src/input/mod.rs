//! Input bindings and resolution: abstract buttons, per-player binding
//! tables, live snapshots, and the per-frame poll.

pub mod bindings;
pub mod button;
pub mod key;
pub mod report;
pub mod snapshot;

pub use bindings::{BindingDef, Bindings, PlayerBindings};
pub use button::Button;
pub use key::Key;
pub use report::{ButtonStates, InputReport};
pub use snapshot::{JoypadState, KeyboardState};
