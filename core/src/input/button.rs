/// Abstract controller action, independent of the physical input device.
///
/// The twelve controller buttons carry the device ids of the libsnes joypad
/// contract, so `button as u8` is also the button's bit position in the
/// 16-bit controller word the emulation core consumes (see
/// [`ButtonStates::controller_mask`](crate::input::ButtonStates::controller_mask)).
/// Frontend meta-actions follow contiguously; they are resolved like any
/// other button but routed to frontend control logic, never to controller
/// state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
    B = 0,
    Y = 1,
    Select = 2,
    Start = 3,
    Up = 4,
    Down = 5,
    Left = 6,
    Right = 7,
    A = 8,
    X = 9,
    L = 10,
    R = 11,
    FastForward = 12,
    SaveState = 13,
    LoadState = 14,
    ToggleFullscreen = 15,
}

impl Button {
    /// Number of distinct buttons; indices `0..COUNT` are dense.
    pub const COUNT: usize = 16;

    /// Every button, in id order.
    pub const ALL: [Button; Self::COUNT] = [
        Button::B,
        Button::Y,
        Button::Select,
        Button::Start,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::A,
        Button::X,
        Button::L,
        Button::R,
        Button::FastForward,
        Button::SaveState,
        Button::LoadState,
        Button::ToggleFullscreen,
    ];

    /// Dense index for direct-mapped tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// libsnes device id (controller-word bit position), or `None` for
    /// frontend meta-actions.
    pub const fn device_id(self) -> Option<u8> {
        if self.is_meta() { None } else { Some(self as u8) }
    }

    /// Meta-actions are dispatched to frontend control logic (state saving,
    /// fullscreen switching, speed control) instead of the emulation core's
    /// controller state.
    pub const fn is_meta(self) -> bool {
        self as u8 >= Button::FastForward as u8
    }

    /// Human-readable name for operator messages and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Button::B => "B",
            Button::Y => "Y",
            Button::Select => "Select",
            Button::Start => "Start",
            Button::Up => "Up",
            Button::Down => "Down",
            Button::Left => "Left",
            Button::Right => "Right",
            Button::A => "A",
            Button::X => "X",
            Button::L => "L",
            Button::R => "R",
            Button::FastForward => "Fast Forward",
            Button::SaveState => "Save State",
            Button::LoadState => "Load State",
            Button::ToggleFullscreen => "Toggle Fullscreen",
        }
    }
}
