use scanline_core::config::ConfigError;
use scanline_core::input::{
    BindingDef, Button, JoypadState, Key, KeyboardState, PlayerBindings,
};

fn table(defs: &[BindingDef]) -> PlayerBindings {
    PlayerBindings::build(0, defs).expect("table should build")
}

// =================================================================
// Resolution semantics
// =================================================================

#[test]
fn test_or_truth_table() {
    // Player-1 style row: A bound to key X and joypad button 1. Either
    // source alone must trigger; both idle must not.
    let t = table(&[BindingDef::new(Button::A, Key::X, 1)]);

    for (key_down, joy_down) in [(false, false), (false, true), (true, false), (true, true)] {
        let mut kb = KeyboardState::new();
        if key_down {
            kb.press(Key::X);
        }
        let mut pad = JoypadState::new();
        pad.set(1, joy_down);

        assert_eq!(
            t.is_pressed(Button::A, &kb, &pad),
            key_down || joy_down,
            "key_down={key_down} joy_down={joy_down}"
        );
    }
}

#[test]
fn test_unbound_action_is_never_pressed() {
    let t = table(&[BindingDef::new(Button::A, Key::X, 1)]);

    // Hold everything the table knows about and then some.
    let mut kb = KeyboardState::new();
    kb.press(Key::X);
    kb.press(Key::Z);
    let mut pad = JoypadState::new();
    for idx in 0..16 {
        pad.set(idx, true);
    }

    for button in Button::ALL {
        if button != Button::A {
            assert!(!t.is_pressed(button, &kb, &pad), "{} leaked", button.name());
        }
    }
}

#[test]
fn test_key_only_binding_ignores_joypad() {
    let t = table(&[BindingDef::key_only(Button::SaveState, Key::F2)]);

    let mut pad = JoypadState::new();
    for idx in 0..16 {
        pad.set(idx, true);
    }
    let kb = KeyboardState::new();
    assert!(!t.is_pressed(Button::SaveState, &kb, &pad));

    let mut kb = KeyboardState::new();
    kb.press(Key::F2);
    assert!(t.is_pressed(Button::SaveState, &kb, &pad));
}

#[test]
fn test_joypad_only_binding_ignores_keyboard() {
    let t = table(&[BindingDef::joypad_only(Button::L, 4)]);

    let mut kb = KeyboardState::new();
    kb.press(Key::Q);
    let pad = JoypadState::new();
    assert!(!t.is_pressed(Button::L, &kb, &pad));

    let mut pad = JoypadState::new();
    pad.set(4, true);
    assert!(t.is_pressed(Button::L, &kb, &pad));
}

#[test]
fn test_queries_are_read_only() {
    let t = table(&[BindingDef::new(Button::Start, Key::Enter, 6)]);
    let mut kb = KeyboardState::new();
    kb.press(Key::Enter);
    let pad = JoypadState::new();

    // Same live snapshots, same answer, every time.
    for _ in 0..3 {
        assert!(t.is_pressed(Button::Start, &kb, &pad));
    }
    kb.release(Key::Enter);
    assert!(!t.is_pressed(Button::Start, &kb, &pad));
}

// =================================================================
// Table construction
// =================================================================

#[test]
fn test_duplicate_binding_fails_build() {
    let err = PlayerBindings::build(
        0,
        &[
            BindingDef::new(Button::B, Key::Z, 0),
            BindingDef::joypad_only(Button::B, 8),
        ],
    )
    .unwrap_err();

    assert_eq!(
        err,
        ConfigError::DuplicateBinding {
            player: 0,
            button: Button::B
        }
    );
}

#[test]
fn test_duplicate_error_names_the_player_slot() {
    let err = PlayerBindings::build(1, &[
        BindingDef::key_only(Button::Up, Key::I),
        BindingDef::key_only(Button::Up, Key::W),
    ])
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("player 2"), "got: {message}");
    assert!(message.contains("Up"), "got: {message}");
}

#[test]
fn test_row_order_does_not_matter_for_lookup() {
    let forward = table(&[
        BindingDef::new(Button::A, Key::X, 1),
        BindingDef::new(Button::B, Key::Z, 0),
    ]);
    let reversed = table(&[
        BindingDef::new(Button::B, Key::Z, 0),
        BindingDef::new(Button::A, Key::X, 1),
    ]);

    let mut kb = KeyboardState::new();
    kb.press(Key::Z);
    let pad = JoypadState::new();

    assert_eq!(
        forward.is_pressed(Button::B, &kb, &pad),
        reversed.is_pressed(Button::B, &kb, &pad)
    );
}
