use macroquad::prelude::*;

/// A snapshot of the keyboard for one frame. The game only ever
/// looks at this, so tests can build it by hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputModel {
    pub left_movement_down: bool,
    pub right_movement_down: bool,
    pub launch_requested: bool,
    pub confirmation_detected: bool,
    pub pause_requested: bool,
    pub fullscreen_toggle_requested: bool,
    pub console_toggle_requested: bool,
}

impl InputModel {
    pub fn capture() -> Self {
        let left_movement_down = is_key_down(KeyCode::A) || is_key_down(KeyCode::Left);
        let right_movement_down = is_key_down(KeyCode::D) || is_key_down(KeyCode::Right);
        let launch_requested = is_key_pressed(KeyCode::Space);
        let confirmation_detected = is_key_pressed(KeyCode::Space)
            || is_key_pressed(KeyCode::Enter)
            || is_key_pressed(KeyCode::KpEnter);
        let pause_requested = is_key_pressed(KeyCode::P);
        let fullscreen_toggle_requested = is_key_pressed(KeyCode::F11);
        let console_toggle_requested =
            is_key_pressed(KeyCode::GraveAccent) || is_key_pressed(KeyCode::Apostrophe);

        Self {
            left_movement_down,
            right_movement_down,
            launch_requested,
            confirmation_detected,
            pause_requested,
            fullscreen_toggle_requested,
            console_toggle_requested,
        }
    }
}
