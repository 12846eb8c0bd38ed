use mandelview_core::{Command, Direction};
use minifb::{Key, KeyRepeat, MouseMode, Window};

/// Poll the window for navigation input since the last update.
///
/// Zoom commands are only produced while the cursor is inside the window, so
/// the pixel coordinates handed to the core are always in range. Arrow keys
/// repeat while held; reset fires once per press.
pub fn poll(window: &Window) -> Vec<Command> {
    let mut commands = Vec::new();

    if let Some((_, scroll_y)) = window.get_scroll_wheel() {
        if let Some((mx, my)) = window.get_mouse_pos(MouseMode::Discard) {
            if scroll_y > 0.0 {
                commands.push(Command::ZoomIn(mx as u32, my as u32));
            } else if scroll_y < 0.0 {
                commands.push(Command::ZoomOut(mx as u32, my as u32));
            }
        }
    }

    if window.is_key_pressed(Key::Space, KeyRepeat::No) {
        commands.push(Command::Reset);
    }

    for (key, direction) in [
        (Key::Left, Direction::Left),
        (Key::Right, Direction::Right),
        (Key::Up, Direction::Up),
        (Key::Down, Direction::Down),
    ] {
        if window.is_key_pressed(key, KeyRepeat::Yes) {
            commands.push(Command::Pan(direction));
        }
    }

    commands
}
