/// Input translation - minifb keys and mouse state to framework events.
///
/// minifb reports state (keys down, cursor position, buttons held); the
/// framework wants edges. `InputTracker` keeps the previous mouse state and
/// turns each snapshot into `InputEvent`s.

use cga_framework::cga::render::{InputEvent, Key, MouseButton};

/// Framework key for a minifb key.
pub fn translate_key(key: minifb::Key) -> Key {
    use minifb::Key as K;
    match key {
        K::Escape => Key::Escape,
        K::Enter | K::NumPadEnter => Key::Enter,
        K::Space => Key::Space,
        K::Left => Key::Left,
        K::Right => Key::Right,
        K::Up => Key::Up,
        K::Down => Key::Down,
        K::Key0 | K::NumPad0 => Key::Char('0'),
        K::Key1 | K::NumPad1 => Key::Char('1'),
        K::Key2 | K::NumPad2 => Key::Char('2'),
        K::Key3 | K::NumPad3 => Key::Char('3'),
        K::Key4 | K::NumPad4 => Key::Char('4'),
        K::Key5 | K::NumPad5 => Key::Char('5'),
        K::Key6 | K::NumPad6 => Key::Char('6'),
        K::Key7 | K::NumPad7 => Key::Char('7'),
        K::Key8 | K::NumPad8 => Key::Char('8'),
        K::Key9 | K::NumPad9 => Key::Char('9'),
        K::A => Key::Char('A'),
        K::B => Key::Char('B'),
        K::C => Key::Char('C'),
        K::D => Key::Char('D'),
        K::E => Key::Char('E'),
        K::F => Key::Char('F'),
        K::G => Key::Char('G'),
        K::H => Key::Char('H'),
        K::I => Key::Char('I'),
        K::J => Key::Char('J'),
        K::K => Key::Char('K'),
        K::L => Key::Char('L'),
        K::M => Key::Char('M'),
        K::N => Key::Char('N'),
        K::O => Key::Char('O'),
        K::P => Key::Char('P'),
        K::Q => Key::Char('Q'),
        K::R => Key::Char('R'),
        K::S => Key::Char('S'),
        K::T => Key::Char('T'),
        K::U => Key::Char('U'),
        K::V => Key::Char('V'),
        K::W => Key::Char('W'),
        K::X => Key::Char('X'),
        K::Y => Key::Char('Y'),
        K::Z => Key::Char('Z'),
        _ => Key::Other,
    }
}

const BUTTONS: [(minifb::MouseButton, MouseButton); 3] = [
    (minifb::MouseButton::Left, MouseButton::Left),
    (minifb::MouseButton::Right, MouseButton::Right),
    (minifb::MouseButton::Middle, MouseButton::Middle),
];

/// Mouse and keyboard state read from the window once per frame.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    pub keys_pressed: Vec<minifb::Key>,
    pub keys_released: Vec<minifb::Key>,
    pub mouse: Option<(f32, f32)>,
    /// Left, right, middle
    pub buttons: [bool; 3],
    pub wheel: Option<f32>,
    pub open: bool,
}

impl InputSnapshot {
    /// Read the current state of `window`.
    pub fn capture(window: &minifb::Window) -> Self {
        let mut buttons = [false; 3];
        for (slot, (button, _)) in buttons.iter_mut().zip(BUTTONS.iter()) {
            *slot = window.get_mouse_down(*button);
        }
        Self {
            keys_pressed: window.get_keys_pressed(minifb::KeyRepeat::No),
            keys_released: window.get_keys_released(),
            mouse: window.get_mouse_pos(minifb::MouseMode::Discard),
            buttons,
            wheel: window.get_scroll_wheel().map(|(_, y)| y),
            open: window.is_open(),
        }
    }
}

/// Edge detector for mouse state.
#[derive(Debug, Default)]
pub struct InputTracker {
    last_mouse: Option<(f32, f32)>,
    last_buttons: [bool; 3],
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for the change from the previous snapshot to `snapshot`.
    pub fn events(&mut self, snapshot: &InputSnapshot) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if !snapshot.open {
            events.push(InputEvent::CloseRequested);
        }
        events.extend(snapshot.keys_pressed.iter().map(|&k| InputEvent::KeyPressed(translate_key(k))));
        events.extend(snapshot.keys_released.iter().map(|&k| InputEvent::KeyReleased(translate_key(k))));

        if let Some((x, y)) = snapshot.mouse {
            if self.last_mouse != Some((x, y)) {
                events.push(InputEvent::MouseMoved { x: x as f64, y: y as f64 });
            }
            self.last_mouse = Some((x, y));
        }

        for (index, (_, button)) in BUTTONS.iter().enumerate() {
            let pressed = snapshot.buttons[index];
            if pressed != self.last_buttons[index] {
                events.push(InputEvent::MouseButton { button: *button, pressed });
            }
        }
        self.last_buttons = snapshot.buttons;

        if let Some(delta) = snapshot.wheel {
            if delta != 0.0 {
                events.push(InputEvent::MouseWheel { delta: delta as f64 });
            }
        }

        events
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
