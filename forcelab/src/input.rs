use glam::Vec2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    WindowSizeChange { size: Vec2 },
    PointerPress { button: PointerButton, position: Vec2 },
    PointerMove { position: Vec2 },
    PointerRelease { button: PointerButton, position: Vec2 },
    PointerLeave,
    KeyPress { key: Key, repeat: bool },
    KeyRelease { key: Key },
    Unknown,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum PointerButton {
    Primary,
    Secondary,

    #[default]
    Unknown,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Space,
    KeyR,

    #[default]
    Unknown,
}

impl InputEvent {
    pub fn position(&self) -> Option<Vec2> {
        match self {
            InputEvent::PointerPress { position, .. } => Some(*position),
            InputEvent::PointerMove { position } => Some(*position),
            InputEvent::PointerRelease { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Same event with its pointer position passed through `map`.
    pub fn map_position(self, map: impl Fn(Vec2) -> Vec2) -> Self {
        match self {
            InputEvent::PointerPress { button, position } => InputEvent::PointerPress { button, position: map(position) },
            InputEvent::PointerMove { position } => InputEvent::PointerMove { position: map(position) },
            InputEvent::PointerRelease { button, position } => InputEvent::PointerRelease { button, position: map(position) },
            event => event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_position_only_touches_pointer_events() {
        let press = InputEvent::PointerPress { button: PointerButton::Primary, position: Vec2::new(10.0, 20.0) };
        let mapped = press.map_position(|p| p * 2.0);

        assert_eq!(mapped.position(), Some(Vec2::new(20.0, 40.0)));
        assert_eq!(InputEvent::PointerLeave.map_position(|p| p * 2.0), InputEvent::PointerLeave);
        assert_eq!(InputEvent::KeyPress { key: Key::Escape, repeat: false }.position(), None);
    }
}
