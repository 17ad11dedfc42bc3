use crate::input::InputEvent;
use crate::input::Key;
use crate::input::PointerButton;
use egui::Event;
use egui::Modifiers;
use egui::Pos2;
use egui::RawInput;
use egui::Rect;
use glam::Vec2;

/// Owns the egui context and turns host input events into egui's raw input, one batch per frame.
pub struct UiContext {
    pub inner: egui::Context,
    pub screen_size: Vec2,
    pub collected_events: Vec<Event>,

    time: f64,
}

impl UiContext {
    pub fn new(screen_size: Vec2) -> Self {
        Self { inner: Default::default(), screen_size, collected_events: Default::default(), time: 0.0 }
    }

    pub fn collect_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::WindowSizeChange { size } => {
                self.screen_size = *size;
            }
            InputEvent::PointerMove { position } => {
                self.collected_events.push(Event::PointerMoved(Pos2::new(position.x, position.y)));
            }
            InputEvent::PointerLeave => {
                self.collected_events.push(Event::PointerGone);
            }
            InputEvent::PointerPress { button, position } => {
                if let Some(egui_button) = map_pointer_button(*button) {
                    let pos = Pos2::new(position.x, position.y);
                    self.collected_events.push(Event::PointerButton { pos, button: egui_button, pressed: true, modifiers: Modifiers::NONE });
                }
            }
            InputEvent::PointerRelease { button, position } => {
                if let Some(egui_button) = map_pointer_button(*button) {
                    let pos = Pos2::new(position.x, position.y);
                    self.collected_events.push(Event::PointerButton { pos, button: egui_button, pressed: false, modifiers: Modifiers::NONE });
                }
            }
            InputEvent::KeyPress { key, repeat } => {
                if let Some(egui_key) = map_key(*key) {
                    self.collected_events.push(Event::Key { key: egui_key, pressed: true, repeat: *repeat, modifiers: Modifiers::NONE });
                }
            }
            InputEvent::KeyRelease { key } => {
                if let Some(egui_key) = map_key(*key) {
                    self.collected_events.push(Event::Key { key: egui_key, pressed: false, repeat: false, modifiers: Modifiers::NONE });
                }
            }
            InputEvent::Unknown => {}
        }
    }

    /// Seconds since the lesson started, as reported by the host.
    pub fn set_time(&mut self, seconds: f64) {
        self.time = seconds;
    }

    pub fn get_input(&mut self) -> RawInput {
        let input = RawInput {
            screen_rect: Some(Rect::from_two_pos(Pos2::new(0.0, 0.0), Pos2::new(self.screen_size.x, self.screen_size.y))),
            events: self.collected_events.clone(),
            time: Some(self.time),
            ..Default::default()
        };
        self.collected_events.clear();

        input
    }
}

fn map_key(key: Key) -> Option<egui::Key> {
    match key {
        Key::ArrowLeft => Some(egui::Key::ArrowLeft),
        Key::ArrowRight => Some(egui::Key::ArrowRight),
        Key::Escape => Some(egui::Key::Escape),
        Key::Enter => Some(egui::Key::Enter),
        Key::Space => Some(egui::Key::Space),
        Key::KeyR => Some(egui::Key::R),
        Key::Unknown => None,
    }
}

fn map_pointer_button(button: PointerButton) -> Option<egui::PointerButton> {
    match button {
        PointerButton::Primary => Some(egui::PointerButton::Primary),
        PointerButton::Secondary => Some(egui::PointerButton::Secondary),
        PointerButton::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_drained_once() {
        let mut context = UiContext::new(Vec2::new(1280.0, 720.0));
        context.collect_event(&InputEvent::PointerMove { position: Vec2::new(10.0, 20.0) });
        context.collect_event(&InputEvent::PointerPress { button: PointerButton::Unknown, position: Vec2::ZERO });
        context.collect_event(&InputEvent::KeyPress { key: Key::ArrowRight, repeat: false });

        let input = context.get_input();
        assert_eq!(input.events.len(), 2);
        assert_eq!(input.screen_rect.map(|rect| rect.width()), Some(1280.0));
        assert!(context.get_input().events.is_empty());
    }

    #[test]
    fn resize_updates_screen_rect() {
        let mut context = UiContext::new(Vec2::new(1280.0, 720.0));
        context.collect_event(&InputEvent::WindowSizeChange { size: Vec2::new(800.0, 600.0) });

        assert_eq!(context.get_input().screen_rect.map(|rect| rect.height()), Some(600.0));
    }
}
