use crate::diagram::shape;
use crate::diagram::Diagram;
use crate::diagram::LabelAlign;
use crate::diagram::Primitive;
use crate::diagram::Stroke;
use crate::input::InputEvent;
use crate::utils::color::Vec4Color;
use egui::Align2;
use egui::Color32;
use egui::FontId;
use egui::Painter;
use egui::Pos2;
use egui::Rect;
use egui::Sense;
use egui::Shape;
use egui::Ui;
use glam::Vec2;

/// Uniform scale from diagram space into a screen rectangle, anchored at its top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasTransform {
    pub origin: Pos2,
    pub scale: f32,
    pub size: Vec2,
}

impl CanvasTransform {
    pub fn fit(rect: Rect, size: Vec2) -> Self {
        let scale = if size.x > 0.0 && size.y > 0.0 { (rect.width() / size.x).min(rect.height() / size.y) } else { 1.0 };
        Self { origin: rect.min, scale: if scale.is_finite() && scale > 0.0 { scale } else { 1.0 }, size }
    }

    pub fn to_screen(&self, point: Vec2) -> Pos2 {
        Pos2::new(self.origin.x + point.x * self.scale, self.origin.y + point.y * self.scale)
    }

    pub fn to_canvas(&self, point: Vec2) -> Vec2 {
        Vec2::new((point.x - self.origin.x) / self.scale, (point.y - self.origin.y) / self.scale)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_max(self.origin, self.to_screen(self.size))
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(Vec2::ZERO).all() && point.cmple(self.size).all()
    }

    /// Re-expresses pointer positions of a screen event in canvas coordinates. A move off the canvas becomes
    /// `PointerLeave` and a press off the canvas becomes `Unknown`.
    pub fn map_event(&self, event: InputEvent) -> InputEvent {
        match event.map_position(|position| self.to_canvas(position)) {
            InputEvent::PointerMove { position } if !self.contains(position) => InputEvent::PointerLeave,
            InputEvent::PointerPress { position, .. } if !self.contains(position) => InputEvent::Unknown,
            event => event,
        }
    }

    fn stroke(&self, stroke: &Stroke) -> egui::Stroke {
        egui::Stroke::new(stroke.width * self.scale, stroke.color.to_color32())
    }
}

/// Every non-text primitive as egui shapes, dashes already split into segments.
pub fn primitive_shapes(primitive: &Primitive, transform: &CanvasTransform) -> Vec<Shape> {
    match primitive {
        Primitive::Segment { from, to, stroke } => polyline_shapes(&[*from, *to], stroke, transform),
        Primitive::Arrow { from, stroke, head, .. } => {
            // Shaft ends at the base of the head
            let base = (head[1] + head[2]) / 2.0;
            let mut shapes = polyline_shapes(&[*from, base], stroke, transform);
            let points = head.iter().map(|point| transform.to_screen(*point)).collect();
            shapes.push(Shape::convex_polygon(points, stroke.color.to_color32(), egui::Stroke::NONE));

            shapes
        }
        Primitive::Polyline { points, stroke } => polyline_shapes(points, stroke, transform),
        Primitive::Polygon { points, fill, stroke } => {
            let points = points.iter().map(|point| transform.to_screen(*point)).collect();
            let outline = stroke.as_ref().map(|stroke| transform.stroke(stroke)).unwrap_or(egui::Stroke::NONE);

            vec![Shape::convex_polygon(points, fill.to_color32(), outline)]
        }
        Primitive::Circle { center, radius, stroke } => match stroke.dash {
            Some(_) => {
                let points = shape::arc_points(*center, *radius, 0.0, 360.0, Some(48));
                polyline_shapes(&points, stroke, transform)
            }
            None => vec![Shape::circle_stroke(transform.to_screen(*center), radius * transform.scale, transform.stroke(stroke))],
        },
        Primitive::Disc { center, radius, fill } => vec![Shape::circle_filled(transform.to_screen(*center), radius * transform.scale, fill.to_color32())],
        Primitive::Label { .. } => Vec::new(),
    }
}

fn polyline_shapes(points: &[Vec2], stroke: &Stroke, transform: &CanvasTransform) -> Vec<Shape> {
    let egui_stroke = transform.stroke(stroke);

    match stroke.dash {
        Some(dash) => shape::dash_polyline(points, dash)
            .into_iter()
            .map(|(from, to)| Shape::line_segment([transform.to_screen(from), transform.to_screen(to)], egui_stroke))
            .collect(),
        None if points.len() == 2 => vec![Shape::line_segment([transform.to_screen(points[0]), transform.to_screen(points[1])], egui_stroke)],
        None => vec![Shape::line(points.iter().map(|point| transform.to_screen(*point)).collect(), egui_stroke)],
    }
}

pub fn paint_diagram(painter: &Painter, diagram: &Diagram, transform: &CanvasTransform) {
    for primitive in &diagram.primitives {
        match primitive {
            Primitive::Label { position, text, color, size, align } => {
                let anchor = match align {
                    LabelAlign::Left => Align2::LEFT_BOTTOM,
                    LabelAlign::Center => Align2::CENTER_BOTTOM,
                };

                painter.text(transform.to_screen(*position), anchor, text, FontId::proportional(size * transform.scale), color.to_color32());
            }
            _ => painter.extend(primitive_shapes(primitive, transform)),
        }
    }
}

/// Allocates space keeping the diagram's aspect ratio, at most its natural size, and paints it.
pub fn show_diagram(ui: &mut Ui, diagram: &Diagram, background: Color32) -> CanvasTransform {
    let width = ui.available_width().min(diagram.size.x).max(1.0);
    let height = if diagram.size.x > 0.0 { width * diagram.size.y / diagram.size.x } else { diagram.size.y };

    let (response, painter) = ui.allocate_painter(egui::Vec2::new(width, height), Sense::hover());
    let transform = CanvasTransform::fit(response.rect, diagram.size);

    painter.rect_filled(transform.rect(), 8.0, background);
    paint_diagram(&painter, diagram, &transform);

    transform
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerButton;
    use approx::assert_relative_eq;
    use glam::Vec4;

    fn transform() -> CanvasTransform {
        CanvasTransform::fit(Rect::from_min_size(Pos2::new(100.0, 50.0), egui::Vec2::new(300.0, 300.0)), Vec2::new(600.0, 400.0))
    }

    #[test]
    fn fit_keeps_aspect_ratio() {
        let transform = transform();

        assert_relative_eq!(transform.scale, 0.5);
        assert_eq!(transform.rect().max, Pos2::new(400.0, 250.0));
    }

    #[test]
    fn screen_and_canvas_coordinates_invert() {
        let transform = transform();
        let screen = transform.to_screen(Vec2::new(300.0, 220.0));

        assert_eq!(screen, Pos2::new(250.0, 160.0));
        assert_eq!(transform.to_canvas(Vec2::new(screen.x, screen.y)), Vec2::new(300.0, 220.0));
    }

    #[test]
    fn pointer_events_are_mapped_into_canvas() {
        let event = InputEvent::PointerMove { position: Vec2::new(200.0, 210.0) };

        assert_eq!(transform().map_event(event).position(), Some(Vec2::new(200.0, 320.0)));
    }

    #[test]
    fn pointer_off_the_canvas_leaves_it() {
        let transform = transform();
        let press = InputEvent::PointerPress { button: PointerButton::Primary, position: Vec2::new(200.0, 300.0) };
        let release = InputEvent::PointerRelease { button: PointerButton::Primary, position: Vec2::new(90.0, 60.0) };

        assert_eq!(transform.map_event(InputEvent::PointerMove { position: Vec2::new(200.0, 300.0) }), InputEvent::PointerLeave);
        assert_eq!(transform.map_event(press), InputEvent::Unknown);
        assert_eq!(transform.map_event(release).position(), Some(Vec2::new(-20.0, 20.0)));
        assert!(transform.contains(Vec2::new(600.0, 0.0)));
    }

    #[test]
    fn dashed_segment_becomes_several_shapes() {
        let primitive = Primitive::Segment { from: Vec2::ZERO, to: Vec2::new(100.0, 0.0), stroke: Stroke::new(1.0, Vec4::ONE).dashed(5.0, 5.0) };

        assert_eq!(primitive_shapes(&primitive, &transform()).len(), 10);
    }

    #[test]
    fn arrow_has_shaft_and_head() {
        let mut diagram = Diagram::new(Vec2::new(600.0, 400.0));
        diagram.arrow(Vec2::ZERO, Vec2::new(100.0, 0.0), Stroke::new(3.0, Vec4::ONE));

        assert_eq!(primitive_shapes(&diagram.primitives[0], &transform()).len(), 2);
    }

    #[test]
    fn labels_produce_no_plain_shapes() {
        let primitive = Primitive::Label { position: Vec2::ZERO, text: "O".to_string(), color: Vec4::ONE, size: 12.0, align: LabelAlign::Left };
        assert!(primitive_shapes(&primitive, &transform()).is_empty());
    }
}
