use self::shape::Dash;
use glam::Vec2;
use glam::Vec4;

pub mod shape;

pub const ARROW_HEAD_SIZE: f32 = 10.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Vec4,
    pub dash: Option<Dash>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum LabelAlign {
    #[default]
    Left,
    Center,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Segment { from: Vec2, to: Vec2, stroke: Stroke },
    Arrow { from: Vec2, to: Vec2, stroke: Stroke, head: [Vec2; 3] },
    Polyline { points: Vec<Vec2>, stroke: Stroke },
    Polygon { points: Vec<Vec2>, fill: Vec4, stroke: Option<Stroke> },
    Circle { center: Vec2, radius: f32, stroke: Stroke },
    Disc { center: Vec2, radius: f32, fill: Vec4 },
    Label { position: Vec2, text: String, color: Vec4, size: f32, align: LabelAlign },
}

/// Renderer-independent drawing in canvas coordinates (y pointing down).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagram {
    pub size: Vec2,
    pub primitives: Vec<Primitive>,
}

impl Stroke {
    pub fn new(width: f32, color: Vec4) -> Self {
        Self { width, color, dash: None }
    }

    pub fn dashed(mut self, length: f32, gap: f32) -> Self {
        self.dash = Some(Dash::new(length, gap));
        self
    }
}

impl Diagram {
    pub fn new(size: Vec2) -> Self {
        Self { size, primitives: Vec::new() }
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.primitives.push(Primitive::Segment { from, to, stroke });
    }

    /// Returns `false` and draws nothing for a zero-length vector.
    pub fn arrow(&mut self, from: Vec2, to: Vec2, stroke: Stroke) -> bool {
        let head_size = ARROW_HEAD_SIZE.max(stroke.width * 2.5);

        match shape::arrow_head(from, to, head_size) {
            Some(head) => {
                self.primitives.push(Primitive::Arrow { from, to, stroke, head });
                true
            }
            None => false,
        }
    }

    pub fn arc(&mut self, center: Vec2, radius: f32, start: f32, sweep: f32, stroke: Stroke) {
        if radius <= 0.0 || sweep == 0.0 {
            return;
        }

        let points = shape::arc_points(center, radius, start, sweep, None);
        self.primitives.push(Primitive::Polyline { points, stroke });
    }

    pub fn polygon(&mut self, points: Vec<Vec2>, fill: Vec4, stroke: Option<Stroke>) {
        self.primitives.push(Primitive::Polygon { points, fill, stroke });
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, stroke: Stroke) {
        self.primitives.push(Primitive::Circle { center, radius, stroke });
    }

    pub fn disc(&mut self, center: Vec2, radius: f32, fill: Vec4) {
        self.primitives.push(Primitive::Disc { center, radius, fill });
    }

    pub fn label(&mut self, position: Vec2, text: impl Into<String>, color: Vec4, size: f32) {
        self.primitives.push(Primitive::Label { position, text: text.into(), color, size, align: LabelAlign::Left });
    }

    pub fn label_centered(&mut self, position: Vec2, text: impl Into<String>, color: Vec4, size: f32) {
        self.primitives.push(Primitive::Label { position, text: text.into(), color, size, align: LabelAlign::Center });
    }

    pub fn grid(&mut self, spacing: f32, stroke: Stroke) {
        if spacing <= 0.0 {
            return;
        }

        let mut x = spacing;
        while x < self.size.x {
            self.line(Vec2::new(x, 0.0), Vec2::new(x, self.size.y), stroke);
            x += spacing;
        }

        let mut y = spacing;
        while y < self.size.y {
            self.line(Vec2::new(0.0, y), Vec2::new(self.size.x, y), stroke);
            y += spacing;
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_label(&self, text: &str) -> bool {
        self.labels().any(|label| label == text)
    }

    pub fn arrows(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Arrow { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn dashed_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|primitive| match primitive {
                Primitive::Segment { stroke, .. } | Primitive::Arrow { stroke, .. } | Primitive::Polyline { stroke, .. } => stroke.dash.is_some(),
                _ => false,
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_arrow_is_skipped() {
        let mut diagram = Diagram::new(Vec2::new(100.0, 100.0));

        assert!(!diagram.arrow(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0), Stroke::new(3.0, Vec4::ONE)));
        assert!(diagram.arrow(Vec2::new(10.0, 10.0), Vec2::new(50.0, 10.0), Stroke::new(3.0, Vec4::ONE)));
        assert_eq!(diagram.arrows().count(), 1);
    }

    #[test]
    fn grid_covers_interior_lines_only() {
        let mut diagram = Diagram::new(Vec2::new(60.0, 40.0));
        diagram.grid(20.0, Stroke::new(0.5, Vec4::ONE));

        // x = 20, 40 and y = 20
        assert_eq!(diagram.primitives.len(), 3);
    }

    #[test]
    fn labels_are_queryable() {
        let mut diagram = Diagram::new(Vec2::new(60.0, 40.0));
        diagram.label(Vec2::ZERO, "F1", Vec4::ONE, 14.0);
        diagram.line(Vec2::ZERO, Vec2::ONE, Stroke::new(1.0, Vec4::ONE).dashed(5.0, 5.0));

        assert!(diagram.has_label("F1"));
        assert_eq!(diagram.dashed_count(), 1);
    }
}
