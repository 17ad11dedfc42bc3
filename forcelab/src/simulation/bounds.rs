use glam::Vec2;

/// Inset rectangle of a canvas that draggable points must stay inside.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasBounds {
    min: Vec2,
    max: Vec2,
}

impl CanvasBounds {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    pub fn from_canvas(size: Vec2, margin_x: f32, margin_top: f32, margin_bottom: f32) -> Self {
        Self::new(Vec2::new(margin_x, margin_top), Vec2::new(size.x - margin_x, size.y - margin_bottom))
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }

    pub fn max(&self) -> Vec2 {
        self.max
    }

    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::from_canvas(Vec2::new(600.0, 400.0), 20.0, 50.0, 20.0)
    }
}
