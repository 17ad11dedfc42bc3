use crate::diagram::Diagram;
use crate::diagram::Stroke;
use crate::math::vector;
use crate::math::vector::ForceSpec;
use crate::utils::color::Palette;
use glam::Vec2;
use log::warn;

pub const TRIANGLE_SIZE: Vec2 = Vec2::new(260.0, 220.0);
pub const TRIANGLE_START: Vec2 = Vec2::new(40.0, 140.0);
pub const TRIANGLE_MAX_ANGLE: f32 = 160.0;
pub const TRIANGLE_F1: f32 = 80.0;
pub const TRIANGLE_F2: f32 = 70.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleGeometry {
    pub start: Vec2,
    pub f1_head: Vec2,
    pub f2_head: Vec2,
}

/// Tail-to-head construction: F2 starts where F1 ends and the resultant closes the triangle.
#[derive(Clone, Debug)]
pub struct TriangleRule {
    angle: f32,
}

impl TriangleRule {
    pub fn new(angle: f32) -> Self {
        let mut rule = Self { angle: 60.0 };
        rule.set_angle(angle);

        rule
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f32) {
        if !angle.is_finite() {
            warn!("Ignoring non-finite triangle angle");
            return;
        }

        self.angle = angle.clamp(0.0, TRIANGLE_MAX_ANGLE);
    }

    pub fn f1(&self) -> ForceSpec {
        ForceSpec::new(TRIANGLE_F1, 0.0)
    }

    pub fn f2(&self) -> ForceSpec {
        ForceSpec::new(TRIANGLE_F2, self.angle)
    }

    pub fn resultant(&self) -> ForceSpec {
        vector::resultant(self.f1(), self.f2())
    }

    pub fn geometry(&self) -> TriangleGeometry {
        let f1_head = TRIANGLE_START + self.f1().to_screen();
        let f2_head = f1_head + self.f2().to_screen();

        TriangleGeometry { start: TRIANGLE_START, f1_head, f2_head }
    }

    pub fn reset(&mut self) {
        self.angle = 60.0;
    }

    pub fn diagram(&self, palette: &Palette) -> Diagram {
        let TriangleGeometry { start, f1_head, f2_head } = self.geometry();
        let mut diagram = Diagram::new(TRIANGLE_SIZE);

        diagram.grid(10.0, Stroke::new(0.5, palette.grid));
        diagram.label(Vec2::new(10.0, 20.0), "Tail to head:", palette.construction, 12.0);

        diagram.arrow(start, f1_head, Stroke::new(4.0, palette.f1));
        diagram.label_centered(Vec2::new(start.x + TRIANGLE_F1 / 2.0, start.y + 20.0), "F₁", palette.f1, 14.0);

        diagram.arrow(f1_head, f2_head, Stroke::new(4.0, palette.f2));
        diagram.label((f1_head + f2_head) / 2.0 + Vec2::new(10.0, -10.0), "F₂", palette.f2, 14.0);

        if diagram.arrow(start, f2_head, Stroke::new(4.0, palette.resultant).dashed(6.0, 4.0)) {
            diagram.label((start + f2_head) / 2.0 + Vec2::new(-10.0, -10.0), "F (resultant)", palette.resultant, 16.0);
        }

        diagram.disc(start, 4.0, palette.ink);
        diagram.label(start + Vec2::new(-25.0, 5.0), "start", palette.muted, 10.0);
        diagram.disc(f2_head, 4.0, palette.ink);
        diagram.label(f2_head + Vec2::new(10.0, 5.0), "end", palette.muted, 10.0);

        diagram
    }
}

impl Default for TriangleRule {
    fn default() -> Self {
        Self::new(60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vector::Vec2ScreenUtils;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-2;

    #[test]
    fn angle_is_clamped() {
        assert_eq!(TriangleRule::new(200.0).angle(), 160.0);
        assert_eq!(TriangleRule::new(-10.0).angle(), 0.0);

        let mut rule = TriangleRule::default();
        rule.set_angle(f32::NAN);
        assert_eq!(rule.angle(), 60.0);
    }

    #[test]
    fn collinear_forces_stack() {
        let geometry = TriangleRule::new(0.0).geometry();

        assert_eq!(geometry.f1_head, Vec2::new(120.0, 140.0));
        assert_eq!(geometry.f2_head, Vec2::new(190.0, 140.0));
    }

    #[test]
    fn closing_side_matches_parallelogram_resultant() {
        for angle in [0.0, 30.0, 60.0, 90.0, 135.0, 160.0] {
            let rule = TriangleRule::new(angle);
            let geometry = rule.geometry();
            let closing = geometry.f2_head - geometry.start;
            let resultant = rule.resultant();

            assert_relative_eq!(closing.length(), resultant.magnitude, epsilon = TOLERANCE);
            assert_relative_eq!(closing.screen_angle().unwrap_or_default(), resultant.angle, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn diagram_draws_three_arrows() {
        let diagram = TriangleRule::default().diagram(&Palette::default());

        assert_eq!(diagram.arrows().count(), 3);
        assert!(diagram.has_label("F (resultant)"));
        assert!(diagram.has_label("end"));
    }
}
