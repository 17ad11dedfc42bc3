use crate::diagram::Diagram;
use crate::diagram::Stroke;
use crate::math::vector;
use crate::utils::color::Palette;
use glam::Vec2;
use glam::Vec4;
use log::debug;

pub const BUCKET_WEIGHT: f32 = 100.0;
pub const BUCKET_ROPE_LENGTH: f32 = 130.0;
pub const BUCKET_MIN_ANGLE: f32 = 10.0;
pub const BUCKET_MAX_ANGLE: f32 = 150.0;
pub const BUCKET_ANGLE_STEP: f32 = 5.0;
/// Pull above which the rope is considered at risk.
pub const STRAIN_FACTOR: f32 = 1.5;

const SIZE: Vec2 = Vec2::new(600.0, 400.0);
const BUCKET_CENTER: Vec2 = Vec2::new(300.0, 280.0);
const HANDLE_RISE: f32 = 35.0;
const GROUND_Y: f32 = 380.0;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BucketMode {
    #[default]
    Single,
    Dual,
}

/// One person lifting a bucket straight up, or two people sharing the load at an angle.
#[derive(Clone, Debug)]
pub struct BucketScenario {
    mode: BucketMode,
    angle: f32,
}

impl BucketScenario {
    pub fn new() -> Self {
        Self { mode: BucketMode::Single, angle: 60.0 }
    }

    pub fn mode(&self) -> BucketMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: BucketMode) {
        if self.mode != mode {
            debug!("Bucket mode changed to {:?}", mode);
            self.mode = mode;
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Snaps to the slider step inside the allowed range; non-finite values are ignored.
    pub fn set_angle(&mut self, angle: f32) {
        if !angle.is_finite() {
            return;
        }

        let snapped = (angle / BUCKET_ANGLE_STEP).round() * BUCKET_ANGLE_STEP;
        self.angle = snapped.clamp(BUCKET_MIN_ANGLE, BUCKET_MAX_ANGLE);
    }

    /// Pull of each rope needed to hold the bucket still.
    pub fn force_per_person(&self) -> f32 {
        match self.mode {
            BucketMode::Single => BUCKET_WEIGHT,
            BucketMode::Dual => {
                let (_, cos) = vector::sin_cos_degrees(self.angle / 2.0);
                BUCKET_WEIGHT / (2.0 * cos)
            }
        }
    }

    pub fn displayed_force(&self) -> i32 {
        self.force_per_person().round() as i32
    }

    pub fn is_strained(&self) -> bool {
        self.force_per_person() > BUCKET_WEIGHT * STRAIN_FACTOR
    }

    pub fn attachment(&self) -> Vec2 {
        BUCKET_CENTER - Vec2::new(0.0, HANDLE_RISE)
    }

    /// Rope directions as unit vectors on screen, left hand first.
    pub fn rope_directions(&self) -> Vec<Vec2> {
        match self.mode {
            BucketMode::Single => vec![Vec2::NEG_Y],
            BucketMode::Dual => {
                let (sin, cos) = vector::sin_cos_degrees(self.angle / 2.0);
                vec![Vec2::new(-sin, -cos), Vec2::new(sin, -cos)]
            }
        }
    }

    pub fn hand_positions(&self) -> Vec<Vec2> {
        self.rope_directions().into_iter().map(|direction| self.attachment() + direction * BUCKET_ROPE_LENGTH).collect()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn diagram(&self, palette: &Palette) -> Diagram {
        let mut diagram = Diagram::new(SIZE);
        let attachment = self.attachment();
        let force = self.force_per_person();
        let rope = Stroke::new(2.0, palette.ink);

        diagram.polygon(
            vec![Vec2::new(0.0, GROUND_Y), Vec2::new(SIZE.x, GROUND_Y), Vec2::new(SIZE.x, SIZE.y), Vec2::new(0.0, SIZE.y)],
            palette.grid,
            None,
        );

        let body = [Vec2::new(-30.0, 0.0), Vec2::new(-25.0, 70.0), Vec2::new(25.0, 70.0), Vec2::new(30.0, 0.0)];
        diagram.polygon(body.iter().map(|corner| BUCKET_CENTER + *corner).collect(), palette.construction, Some(Stroke::new(2.0, palette.ink)));
        diagram.arc(BUCKET_CENTER, 30.0, 0.0, 180.0, Stroke::new(3.0, palette.ink));

        let weight_from = BUCKET_CENTER + Vec2::new(0.0, HANDLE_RISE);
        diagram.arrow(weight_from, weight_from + Vec2::new(0.0, BUCKET_WEIGHT), Stroke::new(4.0, palette.weight));
        diagram.label(weight_from + Vec2::new(10.0, 65.0), "G", palette.weight, 14.0);

        let hands = self.hand_positions();
        let directions = self.rope_directions();

        for (index, (hand, direction)) in hands.iter().zip(directions.iter()).enumerate() {
            diagram.line(attachment, *hand, rope);
            diagram.arrow(attachment, attachment + *direction * force, Stroke::new(4.0, palette.f1));

            let side = match (self.mode, index) {
                (BucketMode::Single, _) => 0.0,
                (BucketMode::Dual, 0) => -1.0,
                _ => 1.0,
            };
            self.person(&mut diagram, *hand, side, palette.person);
        }

        match self.mode {
            BucketMode::Single => {
                diagram.label(Vec2::new(attachment.x + 10.0, BUCKET_CENTER.y - 80.0), format!("F = {}N", self.displayed_force()), palette.f1, 16.0);
            }
            BucketMode::Dual => {
                diagram.label(Vec2::new(attachment.x - 60.0, BUCKET_CENTER.y - 60.0), "F₁", palette.f1, 14.0);
                diagram.label(Vec2::new(attachment.x + 50.0, BUCKET_CENTER.y - 60.0), "F₂", palette.f1, 14.0);

                let start = 90.0 + self.angle / 2.0;
                diagram.arc(attachment, 20.0, start, -self.angle, Stroke::new(1.0, palette.construction).dashed(4.0, 4.0));
                diagram.label_centered(attachment - Vec2::new(0.0, 15.0), "θ", palette.muted, 12.0);
            }
        }

        diagram
    }

    // Stick figure standing beside the hand; `side` is -1 for left, 1 for right, 0 for the single lifter
    fn person(&self, diagram: &mut Diagram, hand: Vec2, side: f32, color: Vec4) {
        let center = BUCKET_CENTER.x;
        let body_x = if side < 0.0 {
            (hand.x - 30.0).min(center - 110.0)
        } else if side > 0.0 {
            (hand.x + 30.0).max(center + 110.0)
        } else {
            center + 90.0
        };

        let hip = Vec2::new(body_x, 310.0);
        let shoulder = Vec2::new(body_x, 240.0);

        diagram.line(hip, Vec2::new(body_x - 25.0, GROUND_Y), Stroke::new(6.0, color));
        diagram.line(hip, Vec2::new(body_x + 25.0, GROUND_Y), Stroke::new(6.0, color));
        diagram.line(hip, shoulder, Stroke::new(8.0, color));
        diagram.disc(Vec2::new(body_x, 215.0), 20.0, color);
        diagram.line(shoulder, hand, Stroke::new(6.0, color));
    }
}

impl Default for BucketScenario {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn single_lifter_carries_full_weight() {
        let scenario = BucketScenario::new();

        assert_eq!(scenario.force_per_person(), BUCKET_WEIGHT);
        assert_eq!(scenario.hand_positions(), vec![Vec2::new(300.0, 115.0)]);
        assert!(!scenario.is_strained());
    }

    #[test]
    fn dual_force_at_reference_angles() {
        let mut scenario = BucketScenario::new();
        scenario.set_mode(BucketMode::Dual);

        scenario.set_angle(120.0);
        assert_relative_eq!(scenario.force_per_person(), 100.0, max_relative = 1e-4);

        scenario.set_angle(10.0);
        assert_relative_eq!(scenario.force_per_person(), 50.0 / 5.0f32.to_radians().cos(), max_relative = 1e-4);
    }

    #[test]
    fn angle_snaps_to_step_and_range() {
        let mut scenario = BucketScenario::new();

        scenario.set_angle(63.0);
        assert_eq!(scenario.angle(), 65.0);
        scenario.set_angle(2.0);
        assert_eq!(scenario.angle(), 10.0);
        scenario.set_angle(179.0);
        assert_eq!(scenario.angle(), 150.0);
        scenario.set_angle(f32::NAN);
        assert_eq!(scenario.angle(), 150.0);
    }

    #[test]
    fn wide_angles_strain_the_rope() {
        let mut scenario = BucketScenario::new();
        scenario.set_mode(BucketMode::Dual);

        scenario.set_angle(140.0);
        assert!(!scenario.is_strained());
        scenario.set_angle(145.0);
        assert!(scenario.is_strained());
    }

    #[test]
    fn dual_hands_are_symmetric() {
        let mut scenario = BucketScenario::new();
        scenario.set_mode(BucketMode::Dual);
        let hands = scenario.hand_positions();

        assert_eq!(hands.len(), 2);
        assert_relative_eq!(hands[0].x + hands[1].x, 600.0, epsilon = 1e-3);
        assert_relative_eq!(hands[0].y, hands[1].y);
        assert_relative_eq!(hands[0].distance(scenario.attachment()), BUCKET_ROPE_LENGTH, epsilon = 1e-3);
    }

    #[test]
    fn vertical_components_balance_weight() {
        let mut scenario = BucketScenario::new();
        scenario.set_mode(BucketMode::Dual);
        scenario.set_angle(90.0);

        let lift: f32 = scenario.rope_directions().iter().map(|direction| -direction.y * scenario.force_per_person()).sum();
        assert_relative_eq!(lift, BUCKET_WEIGHT, max_relative = 1e-4);
    }

    #[test]
    fn diagram_matches_mode() {
        let palette = Palette::default();
        let mut scenario = BucketScenario::new();
        assert!(scenario.diagram(&palette).has_label("F = 100N"));

        scenario.set_mode(BucketMode::Dual);
        let diagram = scenario.diagram(&palette);
        assert!(diagram.has_label("F₂"));
        // two ropes plus the weight
        assert_eq!(diagram.arrows().count(), 3);
    }
}
