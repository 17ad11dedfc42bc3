use crate::diagram::Diagram;
use crate::diagram::Stroke;
use crate::math::vector;
use crate::math::vector::ForceSpec;
use crate::math::vector::Vec2ScreenUtils;
use crate::utils::color::Palette;
use anyhow::bail;
use anyhow::Error;
use anyhow::Result;
use glam::Vec2;
use log::warn;
use std::str::FromStr;

pub const PLAYGROUND_ORIGIN: Vec2 = Vec2::new(200.0, 250.0);
pub const PLAYGROUND_SIZE: Vec2 = Vec2::new(400.0, 350.0);

const ANGLE_ARC_RADIUS: f32 = 30.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Parameter {
    F1,
    F2,
    Angle,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaygroundRanges {
    pub min_magnitude: f32,
    pub max_magnitude: f32,
    pub max_angle: f32,
}

/// Screen-space end points of every arrow, all starting at `origin`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaygroundGeometry {
    pub origin: Vec2,
    pub f1_end: Vec2,
    pub f2_end: Vec2,
    pub resultant_end: Vec2,
}

#[derive(Clone, Debug)]
pub struct ParameterPlayground {
    ranges: PlaygroundRanges,
    f1: f32,
    f2: f32,
    angle: f32,
    resultant_visible: bool,
}

impl Parameter {
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::F1 => "f1",
            Parameter::F2 => "f2",
            Parameter::Angle => "angle",
        }
    }
}

impl FromStr for Parameter {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "f1" => Ok(Parameter::F1),
            "f2" => Ok(Parameter::F2),
            "angle" => Ok(Parameter::Angle),
            _ => bail!("Unknown parameter {}", value),
        }
    }
}

impl PlaygroundRanges {
    pub fn clamp(&self, parameter: Parameter, value: f32) -> f32 {
        match parameter {
            Parameter::F1 | Parameter::F2 => value.clamp(self.min_magnitude, self.max_magnitude),
            Parameter::Angle => value.clamp(0.0, self.max_angle),
        }
    }
}

impl Default for PlaygroundRanges {
    fn default() -> Self {
        Self { min_magnitude: 20.0, max_magnitude: 150.0, max_angle: 180.0 }
    }
}

impl ParameterPlayground {
    pub fn new(f1: f32, f2: f32, angle: f32, resultant_visible: bool, ranges: PlaygroundRanges) -> Self {
        let mut playground = Self { ranges, f1: ranges.min_magnitude, f2: ranges.min_magnitude, angle: 0.0, resultant_visible };
        playground.set_parameter(Parameter::F1, f1);
        playground.set_parameter(Parameter::F2, f2);
        playground.set_parameter(Parameter::Angle, angle);

        playground
    }

    pub fn with_ranges(ranges: PlaygroundRanges) -> Self {
        Self::new(100.0, 100.0, 60.0, true, ranges)
    }

    pub fn ranges(&self) -> &PlaygroundRanges {
        &self.ranges
    }

    pub fn parameter(&self, parameter: Parameter) -> f32 {
        match parameter {
            Parameter::F1 => self.f1,
            Parameter::F2 => self.f2,
            Parameter::Angle => self.angle,
        }
    }

    pub fn set_parameter(&mut self, parameter: Parameter, value: f32) {
        if !value.is_finite() {
            warn!("Ignoring non-finite value for {}", parameter.name());
            return;
        }

        let value = self.ranges.clamp(parameter, value);
        match parameter {
            Parameter::F1 => self.f1 = value,
            Parameter::F2 => self.f2 = value,
            Parameter::Angle => self.angle = value,
        }
    }

    pub fn resultant_visible(&self) -> bool {
        self.resultant_visible
    }

    pub fn set_resultant_visible(&mut self, visible: bool) {
        self.resultant_visible = visible;
    }

    pub fn toggle_resultant(&mut self) {
        self.resultant_visible = !self.resultant_visible;
    }

    pub fn f1(&self) -> ForceSpec {
        ForceSpec::new(self.f1, 0.0)
    }

    pub fn f2(&self) -> ForceSpec {
        ForceSpec::new(self.f2, self.angle)
    }

    pub fn resultant(&self) -> ForceSpec {
        vector::resultant(self.f1(), self.f2())
    }

    pub fn geometry(&self) -> PlaygroundGeometry {
        let origin = PLAYGROUND_ORIGIN;
        let f1_end = origin + self.f1().to_screen();
        let f2_end = origin + self.f2().to_screen();

        PlaygroundGeometry { origin, f1_end, f2_end, resultant_end: f1_end + (f2_end - origin) }
    }

    pub fn reset(&mut self) {
        *self = Self::with_ranges(self.ranges);
    }

    pub fn diagram(&self, palette: &Palette) -> Diagram {
        let geometry = self.geometry();
        let origin = geometry.origin;
        let mut diagram = Diagram::new(PLAYGROUND_SIZE);

        diagram.grid(20.0, Stroke::new(0.5, palette.grid));

        if self.resultant_visible {
            let construction = Stroke::new(1.0, palette.construction).dashed(5.0, 5.0);
            diagram.line(geometry.f1_end, geometry.resultant_end, construction);
            diagram.line(geometry.f2_end, geometry.resultant_end, construction);

            if diagram.arrow(origin, geometry.resultant_end, Stroke::new(4.0, palette.resultant)) {
                diagram.label(geometry.resultant_end + Vec2::new(10.0, 0.0), "F", palette.resultant, 14.0);
            }
        }

        diagram.arrow(origin, geometry.f1_end, Stroke::new(3.0, palette.f1));
        diagram.label(geometry.f1_end + Vec2::new(0.0, 20.0), "F₁", palette.f1, 14.0);

        diagram.arrow(origin, geometry.f2_end, Stroke::new(3.0, palette.f2));
        diagram.label(geometry.f2_end - Vec2::new(10.0, 10.0), "F₂", palette.f2, 14.0);

        diagram.arc(origin, ANGLE_ARC_RADIUS, 0.0, self.angle, Stroke::new(1.5, palette.muted));
        diagram.label(origin + Vec2::new(40.0, -10.0), "θ", palette.muted, 12.0);

        diagram.disc(origin, 3.0, palette.ink);
        diagram.label(origin + Vec2::from_screen_polar(15.0, 225.0), "O", palette.ink, 12.0);

        diagram
    }
}

impl Default for ParameterPlayground {
    fn default() -> Self {
        Self::with_ranges(PlaygroundRanges::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-3;

    #[test]
    fn defaults_match_lesson() {
        let playground = ParameterPlayground::default();

        assert_eq!(playground.parameter(Parameter::F1), 100.0);
        assert_eq!(playground.parameter(Parameter::F2), 100.0);
        assert_eq!(playground.parameter(Parameter::Angle), 60.0);
        assert!(playground.resultant_visible());
        assert_relative_eq!(playground.resultant().magnitude, 173.205, epsilon = 1e-2);
    }

    #[test]
    fn constructor_arguments_are_clamped() {
        let playground = ParameterPlayground::new(5.0, 500.0, -30.0, false, PlaygroundRanges::default());

        assert_eq!(playground.parameter(Parameter::F1), 20.0);
        assert_eq!(playground.parameter(Parameter::F2), 150.0);
        assert_eq!(playground.parameter(Parameter::Angle), 0.0);
    }

    #[test]
    fn setters_clamp_and_ignore_non_finite() {
        let mut playground = ParameterPlayground::default();
        playground.set_parameter(Parameter::Angle, 270.0);
        playground.set_parameter(Parameter::F1, f32::INFINITY);
        playground.set_parameter(Parameter::F2, f32::NAN);

        assert_eq!(playground.parameter(Parameter::Angle), 180.0);
        assert_eq!(playground.parameter(Parameter::F1), 100.0);
        assert_eq!(playground.parameter(Parameter::F2), 100.0);
    }

    #[test]
    fn parameters_parse_by_name() {
        assert_eq!("angle".parse::<Parameter>().ok(), Some(Parameter::Angle));
        assert!("f3".parse::<Parameter>().is_err());
    }

    #[test]
    fn geometry_closes_parallelogram() {
        let mut playground = ParameterPlayground::default();
        playground.set_parameter(Parameter::Angle, 90.0);
        let geometry = playground.geometry();

        assert_eq!(geometry.f1_end, Vec2::new(300.0, 250.0));
        assert_relative_eq!(geometry.f2_end.x, 200.0, epsilon = TOLERANCE);
        assert_relative_eq!(geometry.f2_end.y, 150.0, epsilon = TOLERANCE);
        assert_relative_eq!(geometry.resultant_end.x, 300.0, epsilon = TOLERANCE);
        assert_relative_eq!(geometry.resultant_end.y, 150.0, epsilon = TOLERANCE);
    }

    #[test]
    fn opposed_equal_forces_draw_no_resultant() {
        let mut playground = ParameterPlayground::default();
        playground.set_parameter(Parameter::Angle, 180.0);

        assert!(playground.resultant().is_directionless());
        let diagram = playground.diagram(&Palette::default());
        assert_eq!(diagram.arrows().count(), 2);
        assert!(!diagram.has_label("F"));
    }

    #[test]
    fn hiding_resultant_only_affects_rendering() {
        let mut playground = ParameterPlayground::default();
        let magnitude = playground.resultant().magnitude;
        playground.toggle_resultant();
        let diagram = playground.diagram(&Palette::default());

        assert!(!playground.resultant_visible());
        assert_eq!(playground.resultant().magnitude, magnitude);
        assert_eq!(diagram.arrows().count(), 2);
        assert_eq!(diagram.dashed_count(), 0);
        assert!(diagram.has_label("F₁"));
    }

    #[test]
    fn visible_resultant_has_construction_lines() {
        let diagram = ParameterPlayground::default().diagram(&Palette::default());

        assert_eq!(diagram.arrows().count(), 3);
        assert_eq!(diagram.dashed_count(), 2);
        assert!(diagram.has_label("F"));
    }

    #[test]
    fn reset_keeps_ranges() {
        let ranges = PlaygroundRanges { min_magnitude: 10.0, max_magnitude: 90.0, max_angle: 120.0 };
        let mut playground = ParameterPlayground::with_ranges(ranges);
        playground.set_parameter(Parameter::Angle, 110.0);
        playground.reset();

        assert_eq!(playground.parameter(Parameter::F1), 90.0);
        assert_eq!(playground.parameter(Parameter::Angle), 60.0);
        assert_eq!(*playground.ranges(), ranges);
    }
}
