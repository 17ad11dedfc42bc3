use super::bounds::CanvasBounds;
use crate::diagram::shape;
use crate::diagram::Diagram;
use crate::diagram::Stroke;
use crate::input::InputEvent;
use crate::input::PointerButton;
use crate::math::vector;
use crate::math::vector::EPSILON;
use crate::utils::color::Palette;
use anyhow::bail;
use anyhow::Error;
use anyhow::Result;
use glam::Vec2;
use log::debug;
use log::warn;
use std::fmt;
use std::str::FromStr;

/// Knot-to-target distance below which the experiment goal counts as reached.
pub const GOAL_TOLERANCE: f32 = 8.0;
/// Newtons shown on a spring scale per unit of string length.
pub const FORCE_SCALE: f32 = 0.5;
pub const HANDLE_PICK_RADIUS: f32 = 30.0;

const HANDLE_WIDTH: f32 = 30.0;
const HANDLE_HEIGHT: f32 = 50.0;
const HOOK_LENGTH: f32 = 20.0;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SimulationMode {
    #[default]
    TwoForce,
    OneForce,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnchorId {
    H1,
    H2,
    Single,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentLayout {
    pub size: Vec2,
    pub anchor_a: Vec2,
    pub target_o: Vec2,
    pub h1: Vec2,
    pub h2: Vec2,
    pub single: Vec2,
    pub bounds: CanvasBounds,
    pub tolerance: f32,
    pub force_scale: f32,
}

/// Rubber band fixed at `A`, pulled by spring scales through a knot that should land on `O`.
///
/// The knot is the equal-weight centroid of `A` and the active handles, a stand-in for solving the
/// spring force balance that keeps dragging smooth.
#[derive(Clone, Debug)]
pub struct DragSimulation {
    layout: ExperimentLayout,
    mode: SimulationMode,
    h1: Vec2,
    h2: Vec2,
    single: Vec2,
    dragging: Option<AnchorId>,
}

impl SimulationMode {
    pub fn anchors(&self) -> &'static [AnchorId] {
        match self {
            SimulationMode::TwoForce => &[AnchorId::H1, AnchorId::H2],
            SimulationMode::OneForce => &[AnchorId::Single],
        }
    }
}

impl AnchorId {
    pub fn name(&self) -> &'static str {
        match self {
            AnchorId::H1 => "h1",
            AnchorId::H2 => "h2",
            AnchorId::Single => "hSingle",
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            AnchorId::H1 => "F1 scale",
            AnchorId::H2 => "F2 scale",
            AnchorId::Single => "F scale",
        }
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AnchorId {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "h1" => Ok(AnchorId::H1),
            "h2" => Ok(AnchorId::H2),
            "hSingle" => Ok(AnchorId::Single),
            _ => bail!("Unknown anchor {}", value),
        }
    }
}

impl ExperimentLayout {
    pub fn for_canvas(size: Vec2, bounds: CanvasBounds) -> Self {
        let center = size.x / 2.0;

        Self {
            size,
            anchor_a: Vec2::new(center, 50.0),
            target_o: Vec2::new(center, 220.0),
            h1: bounds.clamp(Vec2::new(center - 100.0, 320.0)),
            h2: bounds.clamp(Vec2::new(center + 100.0, 320.0)),
            single: bounds.clamp(Vec2::new(center, 380.0)),
            bounds,
            tolerance: GOAL_TOLERANCE,
            force_scale: FORCE_SCALE,
        }
    }
}

impl Default for ExperimentLayout {
    fn default() -> Self {
        Self::for_canvas(Vec2::new(600.0, 400.0), CanvasBounds::default())
    }
}

impl DragSimulation {
    pub fn new(layout: ExperimentLayout) -> Self {
        Self { h1: layout.h1, h2: layout.h2, single: layout.single, layout, mode: SimulationMode::TwoForce, dragging: None }
    }

    pub fn layout(&self) -> &ExperimentLayout {
        &self.layout
    }

    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    /// Switching never touches anchor positions; a drag in progress is dropped.
    pub fn set_mode(&mut self, mode: SimulationMode) {
        if self.mode != mode {
            debug!("Experiment mode changed to {:?}", mode);
            self.mode = mode;
            self.dragging = None;
        }
    }

    pub fn active_anchors(&self) -> &'static [AnchorId] {
        self.mode.anchors()
    }

    pub fn anchor_position(&self, id: AnchorId) -> Vec2 {
        match id {
            AnchorId::H1 => self.h1,
            AnchorId::H2 => self.h2,
            AnchorId::Single => self.single,
        }
    }

    pub fn set_anchor_position(&mut self, id: AnchorId, point: Vec2) {
        if !point.is_finite() {
            warn!("Ignoring non-finite position {:?} for anchor {}", point, id);
            return;
        }

        let point = self.layout.bounds.clamp(point);
        match id {
            AnchorId::H1 => self.h1 = point,
            AnchorId::H2 => self.h2 = point,
            AnchorId::Single => self.single = point,
        }
    }

    pub fn knot_position(&self) -> Vec2 {
        match self.mode {
            SimulationMode::TwoForce => vector::centroid(&[self.layout.anchor_a, self.h1, self.h2]),
            SimulationMode::OneForce => vector::centroid(&[self.layout.anchor_a, self.single]),
        }
    }

    pub fn distance_to_target(&self) -> f32 {
        self.knot_position().distance(self.layout.target_o)
    }

    pub fn goal_reached(&self) -> bool {
        self.distance_to_target() < self.layout.tolerance
    }

    pub fn anchor_force(&self, id: AnchorId) -> f32 {
        vector::force_from_separation(self.knot_position(), self.anchor_position(id), self.layout.force_scale)
    }

    /// Scale reading rounded to whole newtons.
    pub fn displayed_force(&self, id: AnchorId) -> i32 {
        self.anchor_force(id).round() as i32
    }

    pub fn rubber_band_force(&self) -> f32 {
        vector::force_from_separation(self.layout.anchor_a, self.knot_position(), self.layout.force_scale)
    }

    /// Orientation of a spring-scale body, in degrees clockwise on screen, hanging away from the knot.
    pub fn handle_rotation(&self, id: AnchorId) -> f32 {
        let delta = self.anchor_position(id) - self.knot_position();
        if delta.length() < EPSILON {
            return 0.0;
        }

        delta.y.atan2(delta.x).to_degrees() - 90.0
    }

    pub fn reset(&mut self) {
        self.h1 = self.layout.h1;
        self.h2 = self.layout.h2;
        self.single = self.layout.single;
        self.dragging = None;
    }

    pub fn dragging(&self) -> Option<AnchorId> {
        self.dragging
    }

    /// Nearest handle of the current mode within the pick radius.
    pub fn pick_anchor(&self, point: Vec2) -> Option<AnchorId> {
        self.active_anchors()
            .iter()
            .map(|id| (*id, self.anchor_position(*id).distance(point)))
            .filter(|(_, distance)| *distance <= HANDLE_PICK_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    pub fn begin_drag(&mut self, id: AnchorId) -> bool {
        if self.dragging.is_some() || !self.active_anchors().contains(&id) {
            return false;
        }

        debug!("Dragging anchor {}", id);
        self.dragging = Some(id);
        true
    }

    pub fn drag_to(&mut self, point: Vec2) -> bool {
        let Some(id) = self.dragging else {
            return false;
        };

        let reached = self.goal_reached();
        self.set_anchor_position(id, point);

        if reached != self.goal_reached() {
            debug!("Knot {} target (distance {:.1})", if reached { "left" } else { "reached" }, self.distance_to_target());
        }

        true
    }

    pub fn end_drag(&mut self) {
        if let Some(id) = self.dragging.take() {
            debug!("Released anchor {}", id);
        }
    }

    /// Applies a pointer event given in canvas coordinates, returns whether an anchor moved or drag state changed.
    pub fn input(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerPress { button: PointerButton::Primary, position } => match self.pick_anchor(position) {
                Some(id) => self.begin_drag(id),
                None => false,
            },
            InputEvent::PointerMove { position } => self.drag_to(position),
            InputEvent::PointerRelease { .. } | InputEvent::PointerLeave => {
                let active = self.dragging.is_some();
                self.end_drag();
                active
            }
            _ => false,
        }
    }

    pub fn diagram(&self, palette: &Palette) -> Diagram {
        let mut diagram = Diagram::new(self.layout.size);
        let knot = self.knot_position();
        let anchor_a = self.layout.anchor_a;
        let target = self.layout.target_o;
        let reached = self.goal_reached();
        let target_color = if reached { palette.success } else { palette.failure };

        diagram.circle(target, GOAL_TOLERANCE, Stroke::new(2.0, target_color).dashed(2.0, 2.0));
        diagram.label(target + Vec2::new(15.0, 5.0), "O (Target)", target_color, 14.0);

        if reached {
            diagram.label_centered(Vec2::new(self.layout.size.x / 2.0, self.layout.size.y - 20.0), "Target reached", palette.success, 16.0);
        }

        diagram.line(anchor_a, knot, Stroke::new(6.0, palette.rubber_band));
        diagram.disc(anchor_a, 6.0, palette.ink);
        diagram.label_centered(anchor_a - Vec2::new(0.0, 15.0), "A", palette.ink, 14.0);

        for id in self.active_anchors() {
            let position = self.anchor_position(*id);
            let rotation = self.handle_rotation(*id);
            let local = Vec2::from_angle(rotation.to_radians());

            diagram.line(knot, position, Stroke::new(2.0, palette.construction));
            diagram.polygon(
                shape::rotated_rectangle(position, HANDLE_WIDTH, HANDLE_HEIGHT, rotation),
                palette.handle_fill,
                Some(Stroke::new(2.0, palette.handle_stroke)),
            );

            let hook = position + local.rotate(Vec2::new(0.0, -HOOK_LENGTH));
            diagram.line(position, hook, Stroke::new(2.0, palette.construction));
            diagram.disc(hook, 3.0, palette.construction);

            let reading = format!("{}N", self.displayed_force(*id));
            diagram.label_centered(position + local.rotate(Vec2::new(0.0, 30.0)), reading, palette.muted, 10.0);
            diagram.label_centered(position + Vec2::new(0.0, 60.0), id.caption(), palette.ink, 12.0);
        }

        diagram.disc(knot, 5.0, palette.knot);
        diagram.circle(knot, 5.0, Stroke::new(2.0, palette.handle_fill));

        diagram
    }
}

impl Default for DragSimulation {
    fn default() -> Self {
        Self::new(ExperimentLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-3;

    fn press(position: Vec2) -> InputEvent {
        InputEvent::PointerPress { button: PointerButton::Primary, position }
    }

    #[test]
    fn anchor_names_round_trip() {
        for id in [AnchorId::H1, AnchorId::H2, AnchorId::Single] {
            assert_eq!(id.name().parse::<AnchorId>().ok(), Some(id));
        }
        assert!("h3".parse::<AnchorId>().is_err());
    }

    #[test]
    fn default_knot_is_centroid_of_three_points() {
        let simulation = DragSimulation::default();
        let knot = simulation.knot_position();

        assert_relative_eq!(knot.x, 300.0, epsilon = TOLERANCE);
        assert_relative_eq!(knot.y, 230.0, epsilon = TOLERANCE);
        assert!(!simulation.goal_reached());
    }

    #[test]
    fn one_force_knot_is_midpoint() {
        let mut simulation = DragSimulation::default();
        simulation.set_mode(SimulationMode::OneForce);
        simulation.set_anchor_position(AnchorId::Single, Vec2::new(400.0, 350.0));

        assert_eq!(simulation.knot_position(), Vec2::new(350.0, 200.0));
    }

    #[test]
    fn out_of_bounds_positions_are_clamped() {
        let mut simulation = DragSimulation::default();
        simulation.set_anchor_position(AnchorId::H1, Vec2::new(-50.0, 1000.0));
        simulation.set_anchor_position(AnchorId::H2, Vec2::new(900.0, 10.0));

        assert_eq!(simulation.anchor_position(AnchorId::H1), Vec2::new(20.0, 380.0));
        assert_eq!(simulation.anchor_position(AnchorId::H2), Vec2::new(580.0, 50.0));
    }

    #[test]
    fn non_finite_positions_are_ignored() {
        let mut simulation = DragSimulation::default();
        simulation.set_anchor_position(AnchorId::H1, Vec2::new(f32::NAN, 100.0));

        assert_eq!(simulation.anchor_position(AnchorId::H1), Vec2::new(200.0, 320.0));
    }

    #[test]
    fn goal_requires_strictly_less_than_tolerance() {
        let mut simulation = DragSimulation::default();
        simulation.set_mode(SimulationMode::OneForce);

        // knot.y = (50 + y) / 2, target at 220
        simulation.set_anchor_position(AnchorId::Single, Vec2::new(300.0, 374.0));
        assert_relative_eq!(simulation.distance_to_target(), 8.0, epsilon = TOLERANCE);
        assert!(!simulation.goal_reached());

        simulation.set_anchor_position(AnchorId::Single, Vec2::new(300.0, 376.0));
        assert!(simulation.goal_reached());
    }

    #[test]
    fn two_forces_can_reach_target() {
        let mut simulation = DragSimulation::default();
        simulation.set_anchor_position(AnchorId::H1, Vec2::new(200.0, 305.0));
        simulation.set_anchor_position(AnchorId::H2, Vec2::new(400.0, 305.0));

        assert_relative_eq!(simulation.knot_position().y, 220.0, epsilon = TOLERANCE);
        assert!(simulation.goal_reached());
    }

    #[test]
    fn inactive_anchor_does_not_move_knot() {
        let mut simulation = DragSimulation::default();
        simulation.set_mode(SimulationMode::OneForce);
        let knot = simulation.knot_position();

        simulation.set_anchor_position(AnchorId::H1, Vec2::new(100.0, 200.0));
        assert_eq!(simulation.knot_position(), knot);

        simulation.set_mode(SimulationMode::TwoForce);
        assert_eq!(simulation.anchor_position(AnchorId::H1), Vec2::new(100.0, 200.0));
        assert_relative_eq!(simulation.knot_position().x, (300.0 + 100.0 + 400.0) / 3.0, epsilon = TOLERANCE);
    }

    #[test]
    fn forces_scale_with_string_length() {
        let simulation = DragSimulation::default();

        // knot (300, 230), h1 (200, 320)
        let expected = 0.5 * (100.0f32 * 100.0 + 90.0 * 90.0).sqrt();
        assert_relative_eq!(simulation.anchor_force(AnchorId::H1), expected, epsilon = TOLERANCE);
        assert_relative_eq!(simulation.anchor_force(AnchorId::H2), expected, epsilon = TOLERANCE);
        assert_relative_eq!(simulation.rubber_band_force(), 90.0, epsilon = TOLERANCE);
        assert_eq!(simulation.displayed_force(AnchorId::H1), 67);
    }

    #[test]
    fn reset_restores_defaults_and_keeps_mode() {
        let mut simulation = DragSimulation::default();
        simulation.set_anchor_position(AnchorId::H1, Vec2::new(50.0, 60.0));
        simulation.set_anchor_position(AnchorId::Single, Vec2::new(50.0, 60.0));
        simulation.set_mode(SimulationMode::OneForce);
        simulation.reset();

        assert_eq!(simulation.mode(), SimulationMode::OneForce);
        assert_eq!(simulation.anchor_position(AnchorId::H1), Vec2::new(200.0, 320.0));
        assert_eq!(simulation.anchor_position(AnchorId::Single), Vec2::new(300.0, 380.0));
    }

    #[test]
    fn drag_moves_only_captured_anchor() {
        let mut simulation = DragSimulation::default();

        assert!(simulation.input(&press(Vec2::new(205.0, 325.0))));
        assert_eq!(simulation.dragging(), Some(AnchorId::H1));

        simulation.input(&InputEvent::PointerMove { position: Vec2::new(150.0, 300.0) });
        assert_eq!(simulation.anchor_position(AnchorId::H1), Vec2::new(150.0, 300.0));
        assert_eq!(simulation.anchor_position(AnchorId::H2), Vec2::new(400.0, 320.0));

        simulation.input(&InputEvent::PointerRelease { button: PointerButton::Primary, position: Vec2::new(150.0, 300.0) });
        simulation.input(&InputEvent::PointerMove { position: Vec2::new(500.0, 100.0) });
        assert_eq!(simulation.anchor_position(AnchorId::H1), Vec2::new(150.0, 300.0));
    }

    #[test]
    fn leaving_the_canvas_ends_drag() {
        let mut simulation = DragSimulation::default();
        simulation.input(&press(Vec2::new(400.0, 320.0)));
        simulation.input(&InputEvent::PointerLeave);

        assert_eq!(simulation.dragging(), None);
        assert!(!simulation.input(&InputEvent::PointerMove { position: Vec2::new(420.0, 300.0) }));
    }

    #[test]
    fn only_one_anchor_is_live() {
        let mut simulation = DragSimulation::default();

        assert!(simulation.begin_drag(AnchorId::H1));
        assert!(!simulation.begin_drag(AnchorId::H2));
        assert_eq!(simulation.dragging(), Some(AnchorId::H1));
    }

    #[test]
    fn inactive_anchors_cannot_be_grabbed() {
        let mut simulation = DragSimulation::default();

        assert!(!simulation.begin_drag(AnchorId::Single));
        assert_eq!(simulation.pick_anchor(Vec2::new(300.0, 380.0)), None);
    }

    #[test]
    fn mode_switch_drops_drag() {
        let mut simulation = DragSimulation::default();
        simulation.begin_drag(AnchorId::H2);
        simulation.set_mode(SimulationMode::OneForce);

        assert_eq!(simulation.dragging(), None);
    }

    #[test]
    fn handle_hangs_away_from_knot() {
        let mut simulation = DragSimulation::default();
        simulation.set_mode(SimulationMode::OneForce);

        // knot directly above the handle
        assert_relative_eq!(simulation.handle_rotation(AnchorId::Single), 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn diagram_reflects_goal_state() {
        let palette = Palette::default();
        let mut simulation = DragSimulation::default();
        assert!(!simulation.diagram(&palette).has_label("Target reached"));

        simulation.set_mode(SimulationMode::OneForce);
        simulation.set_anchor_position(AnchorId::Single, Vec2::new(300.0, 390.0));
        let diagram = simulation.diagram(&palette);

        assert!(diagram.has_label("Target reached"));
        assert!(diagram.has_label("F scale"));
        assert!(!diagram.has_label("F1 scale"));
    }
}
