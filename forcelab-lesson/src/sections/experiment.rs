use super::LessonData;
use crate::content;
use crate::ui::widgets;
use crate::ui::widgets::INDIGO;
use crate::ui::widgets::INDIGO_FILL;
use forcelab::anyhow::Result;
use forcelab::app::LessonState;
use forcelab::egui::Button;
use forcelab::egui::Color32;
use forcelab::egui::RichText;
use forcelab::egui::Ui;
use forcelab::input::InputEvent;
use forcelab::input::Key;
use forcelab::log::debug;
use forcelab::quiz::QuizBook;
use forcelab::section::Section;
use forcelab::section::SectionCommand;
use forcelab::simulation::experiment::AnchorId;
use forcelab::simulation::experiment::DragSimulation;
use forcelab::simulation::experiment::SimulationMode;
use forcelab::ui::canvas;
use forcelab::ui::canvas::CanvasTransform;
use forcelab::ui::widgets::callout;
use forcelab::ui::widgets::frame;
use forcelab::ui::widgets::heading;
use forcelab::ui::widgets::toggle_button;
use forcelab::ui::widgets::WidgetState;
use forcelab::utils::color::Vec4Color;

pub const BOARD: Color32 = Color32::from_rgb(248, 250, 252);

pub struct ExperimentSection {
    simulation: DragSimulation,
    questions: QuizBook,
    principle_visible: bool,
    principle_button: WidgetState,
    transform: Option<CanvasTransform>,
}

impl ExperimentSection {
    pub fn new() -> Result<Self> {
        Ok(Self {
            simulation: DragSimulation::default(),
            questions: content::experiment_questions()?,
            principle_visible: false,
            principle_button: WidgetState::default(),
            transform: None,
        })
    }

    pub fn simulation(&self) -> &DragSimulation {
        &self.simulation
    }

    /// Where the board was painted during the last frame, `None` before the first one.
    pub fn transform(&self) -> Option<CanvasTransform> {
        self.transform
    }

    fn controls_ui(&mut self, ui: &mut Ui) {
        frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Principle:").strong());
                if toggle_button(ui, self.principle_visible, "Equivalent substitution", "Click to reveal", INDIGO, &mut self.principle_button).clicked() {
                    self.principle_visible = !self.principle_visible;
                }
            });

            ui.label("Stretch the rubber band to the same point O, once with two forces F₁ and F₂ and once with a single force F.");
            ui.label(RichText::new("One force producing the same effect as two forces together.").small().color(widgets::SLATE));
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            for (mode, label) in [(SimulationMode::TwoForce, "Step 1: pull with two forces"), (SimulationMode::OneForce, "Step 2: pull with one force")] {
                if ui.selectable_label(self.simulation.mode() == mode, label).clicked() {
                    self.simulation.set_mode(mode);
                }
            }
        });

        let guide = match self.simulation.mode() {
            SimulationMode::TwoForce => {
                "How to:\n• Drag the two spring scales below.\n• Adjust their directions and pulls.\n• Goal: move the knot onto point O."
            }
            SimulationMode::OneForce => "How to:\n• Drag the single spring scale below.\n• Goal: bring the knot to the same point O again.",
        };
        callout(ui, guide, INDIGO_FILL, INDIGO);

        if ui.add(Button::new("Reset positions")).clicked() {
            self.simulation.reset();
        }
    }

    fn readings_ui(&self, ui: &mut Ui, state: &LessonState<LessonData>) {
        let palette = &state.settings.palette;

        for id in self.simulation.active_anchors() {
            let color = if *id == AnchorId::H2 { palette.f2 } else { palette.f1 };
            widgets::readout(ui, &format!("{}:", id.caption()), &format!("{} N", self.simulation.displayed_force(*id)), color.to_color32());
        }

        widgets::readout(ui, "Rubber band:", &format!("{:.0} N", self.simulation.rubber_band_force()), palette.rubber_band.to_color32());

        if self.simulation.goal_reached() {
            ui.label(RichText::new("The knot is on O: same effect as before.").strong().color(palette.success.to_color32()));
        } else {
            let text = format!("The knot is {:.0} units away from O.", self.simulation.distance_to_target());
            ui.label(RichText::new(text).color(palette.failure.to_color32()));
        }
    }
}

impl Section<LessonData> for ExperimentSection {
    fn title(&self) -> &str {
        "Experiment"
    }

    fn activation(&mut self, state: LessonState<LessonData>) -> Result<()> {
        self.simulation = DragSimulation::new(state.settings.layout.clone());
        self.transform = None;

        Ok(())
    }

    fn deactivation(&mut self, _: LessonState<LessonData>) -> Result<()> {
        self.simulation.end_drag();
        Ok(())
    }

    fn input(&mut self, _: LessonState<LessonData>, event: InputEvent) -> Result<()> {
        if let InputEvent::KeyPress { key: Key::KeyR, repeat: false } = event {
            debug!("Experiment reset from keyboard");
            self.simulation.reset();

            return Ok(());
        }

        if let Some(transform) = self.transform {
            self.simulation.input(&transform.map_event(event));
        }

        Ok(())
    }

    fn ui(&mut self, state: LessonState<LessonData>, ui: &mut Ui) -> Result<Option<SectionCommand>> {
        widgets::section_header(
            ui,
            "2. Experiment: how do forces combine?",
            Some("Test whether combining forces follows the parallelogram rule."),
        );

        self.controls_ui(ui);
        ui.add_space(8.0);

        let diagram = self.simulation.diagram(&state.settings.palette);
        self.transform = Some(canvas::show_diagram(ui, &diagram, BOARD));
        self.readings_ui(ui, &state);

        ui.add_space(12.0);
        heading(ui, "Check");
        widgets::question(ui, &mut self.questions, "exp-1", state.global, &state.settings.palette)?;
        widgets::question(ui, &mut self.questions, "exp-2", state.global, &state.settings.palette)?;

        Ok(None)
    }

    fn reset(&self) -> Box<dyn Section<LessonData>> {
        let mut questions = self.questions.clone();
        questions.reset();

        Box::new(Self {
            simulation: DragSimulation::new(self.simulation.layout().clone()),
            questions,
            principle_visible: false,
            principle_button: WidgetState::default(),
            transform: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forcelab::egui::Pos2;
    use forcelab::egui::Rect;
    use forcelab::glam::Vec2;
    use forcelab::input::PointerButton;
    use forcelab::navigation::SectionNavigator;
    use forcelab::utils::settings::LessonSettings;
    use forcelab::utils::settings::Settings;

    fn state<'a>(settings: &'a LessonSettings, navigator: &'a SectionNavigator, global: &'a mut LessonData) -> LessonState<'a, LessonData> {
        LessonState { settings, navigator, global }
    }

    #[test]
    fn activation_applies_configured_layout() {
        let settings = LessonSettings::from_settings(&"canvas.width=800".parse::<Settings>().unwrap()).unwrap();
        let navigator = SectionNavigator::new(5);
        let mut data = LessonData::default();

        let mut section = ExperimentSection::new().unwrap();
        section.activation(state(&settings, &navigator, &mut data)).unwrap();

        assert_eq!(section.simulation().layout().anchor_a, Vec2::new(400.0, 50.0));
        assert_eq!(section.transform(), None);
    }

    #[test]
    fn pointer_is_ignored_until_board_is_painted() {
        let settings = LessonSettings::default();
        let navigator = SectionNavigator::new(5);
        let mut data = LessonData::default();

        let mut section = ExperimentSection::new().unwrap();
        let knot = section.simulation().knot_position();

        let press = InputEvent::PointerPress { button: PointerButton::Primary, position: Vec2::new(200.0, 320.0) };
        section.input(state(&settings, &navigator, &mut data), press).unwrap();
        section.input(state(&settings, &navigator, &mut data), InputEvent::PointerMove { position: Vec2::new(250.0, 300.0) }).unwrap();

        assert_eq!(section.simulation().dragging(), None);
        assert_eq!(section.simulation().knot_position(), knot);
    }

    #[test]
    fn leaving_the_board_ends_the_drag() {
        let settings = LessonSettings::default();
        let navigator = SectionNavigator::new(5);
        let mut data = LessonData::default();

        let mut section = ExperimentSection::new().unwrap();
        section.transform = Some(CanvasTransform::fit(Rect::from_min_size(Pos2::ZERO, forcelab::egui::Vec2::new(600.0, 400.0)), Vec2::new(600.0, 400.0)));

        let press = InputEvent::PointerPress { button: PointerButton::Primary, position: Vec2::new(200.0, 320.0) };
        section.input(state(&settings, &navigator, &mut data), press).unwrap();
        assert_eq!(section.simulation().dragging(), Some(AnchorId::H1));

        section.input(state(&settings, &navigator, &mut data), InputEvent::PointerMove { position: Vec2::new(250.0, 700.0) }).unwrap();
        section.input(state(&settings, &navigator, &mut data), InputEvent::PointerMove { position: Vec2::new(100.0, 200.0) }).unwrap();

        assert_eq!(section.simulation().dragging(), None);
        assert_eq!(section.simulation().anchor_position(AnchorId::H1), Vec2::new(200.0, 320.0));
    }

    #[test]
    fn press_outside_the_board_grabs_nothing() {
        let settings = LessonSettings::default();
        let navigator = SectionNavigator::new(5);
        let mut data = LessonData::default();

        let mut section = ExperimentSection::new().unwrap();
        section.transform = Some(CanvasTransform::fit(Rect::from_min_size(Pos2::new(0.0, 100.0), forcelab::egui::Vec2::new(600.0, 400.0)), Vec2::new(600.0, 400.0)));

        section.simulation.set_anchor_position(AnchorId::H2, Vec2::new(400.0, 380.0));

        // within pick radius of h2, but below the board edge
        let press = InputEvent::PointerPress { button: PointerButton::Primary, position: Vec2::new(400.0, 505.0) };
        section.input(state(&settings, &navigator, &mut data), press).unwrap();

        assert_eq!(section.simulation().dragging(), None);
    }
}
