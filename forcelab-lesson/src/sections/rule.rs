use super::LessonData;
use crate::content;
use crate::ui::widgets;
use crate::ui::widgets::PURPLE;
use crate::ui::widgets::PURPLE_FILL;
use forcelab::anyhow::Result;
use forcelab::app::LessonState;
use forcelab::egui::Button;
use forcelab::egui::Color32;
use forcelab::egui::RichText;
use forcelab::egui::Ui;
use forcelab::input::InputEvent;
use forcelab::section::Section;
use forcelab::section::SectionCommand;
use forcelab::simulation::playground::Parameter;
use forcelab::simulation::playground::ParameterPlayground;
use forcelab::simulation::playground::PlaygroundRanges;
use forcelab::ui::canvas;
use forcelab::ui::widgets::callout;
use forcelab::ui::widgets::frame;
use forcelab::ui::widgets::heading;
use forcelab::ui::widgets::toggle_button;
use forcelab::ui::widgets::value_slider;
use forcelab::ui::widgets::WidgetState;
use forcelab::utils::color::Vec4Color;

pub const INITIAL_F1: f32 = 80.0;
pub const INITIAL_F2: f32 = 60.0;
pub const INITIAL_ANGLE: f32 = 60.0;

const PAPER: Color32 = Color32::WHITE;

pub struct RuleSection {
    playground: ParameterPlayground,
    resultant_button: WidgetState,
}

impl RuleSection {
    pub fn new(ranges: PlaygroundRanges) -> Self {
        Self { playground: ParameterPlayground::new(INITIAL_F1, INITIAL_F2, INITIAL_ANGLE, false, ranges), resultant_button: WidgetState::default() }
    }

    pub fn playground(&self) -> &ParameterPlayground {
        &self.playground
    }

    fn playground_ui(&mut self, ui: &mut Ui, state: &LessonState<LessonData>) {
        let palette = &state.settings.palette;
        let ranges = *self.playground.ranges();

        frame().show(ui, |ui| {
            ui.label(RichText::new("The diagonal between the two sides gives the magnitude and direction of the resultant.").size(16.0));
            ui.add_space(6.0);

            canvas::show_diagram(ui, &self.playground.diagram(palette), PAPER);

            heading(ui, "Parameters");
            let sliders = [
                (Parameter::F1, "F₁", ranges.min_magnitude..=ranges.max_magnitude, " N"),
                (Parameter::F2, "F₂", ranges.min_magnitude..=ranges.max_magnitude, " N"),
                (Parameter::Angle, "Angle θ", 0.0..=ranges.max_angle, "°"),
            ];

            for (parameter, label, range, suffix) in sliders {
                let mut value = self.playground.parameter(parameter);
                if value_slider(ui, label, &mut value, range, 1.0, suffix).changed() {
                    self.playground.set_parameter(parameter, value);
                }
            }

            ui.horizontal(|ui| {
                let color = palette.resultant.to_color32();
                if toggle_button(ui, self.playground.resultant_visible(), "Hide resultant", "Show resultant", color, &mut self.resultant_button).clicked() {
                    self.playground.toggle_resultant();
                }

                if ui.add(Button::new("Reset")).clicked() {
                    self.playground = ParameterPlayground::new(INITIAL_F1, INITIAL_F2, INITIAL_ANGLE, false, ranges);
                }
            });

            if self.playground.resultant_visible() {
                let text = format!("{:.1} N", self.playground.resultant().magnitude);
                widgets::readout(ui, "Resultant F:", &text, palette.resultant.to_color32());
            }
        });
    }

    fn bridge_ui(&self, ui: &mut Ui, state: &LessonState<LessonData>) {
        frame().show(ui, |ui| {
            heading(ui, "Example 2: cable-stayed bridge");
            ui.label(
                "Assume a pair of stay cables each makes 30° with the vertical (60° between them) and each pulls with 3 × 10⁴ N. \
                 Find their resultant.",
            );
            ui.add_space(6.0);

            ui.horizontal_top(|ui| {
                canvas::show_diagram(ui, &content::bridge_diagram(&state.settings.palette), PAPER);

                ui.vertical(|ui| {
                    ui.label(RichText::new("Given: F₁ = F₂ = 3 × 10⁴ N, θ = 60°").strong());
                    ui.add_space(4.0);
                    ui.label(RichText::new("Geometric solution:").strong());
                    ui.label("• Since F₁ = F₂, the parallelogram is a rhombus.");
                    ui.label("• The diagonal of a rhombus bisects the angle, so the resultant points straight down.");
                    ui.add_space(4.0);

                    let resultant = content::bridge_resultant();
                    let working = format!(
                        "F = 2 × F₁ × cos(30°)\nF = 2 × 3×10⁴ × (√3 / 2)\nF = 3√3 × 10⁴\nF ≈ {:.1} × 10⁴ N",
                        resultant / 1.0e4
                    );
                    callout(ui, &working, Color32::from_rgb(30, 41, 59), Color32::from_rgb(226, 232, 240));
                    ui.label(format!("Answer: the resultant is about {:.1} × 10⁴ N, pointing straight down.", resultant / 1.0e4));
                });
            });
        });
    }
}

impl Section<LessonData> for RuleSection {
    fn title(&self) -> &str {
        "Parallelogram rule"
    }

    fn activation(&mut self, state: LessonState<LessonData>) -> Result<()> {
        if self.playground.ranges() != &state.settings.ranges {
            *self = Self::new(state.settings.ranges);
        }

        Ok(())
    }

    fn deactivation(&mut self, _: LessonState<LessonData>) -> Result<()> {
        Ok(())
    }

    fn input(&mut self, _: LessonState<LessonData>, _: InputEvent) -> Result<()> {
        Ok(())
    }

    fn ui(&mut self, state: LessonState<LessonData>, ui: &mut Ui) -> Result<Option<SectionCommand>> {
        widgets::section_header(
            ui,
            "3. The parallelogram rule",
            Some("To combine two concurrent forces, draw a parallelogram with the two force arrows as adjacent sides."),
        );

        self.playground_ui(ui, &state);
        ui.add_space(12.0);

        callout(ui, "Vectors add by the parallelogram rule; the resultant is the diagonal from the common start point.", PURPLE_FILL, PURPLE);
        ui.add_space(12.0);

        self.bridge_ui(ui, &state);

        Ok(None)
    }

    fn reset(&self) -> Box<dyn Section<LessonData>> {
        Box::new(Self::new(*self.playground.ranges()))
    }
}
