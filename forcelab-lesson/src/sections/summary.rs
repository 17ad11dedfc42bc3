use super::LessonData;
use crate::content;
use crate::ui::widgets;
use crate::ui::widgets::AMBER;
use crate::ui::widgets::AMBER_FILL;
use crate::ui::widgets::PURPLE;
use crate::ui::widgets::PURPLE_FILL;
use crate::ui::widgets::SLATE;
use forcelab::anyhow::Result;
use forcelab::app::LessonState;
use forcelab::egui::Button;
use forcelab::egui::Color32;
use forcelab::egui::RichText;
use forcelab::egui::Ui;
use forcelab::input::InputEvent;
use forcelab::quiz::QuizBook;
use forcelab::section::Section;
use forcelab::section::SectionCommand;
use forcelab::simulation::triangle::TriangleRule;
use forcelab::simulation::triangle::TRIANGLE_MAX_ANGLE;
use forcelab::ui::canvas;
use forcelab::ui::widgets::callout;
use forcelab::ui::widgets::frame;
use forcelab::ui::widgets::heading;
use forcelab::ui::widgets::value_slider;

const SLATE_FILL: Color32 = Color32::from_rgb(241, 245, 249);

/// Total number of questions spread over the lesson.
pub const LESSON_QUESTIONS: usize = 6;

pub struct SummarySection {
    triangle: TriangleRule,
    questions: QuizBook,
}

impl SummarySection {
    pub fn new() -> Result<Self> {
        Ok(Self { triangle: TriangleRule::default(), questions: content::summary_questions()? })
    }

    fn quantities_ui(&self, ui: &mut Ui) {
        ui.columns(2, |columns| {
            frame().show(&mut columns[0], |ui| {
                ui.label(RichText::new("Vector").size(18.0).strong().color(PURPLE));
                ui.label("Has magnitude and direction, and adds by the parallelogram rule.");
                widgets::tags(ui, &["Force", "Displacement", "Velocity", "Acceleration"], PURPLE_FILL, PURPLE);
            });

            frame().show(&mut columns[1], |ui| {
                ui.label(RichText::new("Scalar").size(18.0).strong().color(SLATE));
                ui.label("Has magnitude only, and adds by ordinary arithmetic.");
                widgets::tags(ui, &["Mass", "Time", "Distance", "Work"], SLATE_FILL, SLATE);
            });
        });
    }

    fn triangle_ui(&mut self, ui: &mut Ui, state: &LessonState<LessonData>) {
        frame().show(ui, |ui| {
            heading(ui, "Triangle rule");
            ui.label("Place the force arrows tail to head. The resultant runs from the tail of the first force to the head of the second.");
            callout(
                ui,
                "Key idea: tail to head, from start to end. It is a shortcut for the parallelogram rule and the same in essence.",
                AMBER_FILL,
                AMBER,
            );
            ui.add_space(6.0);

            let mut angle = self.triangle.angle();
            if value_slider(ui, "Change angle", &mut angle, 0.0..=TRIANGLE_MAX_ANGLE, 1.0, "°").changed() {
                self.triangle.set_angle(angle);
            }

            canvas::show_diagram(ui, &self.triangle.diagram(&state.settings.palette), Color32::WHITE);
        });
    }
}

impl Section<LessonData> for SummarySection {
    fn title(&self) -> &str {
        "Summary"
    }

    fn activation(&mut self, _: LessonState<LessonData>) -> Result<()> {
        Ok(())
    }

    fn deactivation(&mut self, _: LessonState<LessonData>) -> Result<()> {
        Ok(())
    }

    fn input(&mut self, _: LessonState<LessonData>, _: InputEvent) -> Result<()> {
        Ok(())
    }

    fn ui(&mut self, state: LessonState<LessonData>, ui: &mut Ui) -> Result<Option<SectionCommand>> {
        let mut command = None;

        widgets::section_header(ui, "5. Summary: vectors and scalars", None);
        self.quantities_ui(ui);

        ui.add_space(12.0);
        heading(ui, "Practice");
        widgets::question(ui, &mut self.questions, "summary-1", state.global, &state.settings.palette)?;

        self.triangle_ui(ui, &state);
        ui.add_space(8.0);

        widgets::question(ui, &mut self.questions, "summary-2", state.global, &state.settings.palette)?;

        ui.add_space(12.0);
        let score = format!("Questions answered: {} of {}, correct: {}", state.global.answered_count(), LESSON_QUESTIONS, state.global.correct_count());
        ui.label(RichText::new(score).strong());

        if ui.add(Button::new("Back to the start")).clicked() {
            command = Some(SectionCommand::JumpTo { index: 0 });
        }

        Ok(command)
    }

    fn reset(&self) -> Box<dyn Section<LessonData>> {
        let mut questions = self.questions.clone();
        questions.reset();

        Box::new(Self { triangle: TriangleRule::default(), questions })
    }
}
