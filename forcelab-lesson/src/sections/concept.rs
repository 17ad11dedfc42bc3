use super::LessonData;
use crate::content;
use crate::ui::widgets;
use crate::ui::widgets::BLUE;
use crate::ui::widgets::BLUE_FILL;
use crate::ui::widgets::ORANGE;
use crate::ui::widgets::ORANGE_FILL;
use forcelab::anyhow::Result;
use forcelab::app::LessonState;
use forcelab::egui::Color32;
use forcelab::egui::RichText;
use forcelab::egui::Ui;
use forcelab::input::InputEvent;
use forcelab::quiz::QuizBook;
use forcelab::section::Section;
use forcelab::section::SectionCommand;
use forcelab::simulation::bucket::BucketMode;
use forcelab::simulation::bucket::BucketScenario;
use forcelab::simulation::bucket::BUCKET_ANGLE_STEP;
use forcelab::simulation::bucket::BUCKET_MAX_ANGLE;
use forcelab::simulation::bucket::BUCKET_MIN_ANGLE;
use forcelab::simulation::bucket::BUCKET_WEIGHT;
use forcelab::ui::canvas;
use forcelab::ui::widgets::callout;
use forcelab::ui::widgets::frame;
use forcelab::ui::widgets::heading;
use forcelab::ui::widgets::value_slider;
use forcelab::utils::color::Vec4Color;

const SKY: Color32 = Color32::from_rgb(240, 249, 255);

pub struct ConceptSection {
    bucket: BucketScenario,
    questions: QuizBook,
}

impl ConceptSection {
    pub fn new() -> Result<Self> {
        Ok(Self { bucket: BucketScenario::new(), questions: content::concept_questions()? })
    }

    fn bucket_ui(&mut self, ui: &mut Ui, state: &LessonState<LessonData>) {
        let palette = &state.settings.palette;

        frame().show(ui, |ui| {
            heading(ui, "Everyday example: carrying a bucket");

            ui.horizontal(|ui| {
                if ui.selectable_label(self.bucket.mode() == BucketMode::Single, "One person lifts").clicked() {
                    self.bucket.set_mode(BucketMode::Single);
                }
                if ui.selectable_label(self.bucket.mode() == BucketMode::Dual, "Two people lift").clicked() {
                    self.bucket.set_mode(BucketMode::Dual);
                }
            });

            ui.add_space(6.0);
            canvas::show_diagram(ui, &self.bucket.diagram(palette), SKY);

            widgets::readout(ui, "Bucket weight G:", &format!("{} N", BUCKET_WEIGHT), palette.weight.to_color32());
            let label = match self.bucket.mode() {
                BucketMode::Single => "Pull F:",
                BucketMode::Dual => "Components F₁, F₂:",
            };
            widgets::readout(ui, label, &format!("{} N", self.bucket.displayed_force()), palette.failure.to_color32());

            if self.bucket.mode() == BucketMode::Dual {
                let mut angle = self.bucket.angle();
                if value_slider(ui, "Angle between the arms θ", &mut angle, BUCKET_MIN_ANGLE..=BUCKET_MAX_ANGLE, BUCKET_ANGLE_STEP as f64, "°").changed() {
                    self.bucket.set_angle(angle);
                }
                ui.label(RichText::new("Move the slider and watch how the component forces change.").small().color(widgets::SLATE));
            }

            ui.add_space(6.0);
            let thought = match self.bucket.mode() {
                BucketMode::Single => "Think: when one person lifts the bucket alone, the pull F equals the weight G.",
                BucketMode::Dual => "Think: when two people share the bucket, their combined pull has to equal the weight to keep it balanced.",
            };
            ui.label(thought);

            if self.bucket.mode() == BucketMode::Dual {
                if self.bucket.is_strained() {
                    let text = "Careful: the wider the angle, the larger each component. At large angles each person pulls much more than the bucket weighs and the rope may snap!";
                    callout(ui, text, widgets::AMBER_FILL, widgets::AMBER);
                } else {
                    callout(ui, "The smaller the angle, the smaller each component. At 0° each person carries half of the weight.", BLUE_FILL, BLUE);
                }
            }
        });
    }
}

impl Section<LessonData> for ConceptSection {
    fn title(&self) -> &str {
        "Resultant and components"
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
        widgets::section_header(
            ui,
            "1. Resultant and component forces",
            Some("Concurrent forces, and replacing several forces by a single one with the same effect."),
        );

        self.bucket_ui(ui, &state);
        ui.add_space(12.0);

        frame().show(ui, |ui| {
            heading(ui, "Key ideas");
            ui.columns(2, |columns| {
                widgets::card(
                    &mut columns[0],
                    "Concurrent forces",
                    "Forces that act on the same point of a body, or whose lines of action meet in one point.",
                    ORANGE_FILL,
                    ORANGE,
                );
                widgets::card(
                    &mut columns[1],
                    "Equivalent substitution",
                    "If one force has the same effect as several forces together, it is their resultant and they are its components.",
                    BLUE_FILL,
                    BLUE,
                );
            });
        });

        ui.add_space(12.0);
        heading(ui, "Common mistakes");
        widgets::question(ui, &mut self.questions, "tf-1", state.global, &state.settings.palette)?;
        widgets::question(ui, &mut self.questions, "tf-2", state.global, &state.settings.palette)?;

        Ok(None)
    }

    fn reset(&self) -> Box<dyn Section<LessonData>> {
        let mut questions = self.questions.clone();
        questions.reset();

        Box::new(Self { bucket: BucketScenario::new(), questions })
    }
}
