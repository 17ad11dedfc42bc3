use super::LessonData;
use crate::ui::widgets;
use forcelab::anyhow::Result;
use forcelab::app::LessonState;
use forcelab::egui::Button;
use forcelab::egui::Color32;
use forcelab::egui::Grid;
use forcelab::egui::RichText;
use forcelab::egui::TextEdit;
use forcelab::egui::Ui;
use forcelab::glam::Vec2;
use forcelab::input::InputEvent;
use forcelab::section::Section;
use forcelab::section::SectionCommand;
use forcelab::simulation::table::CellStatus;
use forcelab::simulation::table::ResultantTable;
use forcelab::ui::widgets::frame;
use forcelab::ui::widgets::heading;
use forcelab::ui::widgets::resultant_plot;
use forcelab::ui::widgets::toggle_button;
use forcelab::ui::widgets::WidgetState;
use forcelab::utils::color::Palette;
use forcelab::utils::color::Vec4Color;

const CURVE_SAMPLES: usize = 91;
const EMERALD: Color32 = Color32::from_rgb(5, 150, 105);
const EMERALD_FILL: Color32 = Color32::from_rgb(236, 253, 245);

#[derive(Default)]
pub struct AnalysisSection {
    table: ResultantTable,
    answers_button: WidgetState,
}

impl AnalysisSection {
    fn table_ui(&mut self, ui: &mut Ui, palette: &Palette) {
        Grid::new("resultant_table").striped(true).min_col_width(64.0).show(ui, |ui| {
            ui.label(RichText::new("Angle θ").strong());
            for angle in self.table.angles() {
                ui.label(RichText::new(format!("{}°", angle)).strong());
            }
            ui.end_row();

            ui.label(RichText::new("Resultant F (N)").strong());
            for column in 0..self.table.columns() {
                if self.table.answers_visible() {
                    let expected = self.table.expected(column).unwrap_or_default();
                    ui.label(RichText::new(format!("{}", expected)).strong().color(EMERALD));
                    continue;
                }

                let color = match self.table.check(column) {
                    CellStatus::Correct => palette.success.to_color32(),
                    CellStatus::Incorrect | CellStatus::Invalid => palette.failure.to_color32(),
                    CellStatus::Empty => Color32::from_rgb(30, 41, 59),
                };

                if let Some(input) = self.table.input_mut(column) {
                    ui.add(TextEdit::singleline(input).hint_text("?").desired_width(56.0).text_color(color));
                }
            }
            ui.end_row();
        });
    }

    fn summary_ui(&self, ui: &mut Ui) {
        let (min, max) = self.table.range();
        let force = self.table.force();

        widgets::card(
            ui,
            "Summary",
            &format!(
                "• At 0° (same direction) the resultant is largest: F max = F₁ + F₂ = {} N.\n\
                 • At 180° (opposite directions) it is smallest: F min = |F₁ - F₂| = {} N.\n\
                 • With fixed components, the resultant decreases as the angle grows.\n\
                 • Range of the resultant: |F₁ - F₂| ≤ F ≤ F₁ + F₂, here {} N ≤ F ≤ {} N for F₁ = F₂ = {} N.",
                max, min, min, max, force
            ),
            EMERALD_FILL,
            Color32::from_rgb(6, 95, 70),
        );
    }
}

impl Section<LessonData> for AnalysisSection {
    fn title(&self) -> &str {
        "Calculation and analysis"
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
        let palette = &state.settings.palette;
        let mut command = None;

        widgets::section_header(ui, "4. Calculation and analysis", None);

        frame().show(ui, |ui| {
            heading(ui, "How does the resultant depend on the angle?");
            ui.label(format!(
                "Example 3: two concurrent forces F₁ and F₂ both have {} N. Work out the resultant F for each angle and fill in the table.",
                self.table.force()
            ));
            ui.add_space(8.0);

            self.table_ui(ui, palette);

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if toggle_button(ui, self.table.answers_visible(), "Hide answers", "Show answers and summary", EMERALD, &mut self.answers_button).clicked() {
                    self.table.toggle_answers();
                }

                if ui.add(Button::new("Clear table")).clicked() {
                    command = Some(SectionCommand::ResetSection);
                }
            });

            if !self.table.answers_visible() {
                let text = format!("{} of {} correct", self.table.correct_count(), self.table.columns());
                ui.label(RichText::new(text).color(widgets::SLATE));
            }
        });

        if self.table.answers_visible() {
            ui.add_space(12.0);
            self.summary_ui(ui);
            ui.add_space(8.0);

            let markers = (0..self.table.columns())
                .filter_map(|column| Some(Vec2::new(*self.table.angles().get(column)?, self.table.expected(column)?)))
                .collect::<Vec<Vec2>>();
            resultant_plot(ui, "resultant_curve", &self.table.curve(CURVE_SAMPLES), &markers, palette);
        }

        Ok(command)
    }

    fn reset(&self) -> Box<dyn Section<LessonData>> {
        Box::new(Self { table: ResultantTable::new(self.table.force(), self.table.angles()), answers_button: WidgetState::default() })
    }
}
