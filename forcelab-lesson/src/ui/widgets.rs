use crate::sections::LessonData;
use forcelab::anyhow::Result;
use forcelab::egui::Color32;
use forcelab::egui::Frame;
use forcelab::egui::Margin;
use forcelab::egui::Response;
use forcelab::egui::RichText;
use forcelab::egui::Rounding;
use forcelab::egui::Stroke;
use forcelab::egui::Ui;
use forcelab::quiz::QuizBook;
use forcelab::ui::widgets;
use forcelab::utils::color::Palette;

pub const SLATE: Color32 = Color32::from_rgb(71, 85, 105);
pub const INDIGO_FILL: Color32 = Color32::from_rgb(238, 242, 255);
pub const INDIGO: Color32 = Color32::from_rgb(49, 46, 129);
pub const ORANGE_FILL: Color32 = Color32::from_rgb(255, 247, 237);
pub const ORANGE: Color32 = Color32::from_rgb(154, 52, 18);
pub const BLUE_FILL: Color32 = Color32::from_rgb(239, 246, 255);
pub const BLUE: Color32 = Color32::from_rgb(30, 64, 175);
pub const AMBER_FILL: Color32 = Color32::from_rgb(254, 243, 199);
pub const AMBER: Color32 = Color32::from_rgb(146, 64, 14);
pub const PURPLE_FILL: Color32 = Color32::from_rgb(243, 232, 255);
pub const PURPLE: Color32 = Color32::from_rgb(107, 33, 168);

pub fn section_header(ui: &mut Ui, title: &str, intro: Option<&str>) {
    ui.add_space(8.0);
    ui.label(RichText::new(title).size(26.0).strong().color(Color32::from_rgb(15, 23, 42)));

    if let Some(intro) = intro {
        ui.label(RichText::new(intro).color(SLATE));
    }

    ui.add_space(12.0);
}

pub fn card(ui: &mut Ui, title: &str, text: &str, fill: Color32, color: Color32) -> Response {
    Frame::none()
        .inner_margin(Margin::same(12.0))
        .stroke(Stroke::new(1.0, color.gamma_multiply(0.3)))
        .fill(fill)
        .rounding(Rounding::same(6.0))
        .show(ui, |ui| {
            ui.label(RichText::new(title).strong().color(color));
            ui.label(RichText::new(text).color(color));
        })
        .response
}

pub fn tags(ui: &mut Ui, tags: &[&str], fill: Color32, color: Color32) {
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            Frame::none().inner_margin(Margin::symmetric(8.0, 3.0)).fill(fill).rounding(Rounding::same(4.0)).show(ui, |ui| {
                ui.label(RichText::new(*tag).small().color(color));
            });
        }
    });
}

pub fn readout(ui: &mut Ui, label: &str, value: &str, color: Color32) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(SLATE));
        ui.label(RichText::new(value).monospace().strong().color(color));
    });
}

/// Shows one question of `book` and records a fresh answer in the lesson score.
pub fn question(ui: &mut Ui, book: &mut QuizBook, id: &str, data: &mut LessonData, palette: &Palette) -> Result<()> {
    let quiz = book.get_mut(id)?;

    if widgets::quiz_card(ui, quiz, palette) {
        data.record(quiz);
    }

    ui.add_space(8.0);
    Ok(())
}
