use crate::quiz::OptionStatus;
use crate::quiz::QuestionKind;
use crate::quiz::Quiz;
use crate::utils::color::Palette;
use crate::utils::color::Vec4Color;
use egui::Button;
use egui::Color32;
use egui::Frame;
use egui::Margin;
use egui::ProgressBar;
use egui::Response;
use egui::RichText;
use egui::Rounding;
use egui::Slider;
use egui::Stroke;
use egui::Ui;
use egui_plot::Line;
use egui_plot::LineStyle;
use egui_plot::Plot;
use egui_plot::PlotPoint;
use egui_plot::PlotPoints;
use egui_plot::Points;
use glam::Vec2;
use std::ops::RangeInclusive;

const CORRECT_FILL: Color32 = Color32::from_rgb(220, 252, 231);
const WRONG_FILL: Color32 = Color32::from_rgb(254, 226, 226);

#[derive(Copy, Clone, Debug, Default)]
pub struct WidgetState {
    pub pressed: bool,
    pub hovered: bool,
}

pub trait WidgetStateTrait {
    fn get_state(&self) -> WidgetState;
}

impl WidgetStateTrait for Response {
    fn get_state(&self) -> WidgetState {
        WidgetState { pressed: self.is_pointer_button_down_on(), hovered: self.hovered() }
    }
}

pub fn frame() -> Frame {
    Frame::none()
        .inner_margin(Margin::symmetric(16.0, 12.0))
        .stroke(Stroke::new(1.0, Color32::from_rgb(226, 232, 240)))
        .fill(Color32::WHITE)
        .rounding(Rounding::same(8.0))
}

pub fn callout(ui: &mut Ui, text: &str, fill: Color32, color: Color32) -> Response {
    Frame::none()
        .inner_margin(Margin::same(10.0))
        .fill(fill)
        .rounding(Rounding::same(6.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(color));
        })
        .response
}

pub fn heading(ui: &mut Ui, text: &str) -> Response {
    ui.label(RichText::new(text).heading().strong().color(Color32::from_rgb(30, 41, 59)))
}

pub fn value_slider(ui: &mut Ui, label: &str, value: &mut f32, range: RangeInclusive<f32>, step: f64, suffix: &str) -> Response {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(Slider::new(value, range).step_by(step).suffix(suffix))
    })
    .inner
}

/// Button whose label flips with `active`; the tint follows the hover and press state of the previous frame.
pub fn toggle_button(ui: &mut Ui, active: bool, on_label: &str, off_label: &str, color: Color32, state: &mut WidgetState) -> Response {
    let tint = if state.pressed {
        color.gamma_multiply(0.8)
    } else if state.hovered {
        color.gamma_multiply(0.9)
    } else {
        color
    };

    let (label, fill, text) = if active { (on_label, tint.gamma_multiply(0.2), tint) } else { (off_label, tint, Color32::WHITE) };
    let response = ui.add(Button::new(RichText::new(label).strong().color(text)).fill(fill));
    *state = response.get_state();

    response
}

pub fn progress(ui: &mut Ui, fraction: f32, label: &str) -> Response {
    ui.add(ProgressBar::new(fraction.clamp(0.0, 1.0)).text(label))
}

/// Renders a quiz and applies clicks; returns whether an answer was recorded this frame.
pub fn quiz_card(ui: &mut Ui, quiz: &mut Quiz, palette: &Palette) -> bool {
    let mut answered = false;

    frame().show(ui, |ui| {
        ui.label(RichText::new(&quiz.question().text).strong().size(16.0));
        ui.add_space(6.0);

        let options = quiz.question().options.clone();
        let kind = quiz.question().kind;

        match kind {
            QuestionKind::TrueFalse => {
                ui.horizontal(|ui| {
                    for (index, option) in options.iter().enumerate() {
                        if option_button(ui, quiz, index, option).clicked() {
                            let answer = quiz.question().answer_for_option(index);
                            answered |= quiz.select(answer);
                        }
                    }
                });
            }
            QuestionKind::SingleChoice => {
                for (index, option) in options.iter().enumerate() {
                    let label = format!("{}. {}", option_letter(index), option);
                    if option_button(ui, quiz, index, &label).clicked() {
                        let answer = quiz.question().answer_for_option(index);
                        answered |= quiz.select(answer);
                    }
                }
            }
            QuestionKind::MultiChoice => {
                for (index, option) in options.iter().enumerate() {
                    let label = format!("{}. {}", option_letter(index), option);

                    if quiz.is_answered() {
                        option_button(ui, quiz, index, &label);
                    } else {
                        let mut ticked = quiz.draft().contains(&index);
                        if ui.checkbox(&mut ticked, label).changed() {
                            quiz.toggle_draft(index);
                        }
                    }
                }

                if !quiz.is_answered() && ui.add_enabled(!quiz.draft().is_empty(), Button::new("Submit")).clicked() {
                    answered |= quiz.submit_draft();
                }
            }
        }

        if let (Some(correct), Some(explanation)) = (quiz.is_correct(), quiz.explanation()) {
            ui.add_space(8.0);

            let (title, fill, color) = if correct {
                ("Correct!", CORRECT_FILL, palette.success.to_color32())
            } else {
                ("Not quite", WRONG_FILL, palette.failure.to_color32())
            };

            callout(ui, &format!("{}\n{}", title, explanation), fill, color);
        }
    });

    answered
}

fn option_button(ui: &mut Ui, quiz: &Quiz, index: usize, label: &str) -> Response {
    let fill = match quiz.option_status(index) {
        OptionStatus::Correct => CORRECT_FILL,
        OptionStatus::Wrong => WRONG_FILL,
        OptionStatus::Neutral => Color32::from_rgb(248, 250, 252),
    };

    let button = Button::new(label).fill(fill).min_size(egui::Vec2::new(ui.available_width().min(420.0), 28.0));
    ui.add_enabled(!quiz.is_answered() || quiz.option_status(index) != OptionStatus::Neutral, button)
}

fn option_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// Resultant magnitude against angle, with optional highlighted samples.
pub fn resultant_plot(ui: &mut Ui, id: &str, curve: &[Vec2], markers: &[Vec2], palette: &Palette) -> Response {
    let line = curve.iter().map(|point| PlotPoint::new(point.x, point.y)).collect::<Vec<PlotPoint>>();
    let samples = markers.iter().map(|point| PlotPoint::new(point.x, point.y)).collect::<Vec<PlotPoint>>();

    Plot::new(id)
        .height(180.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(0.0)
        .include_x(180.0)
        .include_y(0.0)
        .x_axis_label("θ (°)")
        .y_axis_label("F (N)")
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(PlotPoints::Owned(line)).color(palette.resultant.to_color32()).style(LineStyle::Solid));
            plot_ui.points(Points::new(PlotPoints::Owned(samples)).radius(4.0).color(palette.success.to_color32()));
        })
        .response
}
