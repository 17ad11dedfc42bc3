use crate::app::LessonState;
use crate::input::InputEvent;
use anyhow::Result;
use egui::Ui;

#[derive(Clone, Debug, PartialEq)]
pub enum SectionCommand {
    Next,
    Previous,
    JumpTo { index: usize },
    ChangeSection { name: String },
    ResetSection,
}

/// One page of the lesson. Its state lives only while it is the active section.
pub trait Section<G> {
    fn title(&self) -> &str;

    fn activation(&mut self, state: LessonState<G>) -> Result<()>;
    fn deactivation(&mut self, state: LessonState<G>) -> Result<()>;

    fn input(&mut self, state: LessonState<G>, event: InputEvent) -> Result<()>;
    fn ui(&mut self, state: LessonState<G>, ui: &mut Ui) -> Result<Option<SectionCommand>>;

    fn reset(&self) -> Box<dyn Section<G>>;
}
