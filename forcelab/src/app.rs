use crate::error_return;
use crate::input::InputEvent;
use crate::input::Key;
use crate::navigation::SectionNavigator;
use crate::section::Section;
use crate::section::SectionCommand;
use crate::ui::context::UiContext;
use crate::ui::widgets;
use crate::utils::settings::LessonSettings;
use crate::utils::storage::Storage;
use anyhow::Result;
use egui::Align;
use egui::Button;
use egui::CentralPanel;
use egui::FullOutput;
use egui::Layout;
use egui::RichText;
use egui::ScrollArea;
use egui::SidePanel;
use egui::TopBottomPanel;
use egui::Visuals;
use glam::Vec2;
use log::error;
use log::info;
use log::Level;

pub struct LessonContext<G>
where
    G: Default + 'static,
{
    pub ui: UiContext,
    pub sections: Storage<Box<dyn Section<G>>>,
    pub navigator: SectionNavigator,
    pub settings: LessonSettings,
    pub global: G,

    title: String,
    active_section: Option<usize>,
}

pub struct LessonState<'a, G> {
    pub settings: &'a LessonSettings,
    pub navigator: &'a SectionNavigator,
    pub global: &'a mut G,
}

macro_rules! state {
    ($self:ident) => {
        LessonState { settings: &$self.settings, navigator: &$self.navigator, global: &mut $self.global }
    };
}

impl<G> LessonContext<G>
where
    G: Default + 'static,
{
    pub fn new(title: &str, settings: LessonSettings) -> Self {
        let ui = UiContext::new(Vec2::new(1280.0, 720.0));
        ui.inner.set_visuals(Visuals::light());

        Self {
            ui,
            sections: Default::default(),
            navigator: Default::default(),
            settings,
            global: Default::default(),

            title: title.to_string(),
            active_section: None,
        }
    }

    pub fn with_section(mut self, name: &str, section: Box<dyn Section<G>>) -> Result<Self> {
        self.add_section(name, section)?;
        Ok(self)
    }

    pub fn add_section(&mut self, name: &str, section: Box<dyn Section<G>>) -> Result<usize> {
        let id = self.sections.store_with_name(name, section)?;
        self.navigator.set_count(self.sections.len());

        Ok(id)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Activates the section registered under `name`.
    pub fn start(&mut self, name: &str) -> Result<()> {
        let id = self.sections.get_id(name)?;
        self.navigator.jump_to(id);
        self.sync_active_section();

        Ok(())
    }

    pub fn active_section(&self) -> Option<usize> {
        self.active_section
    }

    pub fn active_section_name(&self) -> Option<&str> {
        self.active_section.and_then(|id| self.sections.get_name(id).ok())
    }

    /// Forwards the event to egui and then to the active section.
    pub fn input(&mut self, event: InputEvent) {
        self.ui.collect_event(&event);

        if let InputEvent::KeyPress { key, repeat: false } = event {
            if !self.ui.inner.wants_keyboard_input() {
                let command = match key {
                    Key::ArrowRight => Some(SectionCommand::Next),
                    Key::ArrowLeft => Some(SectionCommand::Previous),
                    _ => None,
                };

                if let Some(command) = command {
                    self.apply_command(command);
                    return;
                }
            }
        }

        self.sync_active_section();

        let Some(id) = self.active_section else {
            return;
        };

        if let Err(err) = self.sections.get_mut(id).and_then(|section| section.input(state!(self), event)) {
            error!("Failed to process input event {:?} ({})", event, err);
        }
    }

    /// Runs one egui pass over the whole lesson and applies whatever the learner asked for.
    pub fn frame(&mut self) -> FullOutput {
        self.sync_active_section();

        let context = self.ui.inner.clone();
        let input = self.ui.get_input();
        let mut command = None;

        let output = context.run(input, |context| {
            command = self.build_ui(context);
        });

        if let Some(command) = command {
            self.apply_command(command);
        }

        output
    }

    pub fn apply_command(&mut self, command: SectionCommand) {
        match command {
            SectionCommand::Next => {
                self.navigator.next();
            }
            SectionCommand::Previous => {
                self.navigator.prev();
            }
            SectionCommand::JumpTo { index } => {
                self.navigator.jump_to(index);
            }
            SectionCommand::ChangeSection { name } => match self.sections.get_id(&name) {
                Ok(id) => {
                    self.navigator.jump_to(id);
                }
                Err(err) => error!("Failed to change section ({})", err),
            },
            SectionCommand::ResetSection => {
                if let Some(id) = self.active_section.take() {
                    self.retire_section(id);
                }
            }
        }

        self.sync_active_section();
    }

    fn sync_active_section(&mut self) {
        let target = self.navigator.index();
        if self.sections.is_empty() || self.active_section == Some(target) {
            return;
        }

        if let Some(id) = self.active_section.take() {
            self.retire_section(id);
        }

        if let Err(err) = self.sections.get_mut(target).and_then(|section| section.activation(state!(self))) {
            error!("Failed to activate section {} ({})", target, err);
        }

        info!("Section {} activated", self.sections.get_name(target).unwrap_or("unknown"));
        self.active_section = Some(target);
    }

    // Leaving a section throws its state away, the next visit starts from a fresh instance
    fn retire_section(&mut self, id: usize) {
        if let Err(err) = self.sections.get_mut(id).and_then(|section| section.deactivation(state!(self))) {
            error!("Failed to deactivate section {} ({})", id, err);
        }

        let fresh = match self.sections.get(id) {
            Ok(section) => section.reset(),
            Err(err) => error_return!("Failed to reset section {} ({})", id, err),
        };

        if let Err(err) = self.sections.replace(id, fresh) {
            error!("Failed to replace section {} ({})", id, err);
        }
    }

    fn build_ui(&mut self, context: &egui::Context) -> Option<SectionCommand> {
        let mut command = None;
        let current = self.navigator.index();
        let count = self.navigator.count();

        TopBottomPanel::top("lesson_header").show(context, |ui| {
            ui.add_space(6.0);
            ui.label(RichText::new(&self.title).heading().strong());
            widgets::progress(ui, self.navigator.progress(), &format!("{} / {}", current + 1, count));
            ui.add_space(6.0);
        });

        SidePanel::left("lesson_sections").resizable(false).default_width(200.0).show(context, |ui| {
            ui.add_space(8.0);
            for (index, section) in self.sections.iter_enumerate() {
                if ui.selectable_label(index == current, format!("{}. {}", index + 1, section.title())).clicked() {
                    command = Some(SectionCommand::JumpTo { index });
                }
            }
        });

        TopBottomPanel::bottom("lesson_footer").show(context, |ui| {
            ui.horizontal(|ui| {
                if ui.add_enabled(!self.navigator.is_first(), Button::new("Previous")).clicked() {
                    command = Some(SectionCommand::Previous);
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.add_enabled(!self.navigator.is_last(), Button::new("Next")).clicked() {
                        command = Some(SectionCommand::Next);
                    }
                });
            });
        });

        CentralPanel::default().show(context, |ui| {
            ScrollArea::vertical().drag_to_scroll(false).auto_shrink([false, false]).show(ui, |ui| {
                let Some(id) = self.active_section else {
                    return;
                };

                match self.sections.get_mut(id).and_then(|section| section.ui(state!(self), ui)) {
                    Ok(Some(section_command)) => command = Some(section_command),
                    Ok(None) => {}
                    Err(err) => error!("Failed to process UI of section {} ({})", id, err),
                }
            });
        });

        command
    }
}

#[cfg(not(web))]
pub fn init_logging(level: Level) -> Result<()> {
    simple_logger::init_with_level(level)?;
    Ok(())
}

#[cfg(web)]
pub fn init_logging(level: Level) -> Result<()> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    console_log::init_with_level(level).map_err(|_| anyhow::anyhow!("Logger initialization failed"))?;

    Ok(())
}
