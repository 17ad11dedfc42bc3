use forcelab::anyhow::Result;
use forcelab::app;
use forcelab::error_continue;
use forcelab::log::info;
use forcelab::log::Level;
use forcelab::utils::settings::LessonSettings;
use forcelab_lesson::build_lesson;
use forcelab_lesson::SECTION_NAMES;

fn main() -> Result<()> {
    app::init_logging(Level::Info)?;

    let mut lesson = build_lesson(load_settings()?)?;
    info!("{} ready", lesson.title());

    for name in SECTION_NAMES {
        if let Err(err) = lesson.start(name) {
            error_continue!("Failed to open section {} ({})", name, err);
        }

        let output = lesson.frame();
        info!("Section {} painted with {} shapes", name, output.shapes.len());
    }

    Ok(())
}

#[cfg(not(web))]
fn load_settings() -> Result<LessonSettings> {
    use forcelab::utils::settings::Settings;

    match std::env::args().nth(1) {
        Some(path) => LessonSettings::from_settings(&Settings::load(&path)?),
        None => Ok(LessonSettings::default()),
    }
}

#[cfg(web)]
fn load_settings() -> Result<LessonSettings> {
    Ok(LessonSettings::default())
}
