use forcelab::anyhow::Result;
use forcelab::app::LessonContext;
use forcelab::utils::settings::LessonSettings;
use sections::analysis::AnalysisSection;
use sections::concept::ConceptSection;
use sections::experiment::ExperimentSection;
use sections::rule::RuleSection;
use sections::summary::SummarySection;
use sections::LessonData;

pub mod content;
pub mod sections;
pub mod ui;

pub const LESSON_TITLE: &str = "Composition and resolution of forces";
pub const SECTION_NAMES: [&str; 5] = ["concept", "experiment", "rule", "analysis", "summary"];

/// Registers the five sections in teaching order and opens the first one.
pub fn build_lesson(settings: LessonSettings) -> Result<LessonContext<LessonData>> {
    let ranges = settings.ranges;

    let mut lesson = LessonContext::new(LESSON_TITLE, settings)
        .with_section("concept", Box::new(ConceptSection::new()?))?
        .with_section("experiment", Box::new(ExperimentSection::new()?))?
        .with_section("rule", Box::new(RuleSection::new(ranges)))?
        .with_section("analysis", Box::<AnalysisSection>::default())?
        .with_section("summary", Box::new(SummarySection::new()?))?;

    lesson.start(SECTION_NAMES[0])?;
    Ok(lesson)
}
