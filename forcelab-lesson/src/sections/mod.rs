use forcelab::log::info;
use forcelab::quiz::Quiz;
use forcelab::rustc_hash::FxHashMap;

pub mod analysis;
pub mod concept;
pub mod experiment;
pub mod rule;
pub mod summary;

/// State shared by all sections for the whole run; answers given anywhere in the lesson end up here.
#[derive(Default)]
pub struct LessonData {
    results: FxHashMap<String, bool>,
}

impl LessonData {
    pub fn record(&mut self, quiz: &Quiz) {
        if let Some(correct) = quiz.is_correct() {
            info!("Question {} answered, correct: {}", quiz.id(), correct);
            self.results.insert(quiz.id().to_string(), correct);
        }
    }

    pub fn result(&self, id: &str) -> Option<bool> {
        self.results.get(id).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.results.len()
    }

    pub fn correct_count(&self) -> usize {
        self.results.values().filter(|correct| **correct).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forcelab::quiz::Answer;
    use forcelab::quiz::Question;

    #[test]
    fn latest_answer_per_question_is_kept() {
        let mut data = LessonData::default();
        let mut quiz = Quiz::new(Question::true_false("tf-2", "?", true, ""));

        data.record(&quiz);
        assert_eq!(data.answered_count(), 0);

        quiz.select(Answer::Bool(false));
        data.record(&quiz);
        assert_eq!(data.result("tf-2"), Some(false));

        let mut quiz = Quiz::new(Question::true_false("tf-2", "?", true, ""));
        quiz.select(Answer::Bool(true));
        data.record(&quiz);

        assert_eq!(data.answered_count(), 1);
        assert_eq!(data.correct_count(), 1);
    }
}
