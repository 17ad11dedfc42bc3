use anyhow::bail;
use anyhow::Result;
use log::info;
use log::warn;
use rustc_hash::FxHashMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    TrueFalse,
    SingleChoice,
    MultiChoice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    Bool(bool),
    Index(usize),
    Indices(Vec<usize>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub kind: QuestionKind,
    pub options: Vec<String>,
    pub correct: Answer,
    pub explanation: String,
}

/// Highlight of a single option once the question is answered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OptionStatus {
    Correct,
    Wrong,
    Neutral,
}

/// One question with one-shot feedback: the first accepted answer is final.
#[derive(Clone, Debug)]
pub struct Quiz {
    question: Question,
    selection: Option<Answer>,
    draft: Vec<usize>,
}

#[derive(Clone, Debug, Default)]
pub struct QuizBook {
    quizzes: Vec<Quiz>,
    lookup: FxHashMap<String, usize>,
}

impl Answer {
    fn matches(&self, other: &Answer) -> bool {
        match (self, other) {
            (Answer::Bool(a), Answer::Bool(b)) => a == b,
            (Answer::Index(a), Answer::Index(b)) => a == b,
            (Answer::Indices(a), Answer::Indices(b)) => {
                let mut a = a.clone();
                let mut b = b.clone();
                a.sort_unstable();
                a.dedup();
                b.sort_unstable();
                b.dedup();

                a == b
            }
            _ => false,
        }
    }

    fn contains(&self, index: usize) -> bool {
        match self {
            Answer::Bool(value) => (index == 0) == *value,
            Answer::Index(value) => *value == index,
            Answer::Indices(values) => values.contains(&index),
        }
    }
}

impl Question {
    pub fn true_false(id: &str, text: &str, correct: bool, explanation: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            kind: QuestionKind::TrueFalse,
            options: vec!["True".to_string(), "False".to_string()],
            correct: Answer::Bool(correct),
            explanation: explanation.to_string(),
        }
    }

    pub fn single_choice(id: &str, text: &str, options: &[&str], correct: usize, explanation: &str) -> Result<Self> {
        if correct >= options.len() {
            bail!("Question {} has no option {}", id, correct);
        }

        Ok(Self {
            id: id.to_string(),
            text: text.to_string(),
            kind: QuestionKind::SingleChoice,
            options: options.iter().map(|option| option.to_string()).collect(),
            correct: Answer::Index(correct),
            explanation: explanation.to_string(),
        })
    }

    pub fn multi_choice(id: &str, text: &str, options: &[&str], correct: &[usize], explanation: &str) -> Result<Self> {
        if let Some(index) = correct.iter().find(|index| **index >= options.len()) {
            bail!("Question {} has no option {}", id, index);
        }

        Ok(Self {
            id: id.to_string(),
            text: text.to_string(),
            kind: QuestionKind::MultiChoice,
            options: options.iter().map(|option| option.to_string()).collect(),
            correct: Answer::Indices(correct.to_vec()),
            explanation: explanation.to_string(),
        })
    }

    /// Whether `answer` has the shape this question expects and refers to existing options.
    pub fn accepts(&self, answer: &Answer) -> bool {
        match (self.kind, answer) {
            (QuestionKind::TrueFalse, Answer::Bool(_)) => true,
            (QuestionKind::SingleChoice, Answer::Index(index)) => *index < self.options.len(),
            (QuestionKind::MultiChoice, Answer::Indices(indices)) => !indices.is_empty() && indices.iter().all(|index| *index < self.options.len()),
            _ => false,
        }
    }

    /// Maps a clicked option onto an answer; for true/false the first option is `true`.
    pub fn answer_for_option(&self, index: usize) -> Answer {
        match self.kind {
            QuestionKind::TrueFalse => Answer::Bool(index == 0),
            QuestionKind::SingleChoice => Answer::Index(index),
            QuestionKind::MultiChoice => Answer::Indices(vec![index]),
        }
    }
}

impl Quiz {
    pub fn new(question: Question) -> Self {
        Self { question, selection: None, draft: Vec::new() }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn id(&self) -> &str {
        &self.question.id
    }

    /// Records the answer if the quiz is still open; returns whether the state changed.
    pub fn select(&mut self, answer: Answer) -> bool {
        if self.selection.is_some() {
            return false;
        }

        if !self.question.accepts(&answer) {
            warn!("Rejected answer {:?} for question {}", answer, self.question.id);
            return false;
        }

        let correct = answer.matches(&self.question.correct);
        info!("Question {} answered ({})", self.question.id, if correct { "correct" } else { "wrong" });

        self.selection = Some(answer);
        self.draft.clear();
        true
    }

    pub fn is_answered(&self) -> bool {
        self.selection.is_some()
    }

    pub fn is_correct(&self) -> Option<bool> {
        self.selection.as_ref().map(|selection| selection.matches(&self.question.correct))
    }

    pub fn selection(&self) -> Option<&Answer> {
        self.selection.as_ref()
    }

    pub fn explanation(&self) -> Option<&str> {
        self.selection.as_ref().map(|_| self.question.explanation.as_str())
    }

    pub fn option_status(&self, index: usize) -> OptionStatus {
        let Some(selection) = &self.selection else {
            return OptionStatus::Neutral;
        };

        if self.question.correct.contains(index) {
            OptionStatus::Correct
        } else if selection.contains(index) {
            OptionStatus::Wrong
        } else {
            OptionStatus::Neutral
        }
    }

    /// Ticks or unticks an option of a multi-choice question before it is submitted.
    pub fn toggle_draft(&mut self, index: usize) -> bool {
        if self.is_answered() || self.question.kind != QuestionKind::MultiChoice || index >= self.question.options.len() {
            return false;
        }

        match self.draft.iter().position(|value| *value == index) {
            Some(position) => {
                self.draft.remove(position);
            }
            None => self.draft.push(index),
        }

        true
    }

    pub fn draft(&self) -> &[usize] {
        &self.draft
    }

    pub fn submit_draft(&mut self) -> bool {
        self.select(Answer::Indices(self.draft.clone()))
    }

    /// Reopens the question, dropping the answer and any ticked options. Only a rebuilt `QuizBook` does this.
    pub(crate) fn reset(&mut self) {
        self.selection = None;
        self.draft.clear();
    }
}

impl QuizBook {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        let mut book = Self::default();
        for question in questions {
            book.add(question)?;
        }

        Ok(book)
    }

    pub fn add(&mut self, question: Question) -> Result<()> {
        if self.lookup.contains_key(&question.id) {
            bail!("Question {} already registered", question.id);
        }

        self.lookup.insert(question.id.clone(), self.quizzes.len());
        self.quizzes.push(Quiz::new(question));

        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&Quiz> {
        match self.lookup.get(id) {
            Some(index) => Ok(&self.quizzes[*index]),
            None => bail!("Question {} not found", id),
        }
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut Quiz> {
        match self.lookup.get(id) {
            Some(index) => Ok(&mut self.quizzes[*index]),
            None => bail!("Question {} not found", id),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quiz> {
        self.quizzes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Quiz> {
        self.quizzes.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    pub fn answered_count(&self) -> usize {
        self.quizzes.iter().filter(|quiz| quiz.is_answered()).count()
    }

    pub fn correct_count(&self) -> usize {
        self.quizzes.iter().filter(|quiz| quiz.is_correct() == Some(true)).count()
    }

    pub fn reset(&mut self) {
        self.quizzes.iter_mut().for_each(|quiz| quiz.reset());
    }
}
