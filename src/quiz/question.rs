use rand::Rng;

use crate::dataset::Value;
use crate::quiz::distractor;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum QuestionKind {
    PropertyToName,
    NameToProperty,
    PropertiesToName,
    NameToImage,
    ImageToName,
}

/// Prompt data for the view layer to render; the core never formats
/// presentation strings.
#[derive(Clone, Debug, PartialEq)]
pub enum Prompt {
    AttributesToName { clauses: Vec<(String, Value)> },
    NameToAttribute { name: String, property: String },
    NameToImage { name: String },
    ImageToName { image: String },
}

#[derive(Clone, Debug)]
pub struct AnswerOption {
    pub label: String,
    pub image: Option<String>,
}

impl PartialEq for AnswerOption {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}
impl Eq for AnswerOption {}

#[derive(Clone, Debug, PartialEq)]
pub enum AnswerMode {
    MultipleChoice(Vec<AnswerOption>),
    FreeText,
}

#[derive(Clone, Debug)]
pub struct Question {
    pub kind: QuestionKind,
    pub category: String,
    pub prompt: Prompt,
    pub answer: String,
    pub answer_image: Option<String>,
    pub candidates: Vec<AnswerOption>,
    /// Chance this question is posed as free text. Zero for questions whose
    /// answer is not a name.
    pub typed_probability: f64,
}

impl Question {
    pub fn correct_option(&self) -> AnswerOption {
        AnswerOption {
            label: self.answer.clone(),
            image: self.answer_image.clone(),
        }
    }

    pub fn present(&self, option_count: usize, rng: &mut impl Rng) -> AnswerMode {
        if self.typed_probability > 0.0 && rng.gen_bool(self.typed_probability) {
            AnswerMode::FreeText
        } else {
            let options =
                distractor::pick(&self.correct_option(), &self.candidates, option_count, rng);
            AnswerMode::MultipleChoice(options)
        }
    }
}
