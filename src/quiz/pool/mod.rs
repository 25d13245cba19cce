use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::dataset::{Category, Dataset, Item, Value};
use crate::quiz::analysis::{self, UniquenessFact};
use crate::quiz::question::{AnswerOption, Prompt, Question, QuestionKind};

#[cfg(test)]
mod tests;

/// Turns every uniqueness fact of the selected categories into questions,
/// drops duplicates (first occurrence wins) and shuffles the result.
pub fn build_pool(dataset: &Dataset, categories: &[String], rng: &mut impl Rng) -> Vec<Question> {
    let mut pool = Vec::new();
    let mut seen = HashSet::new();

    for name in categories {
        let category = match dataset.get(name) {
            Some(category) => category,
            None => continue,
        };
        for fact in analysis::analyze(category) {
            for question in synthesize(category, &fact, rng) {
                if seen.insert(signature(&question)) {
                    pool.push(question);
                }
            }
        }
    }

    pool.shuffle(rng);
    pool
}

type Signature = (QuestionKind, String, Vec<String>, Vec<String>);

fn signature(question: &Question) -> Signature {
    let (defining, values) = match &question.prompt {
        Prompt::AttributesToName { clauses } => (
            clauses.iter().map(|(property, _)| property.clone()).collect(),
            clauses.iter().map(|(_, value)| value.to_string()).collect(),
        ),
        Prompt::NameToAttribute { name, property } => (
            vec![name.clone(), property.clone()],
            vec![question.answer.clone()],
        ),
        Prompt::NameToImage { name } => (vec![name.clone()], vec![question.answer.clone()]),
        Prompt::ImageToName { .. } => (vec![question.answer.clone()], Vec::new()),
    };
    (question.kind, question.category.clone(), defining, values)
}

fn synthesize(category: &Category, fact: &UniquenessFact, rng: &mut impl Rng) -> Vec<Question> {
    match fact {
        UniquenessFact::Single {
            property,
            value,
            item,
        } => {
            let item = &category.items[*item];
            vec![
                attributes_to_name(
                    category,
                    QuestionKind::PropertyToName,
                    vec![(property.clone(), value.clone())],
                    &item.name,
                ),
                name_to_attribute(category, item, property, value),
            ]
        }
        UniquenessFact::Combo {
            properties,
            values,
            item,
        } => {
            let item = &category.items[*item];
            let clauses = properties
                .iter()
                .cloned()
                .zip(values.iter().cloned())
                .collect();
            vec![attributes_to_name(
                category,
                QuestionKind::PropertiesToName,
                clauses,
                &item.name,
            )]
        }
        UniquenessFact::Image { item } => image_questions(category, &category.items[*item], rng),
    }
}

fn typed_probability(category: &Category) -> f64 {
    if category.config.typed {
        category.config.typed_probability
    } else {
        0.0
    }
}

fn attributes_to_name(
    category: &Category,
    kind: QuestionKind,
    clauses: Vec<(String, Value)>,
    answer: &str,
) -> Question {
    let candidates = category
        .items
        .iter()
        .map(|item| AnswerOption {
            label: item.name.clone(),
            image: None,
        })
        .collect();
    Question {
        kind,
        category: category.name.clone(),
        prompt: Prompt::AttributesToName { clauses },
        answer: answer.to_owned(),
        answer_image: None,
        candidates,
        typed_probability: typed_probability(category),
    }
}

fn name_to_attribute(category: &Category, item: &Item, property: &str, value: &Value) -> Question {
    let mut candidates: Vec<AnswerOption> = Vec::new();
    for other in &category.items {
        if let Some(value) = other.get(property) {
            let option = AnswerOption {
                label: value.to_string(),
                image: None,
            };
            if !candidates.contains(&option) {
                candidates.push(option);
            }
        }
    }
    Question {
        kind: QuestionKind::NameToProperty,
        category: category.name.clone(),
        prompt: Prompt::NameToAttribute {
            name: item.name.clone(),
            property: property.to_owned(),
        },
        answer: value.to_string(),
        answer_image: None,
        candidates,
        // Attribute answers stay multiple choice
        typed_probability: 0.0,
    }
}

fn image_questions(category: &Category, item: &Item, rng: &mut impl Rng) -> Vec<Question> {
    let image = match item.images.choose(rng) {
        Some(image) => image.clone(),
        None => return Vec::new(),
    };

    // Every option must have a visual analog, so only pictured items compete
    let candidates: Vec<AnswerOption> = category
        .items
        .iter()
        .filter_map(|other| {
            other.images.choose(rng).map(|picture| AnswerOption {
                label: other.name.clone(),
                image: Some(picture.clone()),
            })
        })
        .collect();

    let name_to_image = Question {
        kind: QuestionKind::NameToImage,
        category: category.name.clone(),
        prompt: Prompt::NameToImage {
            name: item.name.clone(),
        },
        answer: item.name.clone(),
        answer_image: Some(image.clone()),
        candidates,
        // Pictures cannot be typed
        typed_probability: 0.0,
    };

    let mut image_to_name = name_to_image.clone();
    image_to_name.kind = QuestionKind::ImageToName;
    image_to_name.prompt = Prompt::ImageToName { image };
    image_to_name.typed_probability = typed_probability(category);

    vec![name_to_image, image_to_name]
}
