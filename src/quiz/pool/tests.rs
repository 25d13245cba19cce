use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::dataset::CategoryConfig;
use crate::quiz::question::AnswerMode;

fn item(name: &str, attributes: &[(&str, &str)], images: &[&str]) -> Item {
    Item {
        name: name.to_owned(),
        attributes: attributes
            .iter()
            .map(|(key, value)| (key.to_string(), Value::Text(value.to_string())))
            .collect(),
        images: images.iter().map(|image| image.to_string()).collect(),
    }
}

fn dataset(config: CategoryConfig) -> Dataset {
    let mammals = Category::new(
        "mammals".to_owned(),
        vec![
            item(
                "Zebra",
                &[("covering", "striped fur"), ("diet", "herbivore"), ("habitat", "savanna")],
                &["zebra.jpg"],
            ),
            item(
                "Lion",
                &[("covering", "fur"), ("diet", "carnivore"), ("habitat", "savanna")],
                &["lion.jpg"],
            ),
            item(
                "Dolphin",
                &[("covering", "skin"), ("diet", "carnivore"), ("habitat", "ocean")],
                &[],
            ),
        ],
        config,
    );
    let birds = Category::new(
        "birds".to_owned(),
        vec![
            item("Eagle", &[("can_fly", "yes"), ("diet", "carnivore")], &[]),
            item("Penguin", &[("can_fly", "no"), ("diet", "fish")], &[]),
        ],
        CategoryConfig::default(),
    );
    Dataset {
        categories: vec![mammals, birds],
    }
}

fn selection() -> Vec<String> {
    vec!["mammals".to_owned(), "birds".to_owned()]
}

fn signatures(pool: &[Question]) -> Vec<(String, String, String)> {
    let mut signatures: Vec<(String, String, String)> = pool
        .iter()
        .map(|question| {
            (
                format!("{:?}", question.kind),
                question.category.clone(),
                question.answer.clone(),
            )
        })
        .collect();
    signatures.sort();
    signatures
}

#[test]
fn rebuilt_pool_has_identical_signatures() {
    let dataset = dataset(CategoryConfig::default());
    let first = build_pool(&dataset, &selection(), &mut StdRng::seed_from_u64(1));
    let second = build_pool(&dataset, &selection(), &mut StdRng::seed_from_u64(2));
    assert_eq!(first.len(), second.len());
    assert_eq!(signatures(&first), signatures(&second));
}

#[test]
fn repeated_category_selection_adds_nothing() {
    let dataset = dataset(CategoryConfig::default());
    let once = build_pool(
        &dataset,
        &["mammals".to_owned()],
        &mut StdRng::seed_from_u64(1),
    );
    let twice = build_pool(
        &dataset,
        &["mammals".to_owned(), "mammals".to_owned()],
        &mut StdRng::seed_from_u64(1),
    );
    assert_eq!(once.len(), twice.len());
    assert_eq!(signatures(&once), signatures(&twice));
}

#[test]
fn unknown_categories_are_skipped() {
    let dataset = dataset(CategoryConfig::default());
    let pool = build_pool(
        &dataset,
        &["reptiles".to_owned()],
        &mut StdRng::seed_from_u64(1),
    );
    assert!(pool.is_empty());
}

#[test]
fn presented_options_contain_the_answer_once() {
    let dataset = dataset(CategoryConfig::default());
    let mut rng = StdRng::seed_from_u64(5);
    let pool = build_pool(&dataset, &selection(), &mut rng);
    assert!(!pool.is_empty());
    for question in &pool {
        match question.present(4, &mut rng) {
            AnswerMode::MultipleChoice(options) => {
                assert!(options.len() >= 2, "no real decoy for {:?}", question.prompt);
                assert!(options.len() <= 4);
                let hits = options
                    .iter()
                    .filter(|option| option.label == question.answer)
                    .count();
                assert_eq!(hits, 1);
            }
            AnswerMode::FreeText => panic!("untyped categories cannot go free text"),
        }
    }
}

#[test]
fn typed_probability_applies_to_name_answers_only() {
    let config = CategoryConfig {
        typed: true,
        typed_probability: 1.0,
    };
    let dataset = dataset(config);
    let mut rng = StdRng::seed_from_u64(5);
    let pool = build_pool(&dataset, &["mammals".to_owned()], &mut rng);
    for question in &pool {
        let mode = question.present(4, &mut rng);
        match question.kind {
            QuestionKind::PropertyToName
            | QuestionKind::PropertiesToName
            | QuestionKind::ImageToName => assert_eq!(mode, AnswerMode::FreeText),
            QuestionKind::NameToProperty | QuestionKind::NameToImage => {
                assert_ne!(mode, AnswerMode::FreeText)
            }
        }
    }
}

#[test]
fn image_questions_only_offer_pictured_items() {
    let dataset = dataset(CategoryConfig::default());
    let pool = build_pool(
        &dataset,
        &["mammals".to_owned()],
        &mut StdRng::seed_from_u64(9),
    );
    let image_questions: Vec<&Question> = pool
        .iter()
        .filter(|question| {
            matches!(
                question.kind,
                QuestionKind::NameToImage | QuestionKind::ImageToName
            )
        })
        .collect();
    // Zebra and Lion are pictured, Dolphin is not
    assert_eq!(image_questions.len(), 4);
    for question in image_questions {
        for option in &question.candidates {
            assert!(option.image.is_some());
            assert_ne!(option.label, "Dolphin");
        }
    }
}

#[test]
fn name_answer_candidates_cover_the_category() {
    let dataset = dataset(CategoryConfig::default());
    let pool = build_pool(
        &dataset,
        &["mammals".to_owned()],
        &mut StdRng::seed_from_u64(11),
    );
    let question = pool
        .iter()
        .find(|question| question.kind == QuestionKind::PropertyToName)
        .expect("no single-property question generated");
    let labels: Vec<&str> = question
        .candidates
        .iter()
        .map(|option| option.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Zebra", "Lion", "Dolphin"]);
}
