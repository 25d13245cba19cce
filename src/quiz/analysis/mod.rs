use itertools::Itertools;
use std::collections::HashMap;

use crate::dataset::{Category, Value};


// Wider combinations get expensive to search and make unguessable questions.
pub const MAX_COMBO_PROPERTIES: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub enum UniquenessFact {
    Single {
        property: String,
        value: Value,
        item: usize,
    },
    Combo {
        properties: Vec<String>,
        values: Vec<Value>,
        item: usize,
    },
    Image {
        item: usize,
    },
}

pub type ValueIndex = HashMap<String, HashMap<Value, Vec<usize>>>;

pub fn analyze(category: &Category) -> Vec<UniquenessFact> {
    let mut facts = Vec::new();
    let index = build_value_index(category);

    for (item_index, item) in category.items.iter().enumerate() {
        for property in category.schema() {
            if let Some(value) = item.get(property) {
                if holder_count(&index, property, value) == 1 {
                    facts.push(UniquenessFact::Single {
                        property: property.clone(),
                        value: value.clone(),
                        item: item_index,
                    });
                }
            }
        }
        if let Some(fact) = find_unique_combination(category, &index, item_index) {
            facts.push(fact);
        }
    }

    for item_index in image_question_subjects(category) {
        facts.push(UniquenessFact::Image { item: item_index });
    }

    facts
}

pub fn build_value_index(category: &Category) -> ValueIndex {
    category
        .schema()
        .iter()
        .map(|property| {
            let holders = category
                .items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| {
                    item.get(property).map(|value| (value.clone(), index))
                })
                .into_group_map();
            (property.clone(), holders)
        })
        .collect()
}

fn holder_count(index: &ValueIndex, property: &str, value: &Value) -> usize {
    index
        .get(property)
        .and_then(|holders| holders.get(value))
        .map(|items| items.len())
        .unwrap_or(0)
}

/// Finds the first combination of 2 or 3 properties whose values pick out this
/// item alone. Subsets are tried smallest size first, in schema order, and the
/// first hit wins even if a later subset of the same size would also work.
fn find_unique_combination(
    category: &Category,
    index: &ValueIndex,
    item_index: usize,
) -> Option<UniquenessFact> {
    let item = &category.items[item_index];

    // Properties that single out the item by themselves already produced a
    // single fact; a combination containing one would not be minimal.
    let eligible: Vec<String> = category
        .schema()
        .iter()
        .filter(|property| match item.get(property) {
            Some(value) => holder_count(index, property, value) > 1,
            None => false,
        })
        .cloned()
        .collect();

    for size in 2..=MAX_COMBO_PROPERTIES.min(eligible.len()) {
        for subset in (0..eligible.len()).combinations(size) {
            let properties: Vec<String> =
                subset.iter().map(|&index| eligible[index].clone()).collect();
            let values: Vec<Value> = match properties
                .iter()
                .map(|property| item.get(property).cloned())
                .collect()
            {
                Some(values) => values,
                None => continue,
            };
            let matches = category
                .items
                .iter()
                .filter(|candidate| {
                    properties
                        .iter()
                        .zip(values.iter())
                        .all(|(property, expected)| candidate.get(property) == Some(expected))
                })
                .count();
            if matches == 1 {
                return Some(UniquenessFact::Combo {
                    properties,
                    values,
                    item: item_index,
                });
            }
        }
    }
    None
}

/// Items eligible as image-question subjects. A single pictured item would
/// leave no real decoys, so at least two are required.
pub fn image_question_subjects(category: &Category) -> Vec<usize> {
    let imaged: Vec<usize> = category
        .items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if item.images.is_empty() {
                None
            } else {
                Some(index)
            }
        })
        .collect();
    if imaged.len() < 2 {
        return Vec::new();
    }
    imaged
}
