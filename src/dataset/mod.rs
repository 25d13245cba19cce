use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value as Json;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::path::Path;


/// Reserved top-level key holding per-category configuration.
pub const CONFIG_KEY: &str = "config";

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{}", text),
            Value::Number(number) => write!(f, "{}", number),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Item {
    pub name: String,
    pub attributes: Vec<(String, Value)>,
    pub images: Vec<String>,
}

impl Item {
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value)
    }

    fn from_json(json: &Json) -> Result<Item> {
        let object = json.as_object().context("Item is not an object")?;
        let name = object
            .get("name")
            .and_then(Json::as_str)
            .context("Item has no name")?
            .to_owned();

        let mut attributes = Vec::new();
        let mut images = Vec::new();
        for (key, value) in object {
            match key.as_str() {
                "name" => (),
                "image" | "images" => match value {
                    Json::String(path) => images.push(path.clone()),
                    Json::Array(paths) => {
                        images.extend(paths.iter().filter_map(Json::as_str).map(str::to_owned))
                    }
                    _ => (),
                },
                _ => match value {
                    Json::String(text) => attributes.push((key.clone(), Value::Text(text.clone()))),
                    Json::Number(number) => {
                        attributes.push((key.clone(), Value::Number(number.clone())))
                    }
                    Json::Bool(flag) => {
                        attributes.push((key.clone(), Value::Text(flag.to_string())))
                    }
                    // Nulls and nested structures are not usable as quiz facts
                    _ => (),
                },
            }
        }

        Ok(Item {
            name,
            attributes,
            images,
        })
    }
}

fn probability_from_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    // Values above 1 are percentages
    let fraction = if raw > 1.0 { raw / 100.0 } else { raw };
    Ok(fraction.max(0.0).min(1.0))
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    pub typed: bool,
    #[serde(
        rename = "typedProbability",
        deserialize_with = "probability_from_number"
    )]
    pub typed_probability: f64,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        CategoryConfig {
            typed: false,
            typed_probability: 0.5,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Category {
    pub name: String,
    pub items: Vec<Item>,
    pub config: CategoryConfig,
    schema: Vec<String>,
}

impl Category {
    pub fn new(name: String, items: Vec<Item>, config: CategoryConfig) -> Self {
        // The schema comes from the first item; items are assumed to share it
        let schema = items
            .first()
            .map(|item| item.attributes.iter().map(|(key, _)| key.clone()).collect())
            .unwrap_or_default();
        Category {
            name,
            items,
            config,
            schema,
        }
    }

    pub fn schema(&self) -> &[String] {
        &self.schema
    }
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub categories: Vec<Category>,
}

impl Dataset {
    pub fn open(source: &Path) -> Result<Dataset> {
        let file = File::open(source)
            .with_context(|| format!("Could not open dataset {}", source.display()))?;
        let json = serde_json::from_reader(file).context("Could not parse dataset")?;
        Dataset::from_json(&json)
    }

    pub fn from_json(json: &Json) -> Result<Dataset> {
        let object = json.as_object().context("Dataset is not an object")?;

        let mut configs: HashMap<String, CategoryConfig> = HashMap::new();
        if let Some(raw) = object.get(CONFIG_KEY) {
            configs =
                serde_json::from_value(raw.clone()).context("Invalid category configuration")?;
        }

        let mut categories = Vec::new();
        for (name, value) in object {
            if name == CONFIG_KEY {
                continue;
            }
            let raw_items = value
                .as_array()
                .with_context(|| format!("Category {} is not an array", name))?;
            let mut items = Vec::new();
            for raw_item in raw_items {
                items.push(Item::from_json(raw_item)?);
            }
            let config = configs.get(name).copied().unwrap_or_default();
            categories.push(Category::new(name.clone(), items, config));
        }

        Ok(Dataset { categories })
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|category| category.name.as_str())
            .collect()
    }
}
