use serde::{Deserialize, Deserializer, Serialize};

/// JSON envelope returned by TheMealDB: `{ "meals": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct RecipeList {
    #[serde(default)]
    pub meals: Vec<Recipe>,
}

/// One meal record from TheMealDB.
///
/// The API emits explicit `null`s for unused ingredient slots, so every
/// field decodes to an empty string when absent or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "strCategory", default, deserialize_with = "null_to_empty")]
    pub category: String,
    #[serde(rename = "strArea", default, deserialize_with = "null_to_empty")]
    pub area: String,
    #[serde(rename = "strMeal", default, deserialize_with = "null_to_empty")]
    pub name: String,
    #[serde(rename = "strMealThumb", default, deserialize_with = "null_to_empty")]
    pub thumbnail: String,
    #[serde(rename = "strIngredient1", default, deserialize_with = "null_to_empty")]
    pub ingredient1: String,
    #[serde(rename = "strIngredient2", default, deserialize_with = "null_to_empty")]
    pub ingredient2: String,
    #[serde(rename = "strIngredient3", default, deserialize_with = "null_to_empty")]
    pub ingredient3: String,
    #[serde(rename = "strMeasure1", default, deserialize_with = "null_to_empty")]
    pub measure1: String,
    #[serde(rename = "strMeasure2", default, deserialize_with = "null_to_empty")]
    pub measure2: String,
    #[serde(rename = "strMeasure3", default, deserialize_with = "null_to_empty")]
    pub measure3: String,
    #[serde(rename = "strInstructions", default, deserialize_with = "null_to_empty")]
    pub instructions: String,
}

fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

impl Recipe {
    /// The preview record shown before the first fetch completes.
    pub fn placeholder() -> Self {
        Recipe {
            category: "Pasta".to_string(),
            area: "Italy".to_string(),
            name: "Rigatoni".to_string(),
            thumbnail: "https://www.themealdb.com/images/media/meals/kcv6hj1598733479.jpg"
                .to_string(),
            ..Default::default()
        }
    }

    /// The record substituted when a fetch fails. Only the category carries
    /// text, so the layout reads "Failed to load" instead of stale data.
    pub fn failed() -> Self {
        Recipe {
            category: "Failed to load".to_string(),
            ..Default::default()
        }
    }

    /// The up-to-3 (measure, ingredient) pairs, skipping empty slots.
    pub fn ingredients(&self) -> Vec<(&str, &str)> {
        [
            (self.measure1.as_str(), self.ingredient1.as_str()),
            (self.measure2.as_str(), self.ingredient2.as_str()),
            (self.measure3.as_str(), self.ingredient3.as_str()),
        ]
        .into_iter()
        .filter(|(_, ingredient)| !ingredient.trim().is_empty())
        .collect()
    }
}
