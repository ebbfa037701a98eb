use std::fmt;
use std::str::FromStr;

use crate::model::Recipe;

/// Widget size classes supported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeClass {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeClass {
    pub fn as_str(&self) -> &str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(SizeClass::Small),
            "medium" => Ok(SizeClass::Medium),
            "large" => Ok(SizeClass::Large),
            other => Err(format!(
                "unknown size class '{other}', expected small, medium or large"
            )),
        }
    }
}

/// A filled fixed template, ready for the host to draw.
///
/// The widget host owns actual styling; this only carries the title, the
/// thumbnail URL to load, and the body lines in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub size: SizeClass,
    pub title: String,
    pub thumbnail: String,
    pub body: Vec<String>,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if !self.thumbnail.is_empty() {
            writeln!(f, "[{}]", self.thumbnail)?;
        }
        for line in &self.body {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Fill the fixed template for the given size class. Pure; no state.
pub fn render(recipe: &Recipe, size: SizeClass) -> Layout {
    match size {
        SizeClass::Small => Layout {
            size,
            title: "Random Recipe".to_string(),
            thumbnail: recipe.thumbnail.clone(),
            body: vec![recipe.name.clone(), region_line(recipe)],
        },
        SizeClass::Medium => Layout {
            size,
            title: "Today Random Recipe".to_string(),
            thumbnail: recipe.thumbnail.clone(),
            body: vec![
                recipe.name.clone(),
                region_line(recipe),
                "Ingredients".to_string(),
                ingredient_line(recipe),
            ],
        },
        SizeClass::Large => Layout {
            size,
            title: "Today Random Recipe".to_string(),
            thumbnail: recipe.thumbnail.clone(),
            body: vec![
                recipe.name.clone(),
                "Ingredients".to_string(),
                ingredient_line(recipe),
                "Instructions".to_string(),
                recipe.instructions.clone(),
            ],
        },
    }
}

fn region_line(recipe: &Recipe) -> String {
    format!("{} • {}", recipe.area, recipe.category)
}

fn ingredient_line(recipe: &Recipe) -> String {
    recipe
        .ingredients()
        .iter()
        .map(|(measure, ingredient)| format!("{measure} {ingredient}").trim().to_string())
        .collect::<Vec<_>>()
        .join(" - ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            category: "Pasta".to_string(),
            area: "Italy".to_string(),
            name: "Rigatoni".to_string(),
            thumbnail: "https://example.com/rigatoni.jpg".to_string(),
            ingredient1: "Rigatoni".to_string(),
            measure1: "400g".to_string(),
            ingredient2: "Tomatoes".to_string(),
            measure2: "3".to_string(),
            instructions: "Boil the pasta.".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn small_layout_shows_name_and_region() {
        let layout = render(&sample_recipe(), SizeClass::Small);
        assert_eq!(layout.title, "Random Recipe");
        assert_eq!(layout.thumbnail, "https://example.com/rigatoni.jpg");
        assert!(layout.body.contains(&"Rigatoni".to_string()));
        assert!(layout.body.contains(&"Italy • Pasta".to_string()));
    }

    #[test]
    fn medium_layout_joins_ingredients() {
        let layout = render(&sample_recipe(), SizeClass::Medium);
        assert!(layout.body.contains(&"400g Rigatoni - 3 Tomatoes".to_string()));
    }

    #[test]
    fn large_layout_includes_instructions() {
        let layout = render(&sample_recipe(), SizeClass::Large);
        assert!(layout.body.contains(&"Instructions".to_string()));
        assert!(layout.body.contains(&"Boil the pasta.".to_string()));
    }

    #[test]
    fn size_class_parses_case_insensitively() {
        assert_eq!("Large".parse::<SizeClass>().unwrap(), SizeClass::Large);
        assert!("tiny".parse::<SizeClass>().is_err());
    }

    #[test]
    fn display_renders_every_body_line() {
        let text = render(&sample_recipe(), SizeClass::Large).to_string();
        assert!(text.contains("Today Random Recipe"));
        assert!(text.contains("[https://example.com/rigatoni.jpg]"));
        assert!(text.contains("Boil the pasta."));
    }
}
