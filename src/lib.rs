//! Random-recipe widget: fetch one random meal from TheMealDB and render
//! it into a small, medium or large fixed layout, plus the timeline
//! plumbing a widget host needs to schedule refreshes.

pub mod builder;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod render;
pub mod thumbnail;
pub mod timeline;

pub use builder::{RecipeWidget, RecipeWidgetBuilder, WidgetEntry};
pub use config::WidgetConfig;
pub use error::WidgetError;
pub use fetcher::{
    fetch_random_recipe, fetch_random_recipe_with_timeout, RecipeFetcher, RANDOM_RECIPE_URL,
};
pub use model::{Recipe, RecipeList};
pub use render::{render, Layout, SizeClass};
pub use thumbnail::Thumbnail;
pub use timeline::{Provider, Timeline, TimelineEntry, REFRESH_INTERVAL_MINUTES};
