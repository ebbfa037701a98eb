use std::time::Duration;

use crate::fetcher::RecipeFetcher;
use crate::render::{render, Layout, SizeClass};
use crate::thumbnail::Thumbnail;
use crate::timeline::{Provider, Timeline, TimelineEntry};

/// A rendered refresh cycle: the timeline entry plus its filled layout.
#[derive(Debug, Clone)]
pub struct WidgetEntry {
    pub entry: TimelineEntry,
    pub layout: Layout,
    pub timeline: Timeline,
    /// Image bytes for the layout's thumbnail URL, when requested via
    /// [`RecipeWidgetBuilder::with_thumbnail`].
    pub thumbnail: Option<Thumbnail>,
}

/// Builder for configuring and running one widget refresh cycle
#[derive(Debug, Default)]
pub struct RecipeWidgetBuilder {
    size: SizeClass,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    load_thumbnail: bool,
}

impl RecipeWidgetBuilder {
    /// Set the size class to render at (defaults to medium)
    ///
    /// # Example
    /// ```
    /// use recipe_widget::{RecipeWidget, SizeClass};
    ///
    /// let builder = RecipeWidget::builder().size(SizeClass::Large);
    /// ```
    pub fn size(mut self, size: SizeClass) -> Self {
        self.size = size;
        self
    }

    /// Override the recipe API endpoint
    ///
    /// Mostly useful for tests pointing at a local mock server.
    ///
    /// # Example
    /// ```
    /// use recipe_widget::RecipeWidget;
    ///
    /// let builder = RecipeWidget::builder()
    ///     .endpoint("http://localhost:8080/random.php");
    /// ```
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_widget::RecipeWidget;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeWidget::builder().timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Also fetch the image bytes the entry's thumbnail URL points at
    ///
    /// Loading keeps the thumbnail contract: any failure yields an empty
    /// thumbnail, never an error.
    ///
    /// # Example
    /// ```
    /// use recipe_widget::RecipeWidget;
    ///
    /// let builder = RecipeWidget::builder().with_thumbnail();
    /// ```
    pub fn with_thumbnail(mut self) -> Self {
        self.load_thumbnail = true;
        self
    }

    /// Run one refresh cycle and render its entry
    ///
    /// A fetch failure never surfaces here: the cycle substitutes the
    /// "Failed to load" record and renders that instead, matching the
    /// widget's on-screen failure contract.
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_widget::{RecipeWidget, SizeClass};
    /// # #[tokio::main]
    /// # async fn main() {
    /// let cycle = RecipeWidget::builder()
    ///     .size(SizeClass::Small)
    ///     .entry()
    ///     .await;
    /// println!("{}", cycle.layout);
    /// # }
    /// ```
    pub async fn entry(self) -> WidgetEntry {
        let fetcher = match self.endpoint {
            Some(endpoint) => RecipeFetcher::with_endpoint(endpoint, self.timeout),
            None => RecipeFetcher::new(self.timeout),
        };

        let timeline = Provider.timeline(&fetcher).await;
        // timeline() always yields exactly one entry
        let entry = timeline.entries[0].clone();
        let layout = render(&entry.recipe, self.size);

        let thumbnail = if self.load_thumbnail {
            let url = entry.recipe.thumbnail.clone();
            // Thumbnail::load blocks, keep it off the runtime threads
            let loaded = tokio::task::spawn_blocking(move || Thumbnail::load(&url))
                .await
                .unwrap_or_default();
            Some(loaded)
        } else {
            None
        };

        WidgetEntry {
            entry,
            layout,
            timeline,
            thumbnail,
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeWidget;

impl RecipeWidget {
    /// Creates a new builder for a widget refresh cycle
    ///
    /// # Example
    /// ```
    /// use recipe_widget::RecipeWidget;
    ///
    /// let builder = RecipeWidget::builder();
    /// ```
    pub fn builder() -> RecipeWidgetBuilder {
        RecipeWidgetBuilder::default()
    }
}
