use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::error::WidgetError;
use crate::model::{Recipe, RecipeList};

/// TheMealDB endpoint returning one random meal per request.
pub const RANDOM_RECIPE_URL: &str = "https://www.themealdb.com/api/json/v1/1/random.php";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// One-shot fetcher for the random-recipe endpoint.
///
/// Issues a single GET per call and decodes the `{ meals: [...] }` envelope.
/// No retries; on failure the caller decides the fallback.
pub struct RecipeFetcher {
    client: Client,
    endpoint: String,
}

impl RecipeFetcher {
    /// Create a fetcher for the default endpoint.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self::with_endpoint(RANDOM_RECIPE_URL, timeout)
    }

    /// Create a fetcher for a custom endpoint. Used by the config layer and
    /// by tests pointing at a local mock server.
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipe-widget/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Fetch one random recipe.
    ///
    /// Returns [`WidgetError::Network`] on transport failure,
    /// [`WidgetError::Decode`] when the payload is malformed, and
    /// [`WidgetError::EmptyPayload`] when the meals list is empty.
    pub async fn fetch(&self) -> Result<Recipe, WidgetError> {
        let body = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        // Decode from the body text rather than response.json() so a
        // malformed payload maps to Decode, not to a reqwest error.
        let list: RecipeList = serde_json::from_str(&body)?;
        let recipe = list.meals.into_iter().next().ok_or(WidgetError::EmptyPayload)?;
        debug!("fetched recipe: {}", recipe.name);
        Ok(recipe)
    }
}

impl Default for RecipeFetcher {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Fetch one random recipe from the default endpoint.
pub async fn fetch_random_recipe() -> Result<Recipe, WidgetError> {
    RecipeFetcher::new(None).fetch().await
}

/// Fetch one random recipe with a custom request timeout.
pub async fn fetch_random_recipe_with_timeout(
    timeout: Option<Duration>,
) -> Result<Recipe, WidgetError> {
    RecipeFetcher::new(timeout).fetch().await
}
