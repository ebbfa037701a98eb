use thiserror::Error;

/// Errors that can occur while fetching or decoding a recipe
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Transport or connectivity failure while talking to the recipe API
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The payload was not valid JSON or did not match the expected shape
    #[error("failed to decode recipe payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The payload was well-formed JSON but the meals list was empty
    #[error("recipe payload contained no meals")]
    EmptyPayload,
}

impl WidgetError {
    /// Whether this error is a payload-shape failure rather than a
    /// transport failure. An empty meals list counts as a shape failure.
    pub fn is_decode(&self) -> bool {
        matches!(self, WidgetError::Decode(_) | WidgetError::EmptyPayload)
    }
}
