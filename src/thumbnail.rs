use log::warn;

/// Raw bytes of a recipe thumbnail.
///
/// Loading is infallible by contract: any failure yields an empty
/// thumbnail and the host draws its blank image.
#[derive(Debug, Clone, Default)]
pub struct Thumbnail {
    bytes: Vec<u8>,
}

impl Thumbnail {
    /// Fetch an image synchronously by URL.
    ///
    /// Must not be called from within an async runtime; the widget host
    /// loads images on its own render thread.
    pub fn load(url: &str) -> Self {
        if url.is_empty() {
            return Self::default();
        }

        let result = reqwest::blocking::get(url)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.bytes());

        match result {
            Ok(bytes) => Self {
                bytes: bytes.to_vec(),
            },
            Err(err) => {
                warn!("failed to load thumbnail from {url}: {err}");
                Self::default()
            }
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
