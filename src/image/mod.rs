//! Stock photo retrieval for article pages
//!
//! Images are best-effort: a source that cannot deliver returns `None` and the
//! article is published without a figure.

pub mod mock;
pub mod picsum;

pub use mock::MockImageSource;
pub use picsum::PicsumClient;

use async_trait::async_trait;

/// Image bytes plus the attribution shown under them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub credit: String,
}

#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetch one image; `seed` picks the image, a random one is used when `None`.
    async fn fetch_image(&self, seed: Option<u32>) -> Option<FetchedImage>;
}
