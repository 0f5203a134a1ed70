use super::{FetchedImage, ImageSource};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Image source that hands back fixed bytes, or nothing at all.
#[derive(Clone)]
pub struct MockImageSource {
    image: Option<FetchedImage>,
    seeds: Arc<Mutex<Vec<Option<u32>>>>,
}

impl MockImageSource {
    pub fn new() -> Self {
        Self {
            image: Some(FetchedImage {
                bytes: vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46],
                credit: "Mock image credit".to_string(),
            }),
            seeds: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_image(mut self, bytes: Vec<u8>, credit: String) -> Self {
        self.image = Some(FetchedImage { bytes, credit });
        self
    }

    pub fn without_image(mut self) -> Self {
        self.image = None;
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.seeds.lock().unwrap().len()
    }

    pub fn seeds(&self) -> Vec<Option<u32>> {
        self.seeds.lock().unwrap().clone()
    }
}

impl Default for MockImageSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageSource for MockImageSource {
    async fn fetch_image(&self, seed: Option<u32>) -> Option<FetchedImage> {
        self.seeds.lock().unwrap().push(seed);
        self.image.clone()
    }
}
