use super::{FetchedImage, ImageSource};
use async_trait::async_trait;
use rand::Rng;
use reqwest::{Client, StatusCode};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://picsum.photos";
const WIDTH: u32 = 1200;
const HEIGHT: u32 = 628;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const PICSUM_CREDIT: &str = "Image courtesy of Picsum Photos";

/// Random photos from picsum.photos, keyed by a numeric seed.
pub struct PicsumClient {
    client: Client,
    base_url: String,
}

impl PicsumClient {
    pub fn new() -> Self {
        Self::new_with_client(Client::new())
    }

    pub fn new_with_client(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn image_url(&self, seed: u32) -> String {
        format!("{}/{}/{}?random={}", self.base_url, WIDTH, HEIGHT, seed)
    }
}

impl Default for PicsumClient {
    fn default() -> Self {
        Self::new()
    }
}

fn random_seed() -> u32 {
    rand::thread_rng().gen_range(1000..=9999)
}

#[async_trait]
impl ImageSource for PicsumClient {
    async fn fetch_image(&self, seed: Option<u32>) -> Option<FetchedImage> {
        let url = self.image_url(seed.unwrap_or_else(random_seed));
        tracing::debug!("Fetching image from {}", url);

        let response = match self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::info!("Image request failed, continuing without image: {}", e);
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            tracing::info!(
                "Image provider returned status {}, continuing without image",
                response.status()
            );
            return None;
        }

        match response.bytes().await {
            Ok(bytes) => Some(FetchedImage {
                bytes: bytes.to_vec(),
                credit: PICSUM_CREDIT.to_string(),
            }),
            Err(e) => {
                tracing::info!("Failed to read image body, continuing without image: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_image_returns_bytes_and_credit() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1200/628"))
            .and(query_param("random", "4242"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF, 0xE0]))
            .expect(1)
            .mount(&server)
            .await;

        let client = PicsumClient::new().with_base_url(server.uri());
        let image = client.fetch_image(Some(4242)).await.unwrap();

        assert_eq!(image.bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);
        assert_eq!(image.credit, "Image courtesy of Picsum Photos");
    }

    #[tokio::test]
    async fn test_non_200_status_means_no_image() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1200/628"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .mount(&server)
            .await;

        let client = PicsumClient::new().with_base_url(server.uri());
        assert!(client.fetch_image(Some(1234)).await.is_none());
    }

    #[tokio::test]
    async fn test_other_success_status_means_no_image() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = PicsumClient::new().with_base_url(server.uri());
        assert!(client.fetch_image(None).await.is_none());
    }

    #[tokio::test]
    async fn test_network_failure_means_no_image() {
        let client = PicsumClient::new().with_base_url("http://127.0.0.1:9".to_string());
        assert!(client.fetch_image(None).await.is_none());
    }

    #[test]
    fn test_random_seed_is_four_digits() {
        for _ in 0..100 {
            let seed = random_seed();
            assert!((1000..=9999).contains(&seed));
        }
    }

    #[test]
    fn test_image_url_template() {
        let client = PicsumClient::new().with_base_url("https://img.test/".to_string());
        assert_eq!(client.image_url(17), "https://img.test/1200/628?random=17");
    }
}
