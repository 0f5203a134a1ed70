//! Run orchestration: generate articles, fetch images, write static pages.

use crate::ai::{CompletionService, OpenAiChatClient};
use crate::article::parse_article;
use crate::config::Config;
use crate::image::{ImageSource, PicsumClient};
use crate::models::{ArticleDraft, RunSummary};
use crate::render::{render_page, PageContent};
use crate::slug::slug_for_title;
use crate::{prompts, Error, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Drives a run: one article per iteration, strictly in sequence.
pub struct App {
    completion: Box<dyn CompletionService>,
    images: Box<dyn ImageSource>,
    rng: StdRng,
    config: Config,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub completion: Box<dyn CompletionService>,
    pub images: Box<dyn ImageSource>,
    pub rng: StdRng,
}

impl App {
    /// Build an app from concrete service dependencies.
    pub fn with_services(services: AppServices, config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            completion: services.completion,
            images: services.images,
            rng: services.rng,
            config,
        })
    }

    /// Build an app talking to OpenAI and Picsum.
    pub fn new(config: Config) -> Result<Self> {
        // Reuse one HTTP connection pool across provider clients.
        let http_client = reqwest::Client::new();

        info!("Completion provider: OpenAI (model: {})", config.chat_model);
        let completion = Box::new(OpenAiChatClient::new_with_client(
            config.openai_api_key.clone(),
            config.chat_model.clone(),
            http_client.clone(),
        ));
        let images = Box::new(PicsumClient::new_with_client(http_client));

        Self::with_services(
            AppServices {
                completion,
                images,
                rng: StdRng::from_entropy(),
            },
            config,
        )
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate `posts_per_run` articles. Provider and parse failures skip the
    /// article; filesystem failures end the run.
    pub async fn run(&mut self) -> Result<RunSummary> {
        self.ensure_dirs()?;

        let mut summary = RunSummary::default();

        for index in 0..self.config.posts_per_run {
            let topic = self.pick_topic()?;
            info!(
                "[{}/{}] Generating article about '{}'",
                index + 1,
                self.config.posts_per_run,
                topic
            );

            match self.create_article(&topic).await {
                Ok(path) => {
                    info!("Created: {}", path.display());
                    summary.created.push(path);
                }
                Err(e) if e.is_article_failure() => {
                    if let Error::Parse { raw, .. } = &e {
                        error!("Model output could not be parsed. Raw output:\n{}", raw);
                    }
                    warn!("Skipping article about '{}': {}", topic, e);
                    summary.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Done. Created {} file(s), skipped {}: {:?}",
            summary.created.len(),
            summary.skipped,
            summary.created
        );
        Ok(summary)
    }

    fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(self.config.articles_dir())?;
        fs::create_dir_all(self.config.images_dir())?;
        Ok(())
    }

    fn pick_topic(&mut self) -> Result<String> {
        self.config
            .topics
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| Error::Config("topic pool is empty".to_string()))
    }

    async fn create_article(&self, topic: &str) -> Result<PathBuf> {
        let prompt = prompts::article_prompt(topic);
        let raw = self.completion.complete(&prompt).await?;
        let content = parse_article(&raw, topic)?;

        let slug = slug_for_title(&content.title);
        let mut draft = ArticleDraft::new(topic.to_string(), content, slug);

        if let Some(image) = self.images.fetch_image(None).await {
            let image_path = self.config.images_dir().join(draft.image_file_name());
            fs::write(&image_path, &image.bytes)?;
            info!(
                "Saved image ({} bytes) to {}",
                image.bytes.len(),
                image_path.display()
            );
            draft.attach_image(image.credit);
        }

        let html = render_page(&PageContent {
            title: &draft.title,
            meta: &draft.meta,
            image_file: draft.image_file.as_deref(),
            image_credit: &draft.image_credit,
            body_html: &draft.body,
        });

        let out_path = self.config.articles_dir().join(draft.html_file_name());
        fs::write(&out_path, html)?;
        Ok(out_path)
    }
}

#[cfg(test)]
mod tests {
    use super::{App, AppServices};
    use crate::ai::MockCompletionClient;
    use crate::config::Config;
    use crate::image::MockImageSource;
    use crate::Error;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const VALID_ARTICLE: &str = r#"{"title":"Sunny Spells Ahead","meta":"A bright week","image_keyword":"sun","body":"<p>Sun.</p>"}"#;

    fn build_test_app(
        articles_dir: &Path,
        posts: usize,
        completion: MockCompletionClient,
        images: MockImageSource,
    ) -> App {
        App::with_services(
            AppServices {
                completion: Box::new(completion),
                images: Box::new(images),
                rng: StdRng::seed_from_u64(7),
            },
            Config::new("test-key".to_string())
                .with_articles_dir(articles_dir)
                .with_posts_per_run(posts),
        )
        .unwrap()
    }

    fn html_files(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "html"))
            .count()
    }

    #[tokio::test]
    async fn test_run_creates_directories_and_article() {
        let dir = tempdir().unwrap();
        let articles_dir = dir.path().join("articles");

        let mut app = build_test_app(
            &articles_dir,
            1,
            MockCompletionClient::new().with_response(VALID_ARTICLE.to_string()),
            MockImageSource::new().with_image(vec![9, 9, 9], "credit".to_string()),
        );

        let summary = app.run().await.unwrap();

        assert_eq!(summary.created, vec![articles_dir.join("sunny-spells-ahead.html")]);
        assert_eq!(summary.skipped, 0);
        assert_eq!(
            fs::read(articles_dir.join("images/sunny-spells-ahead.jpg")).unwrap(),
            vec![9, 9, 9]
        );

        let html = fs::read_to_string(&summary.created[0]).unwrap();
        assert!(html.contains("<h2>Sunny Spells Ahead</h2>"));
        assert!(html.contains("/articles/images/sunny-spells-ahead.jpg"));
        assert!(html.contains("<figcaption>credit</figcaption>"));
    }

    #[tokio::test]
    async fn test_parse_failure_skips_one_article() {
        let dir = tempdir().unwrap();
        let articles_dir = dir.path().join("articles");

        let completion = MockCompletionClient::new()
            .with_response(r#"{"title":"First Post"}"#.to_string())
            .with_response("I am unable to produce JSON today.".to_string())
            .with_response(r#"{"title":"Third Post"}"#.to_string());
        let probe = completion.clone();

        let mut app = build_test_app(&articles_dir, 3, completion, MockImageSource::new());
        let summary = app.run().await.unwrap();

        assert_eq!(probe.get_call_count(), 3);
        assert_eq!(summary.created.len(), 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(html_files(&articles_dir), 2);
    }

    #[tokio::test]
    async fn test_provider_error_skips_article() {
        let dir = tempdir().unwrap();
        let articles_dir = dir.path().join("articles");

        let completion = MockCompletionClient::new()
            .with_provider_error("API error (status 500)".to_string())
            .with_response(r#"{"title":"Recovered"}"#.to_string());

        let mut app = build_test_app(&articles_dir, 2, completion, MockImageSource::new());
        let summary = app.run().await.unwrap();

        assert_eq!(summary.created, vec![articles_dir.join("recovered.html")]);
        assert_eq!(summary.skipped, 1);
    }

    #[tokio::test]
    async fn test_missing_image_is_not_fatal() {
        let dir = tempdir().unwrap();
        let articles_dir = dir.path().join("articles");

        let images = MockImageSource::new().without_image();
        let image_probe = images.clone();

        let mut app = build_test_app(
            &articles_dir,
            1,
            MockCompletionClient::new().with_response(VALID_ARTICLE.to_string()),
            images,
        );
        let summary = app.run().await.unwrap();

        assert_eq!(summary.created.len(), 1);
        assert_eq!(image_probe.seeds(), vec![None]);
        assert_eq!(fs::read_dir(articles_dir.join("images")).unwrap().count(), 0);

        let html = fs::read_to_string(&summary.created[0]).unwrap();
        assert!(!html.contains("<figure>"));
    }

    #[tokio::test]
    async fn test_same_title_overwrites_existing_page() {
        let dir = tempdir().unwrap();
        let articles_dir = dir.path().join("articles");

        let mut app = build_test_app(
            &articles_dir,
            2,
            MockCompletionClient::new().with_response(VALID_ARTICLE.to_string()),
            MockImageSource::new(),
        );
        let summary = app.run().await.unwrap();

        assert_eq!(summary.created.len(), 2);
        assert_eq!(summary.created[0], summary.created[1]);
        assert_eq!(html_files(&articles_dir), 1);
    }

    #[tokio::test]
    async fn test_untitled_slug_falls_back_to_timestamp() {
        let dir = tempdir().unwrap();
        let articles_dir = dir.path().join("articles");

        let mut app = build_test_app(
            &articles_dir,
            1,
            MockCompletionClient::new().with_response(r#"{"title":"?!?"}"#.to_string()),
            MockImageSource::new(),
        );
        let summary = app.run().await.unwrap();

        let name = summary.created[0]
            .file_name()
            .unwrap()
            .to_string_lossy()
            .to_string();
        assert!(name.starts_with("post-"));
        assert!(name.ends_with(".html"));
    }

    #[tokio::test]
    async fn test_prompt_uses_topic_from_pool() {
        let dir = tempdir().unwrap();
        let completion = MockCompletionClient::new();
        let probe = completion.clone();

        let mut app = App::with_services(
            AppServices {
                completion: Box::new(completion),
                images: Box::new(MockImageSource::new()),
                rng: StdRng::seed_from_u64(1),
            },
            Config::new("key".to_string())
                .with_articles_dir(dir.path())
                .with_posts_per_run(4)
                .with_topics(["volcanoes"]),
        )
        .unwrap();
        app.run().await.unwrap();

        let prompts = probe.prompts();
        assert_eq!(prompts.len(), 4);
        assert!(prompts.iter().all(|p| p.contains("'volcanoes'")));
    }

    #[tokio::test]
    async fn test_unwritable_output_aborts_run() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"file").unwrap();

        let mut app = build_test_app(
            &blocker,
            1,
            MockCompletionClient::new(),
            MockImageSource::new(),
        );

        assert!(matches!(app.run().await, Err(Error::Io(_))));
    }

    #[test]
    fn test_with_services_rejects_invalid_config() {
        let result = App::with_services(
            AppServices {
                completion: Box::new(MockCompletionClient::new()),
                images: Box::new(MockImageSource::new()),
                rng: StdRng::seed_from_u64(0),
            },
            Config::new("key".to_string()).with_posts_per_run(0),
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
