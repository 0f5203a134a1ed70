use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weathernow_generator::{app::App, config::Config};

#[derive(Debug, Parser)]
#[command(name = "weathernow-generator")]
#[command(about = "Generate blog articles as static HTML pages")]
struct CliArgs {
    /// Number of articles to generate (default: 3).
    #[arg(short = 'n', long, value_name = "N", value_parser = parse_post_count)]
    posts: Option<usize>,

    /// Directory the article pages are written to (default: articles).
    #[arg(long, value_name = "DIR")]
    articles_dir: Option<PathBuf>,
}

fn parse_post_count(input: &str) -> std::result::Result<usize, String> {
    match input.parse::<usize>() {
        Ok(0) | Err(_) => Err(format!(
            "Invalid post count '{}'. Expected a positive integer",
            input
        )),
        Ok(count) => Ok(count),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weathernow_generator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    if let Some(posts) = args.posts {
        config = config.with_posts_per_run(posts);
    }
    if let Some(dir) = args.articles_dir {
        config = config.with_articles_dir(dir);
    }

    info!("Starting weathernow-generator");

    match App::new(config) {
        Ok(mut app) => match app.run().await {
            Ok(summary) => {
                info!(
                    "Generation completed: {} created, {} skipped",
                    summary.created.len(),
                    summary.skipped
                );
                Ok(())
            }
            Err(e) => {
                error!("Generation failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}
