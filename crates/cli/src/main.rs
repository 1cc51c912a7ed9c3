use article_widget_client::config::WidgetConfig;
use article_widget_client::fetch::ArticleFetcher;
use article_widget_client::resolver::{ArticleResolver, ResolveOutcome};
use article_widget_client::signals::{NoEditorTabs, UrlParameters};
use article_widget_core::language::WidgetMode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (dev convenience)
    let _ = dotenvy::dotenv();

    // Load configuration
    let config = WidgetConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load config: {e}. Is API_BASE_URL set?"))?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let article_id = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: article-widget <article-id> [language] [query]"))?;
    let requested_language = args.next().unwrap_or_else(|| config.default_language.clone());
    // Optional raw query string, standing in for the hosting page's URL
    // parameters (e.g. "language=de_DE").
    let query = args.next().unwrap_or_default();

    let fetcher = ArticleFetcher::new(&config.api_base_url)?;
    let resolver = ArticleResolver::new(fetcher, config.default_language.clone());

    let outcome = resolver
        .resolve(
            &article_id,
            &requested_language,
            WidgetMode::Viewer,
            &NoEditorTabs,
            &UrlParameters::from_query(&query),
        )
        .await?;

    match outcome {
        ResolveOutcome::Updated(article) => {
            println!("{}", serde_json::to_string_pretty(&article)?);
        }
        ResolveOutcome::Skipped => {
            tracing::warn!("empty article identifier, nothing to resolve");
        }
        ResolveOutcome::Superseded => {}
    }

    Ok(())
}
