use thiserror::Error;

use super::model::{LocalizedContent, PublicationStatus, RawArticleData, ResolvedArticle};

/// Reasons a payload yields no displayable content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("article payload has no contents")]
    MissingContents,
    #[error("content not available in language {requested} or default language {fallback}")]
    MissingLanguageContent { requested: String, fallback: String },
}

/// Select the per-field display values for one article.
///
/// Picks the content bundle for `effective_language`, falling back to
/// `default_language` when that bundle is missing, then resolves each field
/// through the same two-step chain with `""` as the terminal fallback. An
/// empty string present in a bundle is a value, not a trigger for fallback.
///
/// The channel name is resolved against the channel's own localization map,
/// independently of which bundle the content fields came from.
pub fn select_fields(
    raw: &RawArticleData,
    effective_language: &str,
    default_language: &str,
) -> Result<ResolvedArticle, SelectError> {
    if raw.contents.is_empty() {
        tracing::error!("article payload has no contents");
        return Err(SelectError::MissingContents);
    }

    let fallback = raw.contents.get(default_language);

    let primary = match raw.contents.get(effective_language) {
        Some(entry) => entry,
        None => {
            tracing::warn!(
                "content for language {effective_language} not found, \
                 falling back to default language {default_language}"
            );
            match fallback {
                Some(entry) => entry,
                None => {
                    tracing::error!(
                        "content not available in language {effective_language} \
                         or default language {default_language}"
                    );
                    return Err(SelectError::MissingLanguageContent {
                        requested: effective_language.to_string(),
                        fallback: default_language.to_string(),
                    });
                }
            }
        }
    };

    let title = primary
        .title
        .clone()
        .or_else(|| fallback.and_then(|entry| entry.title.clone()))
        .unwrap_or_default();

    let teaser = primary
        .teaser
        .clone()
        .or_else(|| fallback.and_then(|entry| entry.teaser.clone()))
        .unwrap_or_default();

    let content = primary
        .content
        .clone()
        .or_else(|| fallback.and_then(|entry| entry.content.clone()))
        .unwrap_or_default();

    let image_url = original_image_url(primary)
        .or_else(|| fallback.and_then(original_image_url))
        .unwrap_or_default();

    let channel_name = channel_title(raw, effective_language)
        .or_else(|| channel_title(raw, default_language))
        .unwrap_or_default();

    let publication_status = if raw.is_published() {
        PublicationStatus::Published
    } else {
        PublicationStatus::Unpublished
    };

    Ok(ResolvedArticle {
        title,
        teaser,
        content,
        image_url,
        channel_name,
        publication_status,
    })
}

fn original_image_url(entry: &LocalizedContent) -> Option<String> {
    entry.image.as_ref()?.original.as_ref()?.url.clone()
}

fn channel_title(raw: &RawArticleData, language: &str) -> Option<String> {
    raw.channel
        .as_ref()?
        .config
        .as_ref()?
        .localization
        .get(language)?
        .title
        .clone()
}
