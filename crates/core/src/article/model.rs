use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw article payload as returned by the articles endpoint.
///
/// Deserialized leniently: every field the backend may omit is optional or
/// defaulted, and `published` is kept as raw JSON because the backend is not
/// strict about its type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticleData {
    /// Per-language content bundles, keyed by language code (e.g. `en_US`).
    #[serde(default)]
    pub contents: HashMap<String, LocalizedContent>,
    #[serde(default)]
    pub published: Value,
    #[serde(default)]
    pub channel: Option<Channel>,
}

impl RawArticleData {
    /// Whether the publication flag is truthy under the host's (JS)
    /// truthiness rules: `false`, `0`, `""`, `null`, and absence are all
    /// unpublished.
    pub fn is_published(&self) -> bool {
        match &self.published {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

/// Per-language bundle of article fields. Any field may be absent in a given
/// language entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalizedContent {
    pub title: Option<String>,
    pub teaser: Option<String>,
    /// Rich text / HTML body.
    pub content: Option<String>,
    pub image: Option<ArticleImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleImage {
    pub original: Option<ImageVariant>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageVariant {
    pub url: Option<String>,
}

/// Channel metadata carried alongside the article, with its own per-language
/// localization map.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub config: Option<ChannelConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelConfig {
    #[serde(default)]
    pub localization: HashMap<String, ChannelLocalization>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelLocalization {
    pub title: Option<String>,
}

/// Fully resolved article record handed to the caller for rendering.
///
/// Created fresh on every successful resolution cycle and replaced, never
/// patched. Field values are always present; the terminal fallback for a
/// field missing in every language is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedArticle {
    pub title: String,
    pub teaser: String,
    pub content: String,
    pub image_url: String,
    pub channel_name: String,
    pub publication_status: PublicationStatus,
}

/// Derived publication state of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicationStatus {
    Published,
    Unpublished,
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublicationStatus::Published => write!(f, "Published"),
            PublicationStatus::Unpublished => write!(f, "Unpublished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(payload: Value) -> RawArticleData {
        serde_json::from_value(payload).unwrap()
    }

    #[test]
    fn published_truthiness() {
        assert!(raw(json!({ "published": true })).is_published());
        assert!(!raw(json!({ "published": false })).is_published());
        assert!(!raw(json!({})).is_published());
        assert!(!raw(json!({ "published": 0 })).is_published());
        assert!(!raw(json!({ "published": null })).is_published());
        assert!(!raw(json!({ "published": "" })).is_published());
        assert!(raw(json!({ "published": 1 })).is_published());
        assert!(raw(json!({ "published": "yes" })).is_published());
    }

    #[test]
    fn deserialize_lenient_payload() {
        let data = raw(json!({
            "contents": {
                "en_US": { "title": "Hi" }
            }
        }));
        let entry = &data.contents["en_US"];
        assert_eq!(entry.title.as_deref(), Some("Hi"));
        assert_eq!(entry.teaser, None);
        assert!(entry.image.is_none());
        assert!(data.channel.is_none());
    }

    #[test]
    fn deserialize_missing_contents() {
        let data = raw(json!({ "published": true }));
        assert!(data.contents.is_empty());
    }

    #[test]
    fn resolved_article_serializes_camel_case() {
        let article = ResolvedArticle {
            title: "Hi".into(),
            teaser: String::new(),
            content: "<p>x</p>".into(),
            image_url: String::new(),
            channel_name: "News".into(),
            publication_status: PublicationStatus::Published,
        };
        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Hi",
                "teaser": "",
                "content": "<p>x</p>",
                "imageUrl": "",
                "channelName": "News",
                "publicationStatus": "Published",
            })
        );
    }
}
