use article_widget_core::language::{EditorSignal, UrlSignal};

/// URL query parameters of the hosting page.
///
/// Hosts expose their current URL parameters as a raw query string; this
/// wraps them behind the [`UrlSignal`] capability.
#[derive(Debug, Clone, Default)]
pub struct UrlParameters {
    pairs: Vec<(String, String)>,
}

impl UrlParameters {
    /// Parse a raw query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = url::form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }
}

impl UrlSignal for UrlParameters {
    fn query_param(&self, name: &str) -> Option<String> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }
}

/// Editor signal for hosts that expose no language tab state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEditorTabs;

impl EditorSignal for NoEditorTabs {
    fn active_tab_marker(&self) -> Option<String> {
        None
    }
}
