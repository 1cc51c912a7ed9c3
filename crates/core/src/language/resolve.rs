use super::signals::{EditorSignal, UrlSignal};

/// Where the widget is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetMode {
    /// Inside the CMS editor, where the selected language tab overrides the
    /// requested language.
    Editor,
    /// In the rendered view, where a `language` URL parameter overrides it.
    Viewer,
}

/// Determine the effective display language for one resolution cycle.
///
/// Precedence: editor tab override, then URL parameter override, then the
/// caller-supplied `requested_language`. Never fails; any absent or
/// unusable signal degrades to `requested_language`.
pub fn resolve_language(
    mode: WidgetMode,
    editor: &impl EditorSignal,
    url: &impl UrlSignal,
    requested_language: &str,
) -> String {
    match mode {
        WidgetMode::Editor => editor
            .active_tab_marker()
            .and_then(|marker| language_from_marker(&marker))
            .unwrap_or_else(|| requested_language.to_string()),
        WidgetMode::Viewer => url
            .query_param("language")
            .filter(|lang| !lang.is_empty())
            .unwrap_or_else(|| requested_language.to_string()),
    }
}

/// Language tag of a tab marker: the segment after the last `-`.
fn language_from_marker(marker: &str) -> Option<String> {
    match marker.rsplit('-').next() {
        Some(tag) if !tag.is_empty() => Some(tag.to_string()),
        _ => None,
    }
}
