//! Injected host-environment accessors for language override detection.
//!
//! The hosting CMS exposes the active editor tab and the page's URL
//! parameters through its own globals. The resolver never reaches for those
//! directly; hosts (and tests) hand in these read-only capabilities instead.

/// Read-only view of the editor's language tab state.
pub trait EditorSignal {
    /// Marker of the currently selected language tab, if any.
    ///
    /// Markers carry the language tag as their last `-`-separated segment,
    /// e.g. `content-tab-fr_FR`.
    fn active_tab_marker(&self) -> Option<String>;
}

/// Read-only view of the hosting page's URL query parameters.
pub trait UrlSignal {
    /// Value of the named query parameter, if present.
    fn query_param(&self, name: &str) -> Option<String>;
}

impl<F> EditorSignal for F
where
    F: Fn() -> Option<String>,
{
    fn active_tab_marker(&self) -> Option<String> {
        self()
    }
}

impl<F> UrlSignal for F
where
    F: Fn(&str) -> Option<String>,
{
    fn query_param(&self, name: &str) -> Option<String> {
        self(name)
    }
}
