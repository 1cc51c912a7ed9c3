//! Core resolution logic for the article content widget.
//!
//! Everything here is pure and host-agnostic: the raw payload model, the
//! language-override resolution, and the per-field localization fallback.
//! Fetching and host wiring live in `article-widget-client`.

pub mod article;
pub mod language;
