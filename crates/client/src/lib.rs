//! Host-facing half of the article widget: configuration, the HTTP fetch
//! boundary, concrete signal sources, and the display-cycle driver that
//! publishes resolved articles.

pub mod config;
pub mod fetch;
pub mod resolver;
pub mod signals;
