pub mod resolve;
pub mod signals;

pub use resolve::{resolve_language, WidgetMode};
pub use signals::{EditorSignal, UrlSignal};
