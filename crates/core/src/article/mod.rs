pub mod model;
pub mod select;

pub use model::{
    ArticleImage, Channel, ChannelConfig, ChannelLocalization, ImageVariant, LocalizedContent,
    PublicationStatus, RawArticleData, ResolvedArticle,
};
pub use select::{select_fields, SelectError};
