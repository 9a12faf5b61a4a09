pub mod error;
pub mod types;

pub use error::{LichenError, LichenResult};
pub use types::{
    Annotation, AnnotationKind, CheerCount, PageContext, Placement, WorldAuthor, WorldImage,
    WorldRecord,
};
