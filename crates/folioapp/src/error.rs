use crate::model::Collection;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("No {collection} entry with slug `{slug}`")]
    NotFound { collection: Collection, slug: String },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Detail record for {collection} entry `{slug}` is missing")]
    DetailMissing { collection: Collection, slug: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl FolioError {
    pub fn not_found(collection: Collection, slug: impl Into<String>) -> Self {
        Self::NotFound {
            collection,
            slug: slug.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// True for lookups of a slug absent from the index (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for input rejected before any storage mutation (HTTP 400).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True for failures of the underlying storage.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Serialization(_) | Self::Store(_) | Self::DetailMissing { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_error_kinds() {
        assert!(FolioError::not_found(Collection::Blog, "x").is_not_found());
        assert!(FolioError::validation("title is required").is_validation());
        assert!(FolioError::Store("disk full".into()).is_storage());
        assert!(!FolioError::Config("bad".into()).is_storage());
    }

    #[test]
    fn not_found_message_names_collection_and_slug() {
        let err = FolioError::not_found(Collection::Gallery, "sunset");
        assert_eq!(err.to_string(), "No gallery entry with slug `sunset`");
    }
}
