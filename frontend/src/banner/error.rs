use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BannerError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element #{id} is missing from the page")]
    MissingElement { id: String },
    #[error("document has no body element")]
    MissingBody,
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl BannerError {
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }
}
