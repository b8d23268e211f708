use crate::error::AppError;

/// A persisted quotation.
///
/// `id` is assigned by the store on insertion and is never reassigned:
/// updates replace the three content fields, deletes retire the id for
/// the lifetime of the table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Quote {
    pub id: i64,
    pub text: String,
    pub author: String,
    /// `", "`-joined tag tokens, possibly empty.
    pub tags: String,
}

/// A quotation payload without identity, as produced by the extractor or
/// accepted by the create/update operations.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NewQuote {
    pub text: String,
    pub author: String,
    pub tags: String,
}

impl NewQuote {
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            tags: tags.into(),
        }
    }

    /// Required-field check: `text` and `author` must be non-empty.
    /// `tags` may be empty.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.text.is_empty() {
            return Err(AppError::ValidationError("text must not be empty".into()));
        }
        if self.author.is_empty() {
            return Err(AppError::ValidationError("author must not be empty".into()));
        }
        Ok(())
    }

    /// Attach a store-assigned id.
    pub fn into_quote(self, id: i64) -> Quote {
        Quote {
            id,
            text: self.text,
            author: self.author,
            tags: self.tags,
        }
    }
}
