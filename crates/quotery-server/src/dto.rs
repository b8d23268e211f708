use serde::{Deserialize, Serialize};

use quotery_core::models::{NewQuote, Quote};

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

/// Create/update payload: the three content fields, no identity.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct QuotePayload {
    /// Quotation body, without decorative quotation glyphs
    pub text: String,
    /// Author name
    pub author: String,
    /// Comma-and-space-joined tag list; may be empty
    #[serde(default)]
    pub tags: String,
}

impl From<QuotePayload> for NewQuote {
    fn from(payload: QuotePayload) -> Self {
        NewQuote {
            text: payload.text,
            author: payload.author,
            tags: payload.tags,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct QuoteResponse {
    pub id: i64,
    pub text: String,
    pub author: String,
    pub tags: String,
}

impl From<Quote> for QuoteResponse {
    fn from(q: Quote) -> Self {
        Self {
            id: q.id,
            text: q.text,
            author: q.author,
            tags: q.tags,
        }
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Fixed-message payload (welcome banner, delete confirmation).
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
