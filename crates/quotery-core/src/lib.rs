pub mod error;
pub mod models;
pub mod testutil;
pub mod traits;

pub use error::AppError;
pub use models::{NewQuote, Quote};
pub use traits::{PageSource, QuoteStore};
