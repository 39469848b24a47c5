//! Pure aggregation over a collection of stored reviews: rating
//! distribution, top tag mentions, and the blended sentiment score the
//! gauge renders. Recomputed on demand, never persisted.

pub mod aggregate;
pub mod model;
pub mod sentiment;

pub use aggregate::{aggregate, TOP_TAG_LIMIT};
pub use model::*;
pub use sentiment::SentimentBand;
