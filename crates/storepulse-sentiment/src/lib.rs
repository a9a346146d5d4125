//! Review cleaning, sentiment scoring and per-app aggregation for the
//! summarization stage.

pub mod aggregate;
pub mod drivers;
pub mod error;
pub mod normalize;
pub mod scorer;

pub use aggregate::{annotate_review, summarize_app};
pub use drivers::{detect_drivers, DRIVER_VOCABULARY};
pub use error::SentimentError;
pub use normalize::clean_text;
pub use scorer::{sentiment_score, LexiconPolarity, PolarityEstimator, NEUTRAL_SCORE};
