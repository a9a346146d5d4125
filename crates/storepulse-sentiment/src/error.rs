use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("polarity estimator failed: {0}")]
    Estimator(String),

    #[error("polarity {0} is outside [-1, 1]")]
    OutOfRange(f64),
}
