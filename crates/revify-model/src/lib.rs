pub mod error;
pub mod label;
pub mod score;
pub mod summary;

pub use error::{Result, RevifyError};
pub use label::{LabelStyle, SentimentLabel};
pub use score::SentimentScore;
pub use summary::BatchSummary;
