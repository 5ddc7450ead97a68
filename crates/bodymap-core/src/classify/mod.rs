pub mod engine;
pub mod normalize;

pub use engine::{classify, classify_detailed, Classification, MatchMethod};
pub use normalize::normalize_label;
