//! Модуль оценки силы 5-карточной покерной руки.
//!
//! Основные функции:
//!   `classify(hand) -> Classification`
//!   `compare(a, b) -> Verdict`

pub mod category;
pub mod classification;
pub mod classifier;
pub mod comparator;
pub mod config;
pub mod errors;
pub mod rank_mask;

mod rank_counts;

pub use category::HandCategory;
pub use classification::Classification;
pub use classifier::{classify, try_classify, validate_hand, HandClassifier};
pub use comparator::{compare, compare_hands, Verdict};
pub use config::{DuplicatePolicy, EvalConfig};
pub use errors::EvalError;
