//! Оценка силы покерной руки.
//!
//! Ядро — две чистые функции без состояния:
//!   - `eval::classify(hand)` — категория + кикеры для 5-карточной руки;
//!   - `eval::compare(a, b)` — полный порядок на классификациях.
//!
//! Карты и рука (`domain`) — простые контейнеры данных.
//! Библиотека пишет логи через `log`, но логгер не устанавливает.

pub mod domain;
pub mod eval;

pub use domain::{Card, Hand, Rank, Suit};
pub use eval::{classify, compare, compare_hands, Classification, HandCategory, Verdict};
