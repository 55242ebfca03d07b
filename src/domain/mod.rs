//! Доменная модель: карты, рука, колода.
//!
//! Оценщик (`crate::eval`) зависит только от `Card`/`Rank`/`Suit`.

pub mod card;
pub mod deck;
pub mod hand;

pub use card::*;
pub use deck::*;
pub use hand::*;
