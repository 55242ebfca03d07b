use core::fmt;
use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, CardParseError};

/// Стандартный размер оцениваемой руки.
pub const HAND_SIZE: usize = 5;

/// Рука игрока — просто список карт.
///
/// Размер и уникальность карт здесь НЕ проверяются: это контракт
/// вызывающей стороны (раздача). Проверку делает `eval::validate_hand`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

/// Ошибка разбора руки из строки.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HandParseError {
    #[error("Карта `{token}` не распознана: {source}")]
    Card {
        token: String,
        #[source]
        source: CardParseError,
    },
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn has_duplicates(&self) -> bool {
        first_duplicate(&self.cards).is_some()
    }
}

/// Первая карта, встретившаяся повторно (если есть).
pub fn first_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards.iter().copied().find(|c| !seen.insert(*c))
}

impl AsRef<[Card]> for Hand {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Парсинг строки вида "Ah Ad Kc Ks 9h" (разделители — пробелы или запятые).
impl FromStr for Hand {
    type Err = HandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|ch: char| ch.is_whitespace() || ch == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<Card>().map_err(|source| HandParseError::Card {
                    token: token.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Hand { cards })
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
