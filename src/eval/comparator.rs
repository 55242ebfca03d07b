use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

use super::classification::Classification;
use super::classifier::classify;

/// Вердикт сравнения двух рук.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Verdict {
    FirstWins,
    SecondWins,
    Equal,
}

impl From<Ordering> for Verdict {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Verdict::FirstWins,
            Ordering::Less => Verdict::SecondWins,
            Ordering::Equal => Verdict::Equal,
        }
    }
}

impl From<Verdict> for Ordering {
    fn from(v: Verdict) -> Self {
        match v {
            Verdict::FirstWins => Ordering::Greater,
            Verdict::SecondWins => Ordering::Less,
            Verdict::Equal => Ordering::Equal,
        }
    }
}

impl Verdict {
    /// Тот же результат с точки зрения второй руки.
    pub fn reversed(self) -> Self {
        Ordering::from(self).reverse().into()
    }
}

/// Категория, затем ключ сравнения — поэлементно, до первого различия.
pub(crate) fn compare_ordering(a: &Classification, b: &Classification) -> Ordering {
    a.category()
        .cmp(&b.category())
        .then_with(|| a.comparison_key().cmp(&b.comparison_key()))
}

/// Сравнить две классификации.
pub fn compare(a: &Classification, b: &Classification) -> Verdict {
    compare_ordering(a, b).into()
}

/// Классифицировать и сравнить две руки.
pub fn compare_hands<H1, H2>(first: &H1, second: &H2) -> Verdict
where
    H1: AsRef<[Card]> + ?Sized,
    H2: AsRef<[Card]> + ?Sized,
{
    compare(&classify(first), &classify(second))
}
