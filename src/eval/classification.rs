use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

use super::category::HandCategory;
use super::comparator::compare_ordering;
use super::rank_mask::straight_comparison_values;

/// Результат классификации руки: категория + кикеры.
///
/// Неизменяемое значение. Сравнение (`Ord`) — сначала категория,
/// потом `comparison_key()` поэлементно. Равенство и хеш — по тем же полям,
/// иначе `cmp == Equal` и `!=` могли бы выполняться одновременно.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Classification {
    category: HandCategory,
    kickers: Vec<Rank>,
}

impl Classification {
    pub fn new(category: HandCategory, kickers: Vec<Rank>) -> Self {
        Self { category, kickers }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Кикеры в том виде, в каком их отдаёт классификатор.
    pub fn kickers(&self) -> &[Rank] {
        &self.kickers
    }

    /// Числовая последовательность, по которой реально сравниваются
    /// руки одной категории.
    ///
    /// Совпадает со значениями кикеров, кроме двух случаев:
    ///   - wheel (A2345) сравнивается как `[5, 4, 3, 2, 1]`;
    ///   - фулл-хаус сравнивается как `[сет x3, пара x2]`.
    pub fn comparison_key(&self) -> Vec<u8> {
        match self.category {
            HandCategory::Straight | HandCategory::StraightFlush => {
                straight_comparison_values(&self.kickers)
            }
            HandCategory::FullHouse => grouped_by_multiplicity(&self.kickers),
            _ => self.kickers.iter().map(|r| r.value()).collect(),
        }
    }
}

/// Ранги, сгруппированные по числу повторов (больше — раньше), внутри группы по убыванию.
fn grouped_by_multiplicity(ranks: &[Rank]) -> Vec<u8> {
    let mut groups: Vec<(usize, Rank)> = Vec::with_capacity(ranks.len());
    for &rank in ranks {
        if !groups.iter().any(|&(_, r)| r == rank) {
            let n = ranks.iter().filter(|&&r| r == rank).count();
            groups.push((n, rank));
        }
    }
    groups.sort_by(|a, b| b.cmp(a));

    groups
        .into_iter()
        .flat_map(|(n, rank)| std::iter::repeat(rank.value()).take(n))
        .collect()
}

impl PartialEq for Classification {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.comparison_key() == other.comparison_key()
    }
}

impl Eq for Classification {}

impl Hash for Classification {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.category.hash(state);
        self.comparison_key().hash(state);
    }
}

impl PartialOrd for Classification {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Classification {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_ordering(self, other)
    }
}

impl fmt::Display for Classification {
    /// Формат вида `Two pair [A K 9]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category)?;
        for (i, rank) in self.kickers.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{rank}")?;
        }
        write!(f, "]")
    }
}
