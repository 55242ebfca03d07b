use crate::domain::card::{Card, Rank};

use super::rank_mask::{rank_to_bit, RankMask};

/// Сколько карт каждого ранга в руке (мультимножество рангов).
///
/// Индексы 0..14, используем 2..14. Строится заново на каждую
/// классификацию и наружу не отдаётся.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RankCounts([u8; 15]);

impl RankCounts {
    pub(crate) fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            let idx = card.rank.value() as usize;
            counts[idx] = counts[idx].saturating_add(1);
        }
        Self(counts)
    }

    pub(crate) fn count(&self, rank: Rank) -> u8 {
        self.0[rank.value() as usize]
    }

    /// Ранги ровно с `n` картами, от старшего к младшему.
    pub(crate) fn ranks_with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ALL
            .iter()
            .rev()
            .copied()
            .filter(move |&r| self.count(r) == n)
    }

    /// Старший ранг ровно с `n` картами.
    pub(crate) fn highest_with_count(&self, n: u8) -> Option<Rank> {
        self.ranks_with_count(n).next()
    }

    pub(crate) fn has_count(&self, n: u8) -> bool {
        self.highest_with_count(n).is_some()
    }

    pub(crate) fn mask(&self) -> RankMask {
        Rank::ALL
            .iter()
            .filter(|&&r| self.count(r) > 0)
            .fold(0, |m, &r| m | rank_to_bit(r))
    }
}
