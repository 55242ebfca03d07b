use crate::domain::card::Rank;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// A2345 (wheel) — единственный стрит, где туз младший.
pub const WHEEL_MASK: RankMask =
    mask_from_ranks(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);

/// TJQKA (broadway).
pub const BROADWAY_MASK: RankMask =
    mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]);

/// Значение туза в wheel при сравнении.
pub const ACE_LOW_VALUE: u8 = 1;

/// Получить битовую маску для одного ранга.
pub const fn rank_to_bit(rank: Rank) -> RankMask {
    1u16 << (rank as u8 - 2)
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        mask |= rank_to_bit(ranks[i]);
        i += 1;
    }
    mask
}

/// Ровно 5 разных рангов подряд (max - min == 4) либо wheel.
pub fn is_straight_mask(mask: RankMask) -> bool {
    if mask.count_ones() != 5 {
        return false;
    }
    if mask == WHEEL_MASK {
        return true;
    }
    let low = mask.trailing_zeros();
    let high = 15 - mask.leading_zeros();
    high - low == 4
}

/// Числовые значения рангов для сравнения (по убыванию).
///
/// Для wheel туз опускается вниз: `[5, 4, 3, 2, 1]`.
pub fn straight_comparison_values(ranks_desc: &[Rank]) -> Vec<u8> {
    let mask = ranks_desc
        .iter()
        .fold(0, |m: RankMask, r| m | rank_to_bit(*r));
    if ranks_desc.len() == 5 && mask == WHEEL_MASK {
        return vec![5, 4, 3, 2, ACE_LOW_VALUE];
    }
    ranks_desc.iter().map(|r| r.value()).collect()
}
