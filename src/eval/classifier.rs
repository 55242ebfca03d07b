use log::{debug, trace};

use crate::domain::card::{Card, Rank};
use crate::domain::hand::HAND_SIZE;

use super::category::HandCategory;
use super::classification::Classification;
use super::config::EvalConfig;
use super::errors::EvalError;
use super::rank_counts::RankCounts;
use super::rank_mask::{is_straight_mask, BROADWAY_MASK};

/// Классификатор одной руки.
///
/// Держит ссылку на карты и мультимножество рангов, посчитанное в `new`.
/// Все предикаты — чистые функции, работают для рук любого размера:
/// для рук короче 5 карт стрит/флеш всегда `false`.
///
/// Пары/сеты/каре считаются по ТОЧНОМУ количеству: сет — не пара,
/// каре — не сет и не пара.
#[derive(Clone, Debug)]
pub struct HandClassifier<'a> {
    cards: &'a [Card],
    counts: RankCounts,
}

impl<'a> HandClassifier<'a> {
    pub fn new(cards: &'a [Card]) -> Self {
        Self {
            cards,
            counts: RankCounts::from_cards(cards),
        }
    }

    /// Хотя бы один ранг ровно с двумя картами.
    pub fn has_pair(&self) -> bool {
        self.counts.has_count(2)
    }

    /// Ровно два ранга ровно с двумя картами.
    pub fn has_two_pair(&self) -> bool {
        self.counts.ranks_with_count(2).count() == 2
    }

    pub fn has_three_of_a_kind(&self) -> bool {
        self.counts.has_count(3)
    }

    pub fn has_four_of_a_kind(&self) -> bool {
        self.counts.has_count(4)
    }

    pub fn has_full_house(&self) -> bool {
        self.has_three_of_a_kind() && self.has_pair()
    }

    /// 5 разных рангов подряд, включая wheel (A2345).
    pub fn has_straight(&self) -> bool {
        self.is_full_hand() && is_straight_mask(self.counts.mask())
    }

    pub fn has_flush(&self) -> bool {
        self.is_full_hand() && self.cards.iter().all(|c| c.suit == self.cards[0].suit)
    }

    pub fn has_straight_flush(&self) -> bool {
        self.has_straight() && self.has_flush()
    }

    /// Флеш из ровно TJQKA.
    pub fn has_royal_flush(&self) -> bool {
        self.has_flush() && self.counts.mask() == BROADWAY_MASK
    }

    /// Ни один из остальных предикатов не выполнен.
    pub fn has_high_card(&self) -> bool {
        !(self.has_pair()
            || self.has_two_pair()
            || self.has_three_of_a_kind()
            || self.has_straight()
            || self.has_flush()
            || self.has_full_house()
            || self.has_four_of_a_kind()
            || self.has_straight_flush()
            || self.has_royal_flush())
    }

    /// Единственная (самая сильная) категория руки.
    pub fn category(&self) -> HandCategory {
        if self.has_royal_flush() {
            HandCategory::RoyalFlush
        } else if self.has_straight_flush() {
            HandCategory::StraightFlush
        } else if self.has_four_of_a_kind() {
            HandCategory::FourOfAKind
        } else if self.has_full_house() {
            HandCategory::FullHouse
        } else if self.has_flush() {
            HandCategory::Flush
        } else if self.has_straight() {
            HandCategory::Straight
        } else if self.has_three_of_a_kind() {
            HandCategory::ThreeOfAKind
        } else if self.has_two_pair() {
            HandCategory::TwoPair
        } else if self.has_pair() {
            HandCategory::Pair
        } else {
            HandCategory::HighCard
        }
    }

    /// Кикеры для категории (от старшего к младшему).
    ///
    /// Для стрита/флеша ранги отдаются как есть: wheel = `[A, 5, 4, 3, 2]`.
    /// То, что wheel слабейший стрит, учитывает `Classification::comparison_key`.
    pub fn kickers(&self, category: HandCategory) -> Vec<Rank> {
        match category {
            HandCategory::RoyalFlush => Vec::new(),
            HandCategory::HighCard
            | HandCategory::Straight
            | HandCategory::Flush
            | HandCategory::StraightFlush
            | HandCategory::FullHouse => self.ranks_desc_except(&[]),
            HandCategory::Pair => self.grouped_kickers(self.counts.highest_with_count(2)),
            HandCategory::ThreeOfAKind => self.grouped_kickers(self.counts.highest_with_count(3)),
            HandCategory::FourOfAKind => self.grouped_kickers(self.counts.highest_with_count(4)),
            HandCategory::TwoPair => {
                let pairs: Vec<Rank> = self.counts.ranks_with_count(2).take(2).collect();
                let mut kickers = pairs.clone();
                kickers.extend(self.ranks_desc_except(&pairs));
                kickers
            }
        }
    }

    /// Категория + кикеры.
    pub fn classification(&self) -> Classification {
        let category = self.category();
        Classification::new(category, self.kickers(category))
    }

    fn is_full_hand(&self) -> bool {
        self.cards.len() == HAND_SIZE
    }

    /// `[group, остальные по убыванию]`; без группы — просто все ранги.
    fn grouped_kickers(&self, group: Option<Rank>) -> Vec<Rank> {
        match group {
            Some(rank) => {
                let mut kickers = vec![rank];
                kickers.extend(self.ranks_desc_except(&[rank]));
                kickers
            }
            None => self.ranks_desc_except(&[]),
        }
    }

    fn ranks_desc_except(&self, skip: &[Rank]) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self
            .cards
            .iter()
            .map(|c| c.rank)
            .filter(|r| !skip.contains(r))
            .collect();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks
    }
}

/// Классифицировать руку. Никогда не паникует, для любого размера руки.
pub fn classify<H>(hand: &H) -> Classification
where
    H: AsRef<[Card]> + ?Sized,
{
    let cards = hand.as_ref();
    let classification = HandClassifier::new(cards).classification();
    trace!("classify: {} карт -> {}", cards.len(), classification);
    classification
}

/// Строгая классификация: сначала проверка руки по конфигу.
pub fn try_classify<H>(hand: &H, config: &EvalConfig) -> Result<Classification, EvalError>
where
    H: AsRef<[Card]> + ?Sized,
{
    let cards = hand.as_ref();
    if let Err(err) = config.validate(cards) {
        debug!("try_classify: рука отклонена: {err}");
        return Err(err);
    }
    Ok(classify(cards))
}

/// Проверка руки с настройками по умолчанию (5 карт, без дублей).
pub fn validate_hand(cards: &[Card]) -> Result<(), EvalError> {
    EvalConfig::default().validate(cards)
}
