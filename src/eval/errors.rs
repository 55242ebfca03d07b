use crate::domain::card::Card;

use thiserror::Error;

/// Ошибки строгой проверки руки перед оценкой.
///
/// `classify` никогда их не возвращает — только `try_classify`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Ожидалось {expected} карт в руке, получено {actual}")]
    WrongHandSize { expected: usize, actual: usize },

    #[error("Карта {0} встречается в руке дважды")]
    DuplicateCard(Card),

    #[error("Некорректный конфиг оценщика: {0}")]
    Config(String),
}
