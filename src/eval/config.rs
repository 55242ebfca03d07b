use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::{first_duplicate, HAND_SIZE};

use super::errors::EvalError;

/// Что делать с повторяющимися картами в руке.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Отклонить руку с `EvalError::DuplicateCard`.
    #[default]
    Reject,
    /// Оценить как есть (результат может быть бессмысленным).
    Allow,
}

/// Настройки строгой оценки (`try_classify`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EvalConfig {
    /// Сколько карт должно быть в руке. Поддерживается только 5.
    pub hand_size: usize,

    /// Политика для дублей.
    pub duplicates: DuplicatePolicy,

    /// Разрешить руки короче `hand_size`.
    ///
    /// Стрит/флеш для них всегда ложны, пары/сеты/каре считаются как обычно.
    pub allow_short_hands: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            hand_size: HAND_SIZE,
            duplicates: DuplicatePolicy::Reject,
            allow_short_hands: false,
        }
    }
}

impl EvalConfig {
    /// Загрузить конфиг из JSON. Отсутствующие поля берутся из `Default`.
    pub fn from_json_str(json: &str) -> Result<Self, EvalError> {
        let cfg: EvalConfig =
            serde_json::from_str(json).map_err(|e| EvalError::Config(e.to_string()))?;
        cfg.check()?;
        Ok(cfg)
    }

    /// Классификатор знает только 5-карточные руки: другой `hand_size` — ошибка конфига.
    pub fn check(&self) -> Result<(), EvalError> {
        if self.hand_size != HAND_SIZE {
            return Err(EvalError::Config(format!(
                "hand_size должен быть {HAND_SIZE}, получено {}",
                self.hand_size
            )));
        }
        Ok(())
    }

    /// Проверить руку согласно конфигу.
    pub fn validate(&self, cards: &[Card]) -> Result<(), EvalError> {
        self.check()?;

        let actual = cards.len();
        let size_ok = if self.allow_short_hands {
            actual <= self.hand_size
        } else {
            actual == self.hand_size
        };
        if !size_ok {
            return Err(EvalError::WrongHandSize {
                expected: self.hand_size,
                actual,
            });
        }

        if self.duplicates == DuplicatePolicy::Reject {
            if let Some(dup) = first_duplicate(cards) {
                return Err(EvalError::DuplicateCard(dup));
            }
        }

        Ok(())
    }
}
