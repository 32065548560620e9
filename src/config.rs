use crate::paytable::MAX_PAYOUT;
use crate::variant::Variant;

/// Chips at the start of every session.
pub const DEFAULT_BANKROLL: u64 = 1000;
/// Smallest bet; the player scales it by 1..=5.
pub const DEFAULT_BET_UNIT: u64 = 10;
/// Largest bet multiplier.
pub const MAX_MULTIPLIER: u8 = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("bet unit must be at least 1")]
    ZeroBetUnit,
    #[error("starting bankroll {bankroll} is below the bet unit {bet_unit}")]
    BankrollBelowBet { bankroll: u64, bet_unit: u64 },
    #[error("bankroll {bankroll} with bet unit {bet_unit} could overflow a chip count")]
    TooLarge { bankroll: u64, bet_unit: u64 },
}

/// Values a session starts from, and returns to on every variant change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub starting_bankroll: u64,
    pub bet_unit: u64,
    pub variant: Variant,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_bankroll: DEFAULT_BANKROLL,
            bet_unit: DEFAULT_BET_UNIT,
            variant: Variant::default(),
        }
    }
}

impl SessionConfig {
    /// Checks that a session can start, and that the largest bet and the
    /// bankroll after a max-bet royal flush both fit in a `u64`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bet_unit == 0 {
            return Err(ConfigError::ZeroBetUnit);
        }
        if self.starting_bankroll < self.bet_unit {
            return Err(ConfigError::BankrollBelowBet {
                bankroll: self.starting_bankroll,
                bet_unit: self.bet_unit,
            });
        }
        let top = self
            .bet_unit
            .checked_mul(u64::from(MAX_MULTIPLIER))
            .and_then(|bet| bet.checked_mul(u64::from(MAX_PAYOUT)))
            .and_then(|win| win.checked_add(self.starting_bankroll));
        if top.is_none() {
            return Err(ConfigError::TooLarge {
                bankroll: self.starting_bankroll,
                bet_unit: self.bet_unit,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = SessionConfig::default();
        assert_eq!(c.starting_bankroll, 1000);
        assert_eq!(c.bet_unit, 10);
        assert_eq!(c.variant, Variant::JacksOrBetter);
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn rejects_unplayable_values() {
        let c = SessionConfig { bet_unit: 0, ..SessionConfig::default() };
        assert_eq!(c.validate(), Err(ConfigError::ZeroBetUnit));
        let c = SessionConfig { starting_bankroll: 5, ..SessionConfig::default() };
        assert_eq!(
            c.validate(),
            Err(ConfigError::BankrollBelowBet { bankroll: 5, bet_unit: 10 })
        );
    }

    #[test]
    fn rejects_values_that_could_overflow() {
        let c = SessionConfig {
            starting_bankroll: u64::MAX,
            bet_unit: u64::MAX / 2,
            ..SessionConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::TooLarge { bankroll: u64::MAX, bet_unit: u64::MAX / 2 })
        );
        let c = SessionConfig { starting_bankroll: u64::MAX - 5, ..SessionConfig::default() };
        assert!(matches!(c.validate(), Err(ConfigError::TooLarge { .. })));
        // a max-bet royal on top of the bankroll lands exactly on u64::MAX
        let headroom = 10 * 5 * 800;
        let mut c = SessionConfig { starting_bankroll: u64::MAX - headroom, ..c };
        assert_eq!(c.validate(), Ok(()));
        c.starting_bankroll += 1;
        assert!(c.validate().is_err());
    }
}
