//! Rule variants: the low-pair floor and paytable overrides each game uses.

use crate::cards::Rank;
use crate::evaluator::Category;
use std::fmt;
use std::str::FromStr;

/// Supported video poker games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Variant {
    AllAmerican,
    TensOrBetter,
    BonusPoker,
    DoubleBonus,
    DoubleBonusBonus,
    #[default]
    JacksOrBetter,
    JacksOrBetter95,
    JacksOrBetter86,
    JacksOrBetter85,
    JacksOrBetter75,
    JacksOrBetter65,
}

impl Variant {
    pub const ALL: [Variant; 11] = [
        Variant::AllAmerican,
        Variant::TensOrBetter,
        Variant::BonusPoker,
        Variant::DoubleBonus,
        Variant::DoubleBonusBonus,
        Variant::JacksOrBetter,
        Variant::JacksOrBetter95,
        Variant::JacksOrBetter86,
        Variant::JacksOrBetter85,
        Variant::JacksOrBetter75,
        Variant::JacksOrBetter65,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Variant::AllAmerican => "All American",
            Variant::TensOrBetter => "Tens or Better",
            Variant::BonusPoker => "Bonus Poker",
            Variant::DoubleBonus => "Double Bonus",
            Variant::DoubleBonusBonus => "Double Bonus Bonus",
            Variant::JacksOrBetter => "Jacks or Better",
            Variant::JacksOrBetter95 => "9/5 Jacks or Better",
            Variant::JacksOrBetter86 => "8/6 Jacks or Better",
            Variant::JacksOrBetter85 => "8/5 Jacks or Better",
            Variant::JacksOrBetter75 => "7/5 Jacks or Better",
            Variant::JacksOrBetter65 => "6/5 Jacks or Better",
        }
    }

    /// Command-line identifier.
    pub const fn slug(self) -> &'static str {
        match self {
            Variant::AllAmerican => "all-american",
            Variant::TensOrBetter => "tens-or-better",
            Variant::BonusPoker => "bonus-poker",
            Variant::DoubleBonus => "double-bonus",
            Variant::DoubleBonusBonus => "double-bonus-bonus",
            Variant::JacksOrBetter => "jacks-or-better",
            Variant::JacksOrBetter95 => "jacks-9-5",
            Variant::JacksOrBetter86 => "jacks-8-6",
            Variant::JacksOrBetter85 => "jacks-8-5",
            Variant::JacksOrBetter75 => "jacks-7-5",
            Variant::JacksOrBetter65 => "jacks-6-5",
        }
    }

    /// Lowest rank a lone pair needs to pay.
    ///
    /// All American pays on any pair, so its floor is the lowest rank rather
    /// than a paytable tweak.
    pub const fn pair_floor(self) -> Rank {
        match self {
            Variant::AllAmerican => Rank::Two,
            Variant::TensOrBetter => Rank::Ten,
            _ => Rank::Jack,
        }
    }

    /// Paytable entries that differ from the Jacks or Better base table.
    pub const fn deltas(self) -> &'static [(Category, u32)] {
        match self {
            Variant::AllAmerican => &[
                (Category::FullHouse, 8),
                (Category::Flush, 8),
                (Category::Straight, 8),
                (Category::Pair, 1),
            ],
            Variant::TensOrBetter | Variant::JacksOrBetter65 => {
                &[(Category::FullHouse, 6), (Category::Flush, 5)]
            }
            Variant::JacksOrBetter95 => &[(Category::Flush, 5)],
            Variant::JacksOrBetter86 => &[(Category::FullHouse, 8)],
            Variant::JacksOrBetter85 => &[(Category::FullHouse, 8), (Category::Flush, 5)],
            Variant::JacksOrBetter75 => &[(Category::FullHouse, 7), (Category::Flush, 5)],
            Variant::BonusPoker
            | Variant::DoubleBonus
            | Variant::DoubleBonusBonus
            | Variant::JacksOrBetter => &[],
        }
    }

    pub fn next(self) -> Variant {
        let i = Self::ALL.iter().position(|&v| v == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Variant {
        let n = Self::ALL.len();
        let i = Self::ALL.iter().position(|&v| v == self).unwrap_or(0);
        Self::ALL[(i + n - 1) % n]
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VariantParseError {
    #[error("unknown variant '{0}' (expected one of: {expected})", expected = slugs())]
    Unknown(String),
}

fn slugs() -> String {
    Variant::ALL.iter().map(|v| v.slug()).collect::<Vec<_>>().join(", ")
}

impl FromStr for Variant {
    type Err = VariantParseError;

    /// Accepts the slug or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Variant::ALL
            .iter()
            .copied()
            .find(|v| v.slug().eq_ignore_ascii_case(t) || v.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| VariantParseError::Unknown(s.to_string()))
    }
}
