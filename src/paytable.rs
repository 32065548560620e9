use crate::evaluator::Category;
use crate::variant::Variant;

/// Jacks or Better multipliers, indexed by [`Category::ordinal`].
const BASE: [u32; 10] = [
    0,   // nothing
    1,   // pair
    2,   // two pair
    3,   // three of a kind
    4,   // straight
    6,   // flush
    9,   // full house
    25,  // four of a kind
    50,  // straight flush
    800, // royal flush
];

/// Largest multiplier in any variant's table (the royal flush).
pub const MAX_PAYOUT: u32 = 800;

/// Payout multiplier per unit of bet for every category.
///
/// A paytable is derived once per variant and never modified afterwards;
/// switching variants derives a new one from the base table.
///
/// ```
/// use video_poker::evaluator::Category;
/// use video_poker::paytable::Paytable;
/// use video_poker::variant::Variant;
///
/// let table = Paytable::for_variant(Variant::JacksOrBetter85);
/// assert_eq!(table.multiplier(Category::FullHouse), 8);
/// assert_eq!(table.multiplier(Category::Flush), 5);
/// assert_eq!(table.payout(Category::RoyalFlush, 10), 8000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paytable {
    variant: Variant,
    multipliers: [u32; 10],
}

impl Paytable {
    /// The unmodified Jacks or Better table.
    pub const fn base() -> Self {
        Self { variant: Variant::JacksOrBetter, multipliers: BASE }
    }

    pub fn for_variant(variant: Variant) -> Self {
        let mut multipliers = BASE;
        for &(category, m) in variant.deltas() {
            multipliers[category.ordinal() as usize] = m;
        }
        Self { variant, multipliers }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn multiplier(&self, category: Category) -> u32 {
        self.multipliers[category.ordinal() as usize]
    }

    /// Chips returned for `category` at the given bet.
    pub fn payout(&self, category: Category, bet: u64) -> u64 {
        u64::from(self.multiplier(category)).saturating_mul(bet)
    }

    /// Rows strongest first, for display.
    pub fn rows(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.multiplier(c)))
    }
}

impl Default for Paytable {
    fn default() -> Self {
        Self::base()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_table_values() {
        let t = Paytable::base();
        let expected = [800, 50, 25, 9, 6, 4, 3, 2, 1, 0];
        for ((_, m), e) in t.rows().zip(expected) {
            assert_eq!(m, e);
        }
    }

    #[test]
    fn deltas_do_not_leak_between_variants() {
        let all_american = Paytable::for_variant(Variant::AllAmerican);
        assert_eq!(all_american.multiplier(Category::Straight), 8);
        // deriving another variant afterwards starts from the base again
        let jacks = Paytable::for_variant(Variant::JacksOrBetter);
        assert_eq!(jacks, Paytable::base());
        assert_eq!(jacks.multiplier(Category::Straight), 4);
    }

    #[test]
    fn six_five_and_tens_share_a_table() {
        let a = Paytable::for_variant(Variant::TensOrBetter);
        let b = Paytable::for_variant(Variant::JacksOrBetter65);
        assert_eq!(a.multipliers, b.multipliers);
        assert_eq!(a.multiplier(Category::FullHouse), 6);
        assert_eq!(a.multiplier(Category::Flush), 5);
    }

    #[test]
    fn no_variant_pays_above_the_royal() {
        for v in Variant::ALL {
            assert!(Paytable::for_variant(v).rows().all(|(_, m)| m <= MAX_PAYOUT));
        }
        assert_eq!(Paytable::base().multiplier(Category::RoyalFlush), MAX_PAYOUT);
    }

    #[test]
    fn payout_saturates_instead_of_wrapping() {
        assert_eq!(Paytable::base().payout(Category::RoyalFlush, u64::MAX / 2), u64::MAX);
    }

    #[test]
    fn nothing_never_pays() {
        for v in Variant::ALL {
            assert_eq!(Paytable::for_variant(v).payout(Category::Nothing, 50), 0);
        }
    }
}
