use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::Category;

/// Strategy pattern: each detector recognizes one payout category.
///
/// Detectors only test their own raw shape. Precedence comes from the order of
/// [`DETECTORS`]: a four of a kind also looks like trips and a pair, so the
/// lower detectors must never run before the higher ones have failed.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: a suited straight whose lowest card is the Ten.
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush && analysis.is_straight && analysis.lowest() == Rank::Ten
    }
}

/// Straight Flush: any other suited straight, the wheel included.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush && analysis.is_straight
    }
}

/// Four of a Kind: the middle three match, plus one of the ends.
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, a: &HandAnalysis) -> bool {
        a.same(1, 2) && a.same(2, 3) && (a.same(0, 2) || a.same(4, 2))
    }
}

/// Full House: pair below trips, or trips below pair.
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, a: &HandAnalysis) -> bool {
        (a.same(0, 1) && a.same(2, 3) && a.same(3, 4))
            || (a.same(3, 4) && a.same(0, 1) && a.same(1, 2))
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight
    }
}

/// Three of a Kind: three consecutive sorted slots share a rank.
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, a: &HandAnalysis) -> bool {
        (0..3).any(|i| a.same(i, i + 1) && a.same(i + 1, i + 2))
    }
}

/// Two Pair: the three slot pairings that can hold two disjoint pairs.
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, a: &HandAnalysis) -> bool {
        (a.same(0, 1) && a.same(2, 3))
            || (a.same(0, 1) && a.same(3, 4))
            || (a.same(1, 2) && a.same(3, 4))
    }
}

/// Pair: an adjacent pair at or above the variant's floor.
pub struct QualifyingPairDetector;

impl CategoryDetector for QualifyingPairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, a: &HandAnalysis) -> bool {
        (0..4).any(|i| a.same(i, i + 1) && a.ranks[i] >= a.pair_floor)
    }
}

/// Nothing: always matches as the fallback.
pub struct NothingDetector;

impl CategoryDetector for NothingDetector {
    fn category(&self) -> Category {
        Category::Nothing
    }

    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &QualifyingPairDetector,
    &NothingDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Hand;

    fn analyze(s: &str) -> HandAnalysis {
        let hand: Hand = s.parse().unwrap();
        HandAnalysis::new(hand.cards(), Rank::Jack)
    }

    #[test]
    fn detectors_are_listed_in_category_order() {
        for (d, c) in DETECTORS.iter().zip(Category::ALL) {
            assert_eq!(d.category(), c);
        }
    }

    #[test]
    fn four_of_a_kind_with_low_kicker() {
        let a = analyze("2c 9s 9h 9d 9c");
        assert!(FourOfAKindDetector.detect(&a));
        // trips and pairs are present too; only ordering keeps them out
        assert!(ThreeOfAKindDetector.detect(&a));
        assert!(TwoPairDetector.detect(&a));
    }

    #[test]
    fn full_house_both_shapes() {
        assert!(FullHouseDetector.detect(&analyze("3c 3d Kh Ks Kd")));
        assert!(FullHouseDetector.detect(&analyze("3c 3d 3h Ks Kd")));
        assert!(!FullHouseDetector.detect(&analyze("3c 3d 4h Ks Kd")));
    }

    #[test]
    fn two_pair_pairings() {
        assert!(TwoPairDetector.detect(&analyze("4c 4d 7h 7s Kd")));
        assert!(TwoPairDetector.detect(&analyze("4c 4d 7h Ks Kd")));
        assert!(TwoPairDetector.detect(&analyze("2c 4d 4h Ks Kd")));
        assert!(!TwoPairDetector.detect(&analyze("2c 4d 4h 9s Kd")));
    }

    #[test]
    fn pair_respects_floor() {
        assert!(!QualifyingPairDetector.detect(&analyze("Tc Td 2h 5s 8d")));
        assert!(QualifyingPairDetector.detect(&analyze("Jc Jd 2h 5s 8d")));
        let hand: Hand = "Tc Td 2h 5s 8d".parse().unwrap();
        let tens = HandAnalysis::new(hand.cards(), Rank::Ten);
        assert!(QualifyingPairDetector.detect(&tens));
    }

    #[test]
    fn royal_needs_ten_low() {
        let royal = analyze("Ts Js Qs Ks As");
        assert!(RoyalFlushDetector.detect(&royal));
        let steel_wheel = analyze("As 2s 3s 4s 5s");
        assert!(!RoyalFlushDetector.detect(&steel_wheel));
        assert!(StraightFlushDetector.detect(&steel_wheel));
    }
}
