pub(crate) mod detector;
pub(crate) mod hand_analysis;

use crate::cards::{Card, Rank};
use crate::hand::{Hand, HAND_SIZE};
use crate::variant::Variant;
use std::fmt;

/// Payout category from weakest to strongest.
///
/// `Pair` means a *qualifying* pair under the active variant; a pair below the
/// floor is `Nothing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    Nothing = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// Every category, strongest first (the order hands are tested in).
    pub const ALL: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::Nothing,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::RoyalFlush => "Royal Flush",
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::Pair => "Pair",
            Category::Nothing => "Nothing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a hand under the rules of `variant`.
///
/// ```
/// use video_poker::evaluator::{evaluate, Category};
/// use video_poker::hand::Hand;
/// use video_poker::variant::Variant;
///
/// let hand: Hand = "Tc Td 2h 5s 8d".parse().unwrap();
/// assert_eq!(evaluate(&hand, Variant::JacksOrBetter), Category::Nothing);
/// assert_eq!(evaluate(&hand, Variant::TensOrBetter), Category::Pair);
/// ```
pub fn evaluate(hand: &Hand, variant: Variant) -> Category {
    evaluate_five(hand.cards(), variant.pair_floor())
}

/// Classify exactly five cards given the lowest qualifying pair rank.
///
/// Pure: the result depends only on the arguments.
pub fn evaluate_five(cards: &[Card; HAND_SIZE], pair_floor: Rank) -> Category {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards, pair_floor);

    // First match wins; the list runs strongest to weakest.
    for detector in DETECTORS.iter() {
        if detector.detect(&analysis) {
            return detector.category();
        }
    }

    unreachable!("Nothing detector should always match")
}
