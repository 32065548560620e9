use crate::cards::{Card, Rank, Suit};
use crate::hand::HAND_SIZE;

/// Pre-computed view of a 5-card hand, shared by all category detectors.
///
/// Cards are sorted by ascending rank; the order among equal ranks is irrelevant
/// to every detector.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; HAND_SIZE],
    pub ranks: [Rank; HAND_SIZE],
    pub is_flush: bool,
    pub is_straight: bool,
    /// Lowest rank a lone pair must reach to qualify.
    pub pair_floor: Rank,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; HAND_SIZE], pair_floor: Rank) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by_key(|c| c.rank());

        let ranks = sorted_cards.map(|c| c.rank());
        let is_flush = same_suit(&sorted_cards);
        let is_straight = is_run(&ranks);

        Self { sorted_cards, ranks, is_flush, is_straight, pair_floor }
    }

    /// True if sorted slots `a` and `b` hold the same rank.
    pub fn same(&self, a: usize, b: usize) -> bool {
        self.ranks[a] == self.ranks[b]
    }

    pub fn lowest(&self) -> Rank {
        self.ranks[0]
    }
}

fn same_suit(cards: &[Card; HAND_SIZE]) -> bool {
    let suit: Suit = cards[0].suit();
    cards.iter().all(|c| c.suit() == suit)
}

/// Five consecutive ranks, or the wheel: A-2-3-4-5 with the Ace playing low.
fn is_run(ranks: &[Rank; HAND_SIZE]) -> bool {
    let consecutive = ranks.windows(2).all(|w| w[1].value() == w[0].value() + 1);
    consecutive || *ranks == [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace]
}
