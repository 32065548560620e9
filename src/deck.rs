use crate::cards::{Card, Rank, Suit};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards in a standard deck.
pub const CARDS_IN_DECK: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("no cards left in the deck")]
    Exhausted,
    #[error("card already dealt: {0}")]
    AlreadyDealt(Card),
}

/// The 52 canonical cards plus a dealt flag per card.
///
/// Cards never leave the deck; drawing flips the flag, and `reset` clears every
/// flag. The available and dealt sets are therefore always disjoint and together
/// cover the whole deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: [Card; CARDS_IN_DECK],
    dealt: [bool; CARDS_IN_DECK],
    dealt_count: usize,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Deck driven by an explicit RNG.
    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        let mut cards = [Card::new(Rank::Two, Suit::Clubs); CARDS_IN_DECK];
        for s in Suit::ALL {
            for r in Rank::ALL {
                let card = Card::new(r, s);
                cards[card.index()] = card;
            }
        }
        Self { cards, dealt: [false; CARDS_IN_DECK], dealt_count: 0, rng }
    }

    /// Reproducible deck for tests and replays.
    ///
    /// ```
    /// use video_poker::deck::Deck;
    ///
    /// let mut a = Deck::seeded(42);
    /// let mut b = Deck::seeded(42);
    /// assert_eq!(a.draw_random(), b.draw_random());
    /// assert_eq!(a.available(), 51);
    /// ```
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Deck seeded once from the process RNG. The seed is logged so the session
    /// can be replayed with [`Deck::seeded`].
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::random();
        log::info!("deck seeded with {seed}");
        Self::seeded(seed)
    }

    /// The canonical card order (independent of dealt state).
    pub fn cards(&self) -> &[Card; CARDS_IN_DECK] {
        &self.cards
    }

    pub fn available(&self) -> usize {
        CARDS_IN_DECK - self.dealt_count
    }

    pub fn dealt(&self) -> usize {
        self.dealt_count
    }

    pub fn is_dealt(&self, card: Card) -> bool {
        self.dealt[card.index()]
    }

    /// Mark every card available again.
    pub fn reset(&mut self) {
        self.dealt = [false; CARDS_IN_DECK];
        self.dealt_count = 0;
    }

    /// Draw a card uniformly at random among the available ones.
    ///
    /// Probes the full deck at most `CARDS_IN_DECK` times; if every probe lands
    /// on a dealt card, falls back to picking by position among the available
    /// cards. Both paths are uniform over the available set.
    pub fn draw_random(&mut self) -> Result<Card, DeckError> {
        if self.dealt_count == CARDS_IN_DECK {
            return Err(DeckError::Exhausted);
        }
        for _ in 0..CARDS_IN_DECK {
            let i = self.rng.random_range(0..CARDS_IN_DECK);
            if !self.dealt[i] {
                return Ok(self.mark(i));
            }
        }
        let nth = self.rng.random_range(0..self.available());
        let i = (0..CARDS_IN_DECK)
            .filter(|&i| !self.dealt[i])
            .nth(nth)
            .ok_or(DeckError::Exhausted)?;
        Ok(self.mark(i))
    }

    /// Deal a specific card, e.g. to stack a hand.
    pub fn take(&mut self, card: Card) -> Result<Card, DeckError> {
        let i = card.index();
        if self.dealt[i] {
            return Err(DeckError::AlreadyDealt(card));
        }
        Ok(self.mark(i))
    }

    fn mark(&mut self, i: usize) -> Card {
        self.dealt[i] = true;
        self.dealt_count += 1;
        self.cards[i]
    }
}
