use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::str::FromStr;

/// Number of card slots in a hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly five cards, got {0}")]
    CardCount(usize),
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Five distinct cards, in slot order as dealt.
///
/// ```
/// use video_poker::hand::Hand;
///
/// let hand: Hand = "As Ks Qs Js Ts".parse().unwrap();
/// assert_eq!(hand.to_string(), "As Ks Qs Js Ts");
/// assert!("As As Qs Js Ts".parse::<Hand>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != HAND_SIZE {
            return Err(HandError::DuplicateCards);
        }
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::CardCount(slice.len()))?;
        Self::try_new(cards)
    }

    /// Hand straight off the deck, which never repeats a card.
    pub(crate) fn from_dealt(cards: [Card; HAND_SIZE]) -> Self {
        debug_assert!(Self::try_new(cards).is_ok(), "deck dealt a duplicate");
        Self(cards)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    /// Put `card` into `slot`. The caller guarantees the card is not already in
    /// the hand (the deck never hands out a dealt card twice).
    pub(crate) fn replace(&mut self, slot: usize, card: Card) {
        debug_assert!(!self.0.contains(&card));
        self.0[slot] = card;
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Hold flags, one per hand slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoldSet([bool; HAND_SIZE]);

impl HoldSet {
    pub fn all() -> Self {
        Self([true; HAND_SIZE])
    }

    pub fn is_held(&self, slot: usize) -> bool {
        self.0.get(slot).copied().unwrap_or(false)
    }

    /// Flip the flag for `slot`; returns false if the slot does not exist.
    pub fn toggle(&mut self, slot: usize) -> bool {
        match self.0.get_mut(slot) {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.0 = [false; HAND_SIZE];
    }

    pub fn flags(&self) -> [bool; HAND_SIZE] {
        self.0
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&h| h).count()
    }
}
