use core::iter::FusedIterator;
use serde::{Deserialize, Serialize};

use crate::*;

/// All six cards, indexed by bit position.
pub type Deck = [Card; CARD_COUNT];

/// The deck, built once at compile time.
pub const CARDS: Deck = generate_cards();

/// One card of the trick: every number in `1..=63` with bit `index` set.
///
/// Membership is kept as a bitmask where bit `n` marks number `n`, so the set
/// is fully determined by the index and never changes after construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardIndex", into = "CardIndex")]
pub struct Card {
    index: CardIndex,
    members: u64,
}

impl Card {
    const fn build(index: CardIndex) -> Self {
        let mut members = 0u64;
        let mut number = MIN_NUMBER;
        while number <= MAX_NUMBER {
            if (number >> index) & 1 == 1 {
                members |= 1 << number;
            }
            number += 1;
        }
        Self { index, members }
    }

    pub const fn index(self) -> CardIndex {
        self.index
    }

    pub const fn place_value(self) -> Number {
        place_value(self.index)
    }

    pub const fn contains(self, number: Number) -> bool {
        in_range(number) && (self.members >> number) & 1 == 1
    }

    pub const fn len(self) -> usize {
        self.members.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.members == 0
    }

    /// Members in ascending order.
    pub const fn numbers(self) -> CardNumbers {
        CardNumbers {
            remaining: self.members,
        }
    }
}

impl TryFrom<CardIndex> for Card {
    type Error = GameError;

    fn try_from(index: CardIndex) -> Result<Self> {
        card(index)
    }
}

impl From<Card> for CardIndex {
    fn from(card: Card) -> Self {
        card.index
    }
}

impl IntoIterator for Card {
    type Item = Number;
    type IntoIter = CardNumbers;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers()
    }
}

/// Ascending iterator over the numbers printed on a [`Card`].
#[derive(Clone, Debug)]
pub struct CardNumbers {
    remaining: u64,
}

impl Iterator for CardNumbers {
    type Item = Number;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let number = self.remaining.trailing_zeros() as Number;
        self.remaining &= self.remaining - 1;
        Some(number)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for CardNumbers {}

impl FusedIterator for CardNumbers {}

/// Builds the six cards; card `k` holds exactly the numbers whose bit `k` is set.
pub const fn generate_cards() -> Deck {
    let mut deck = [Card::build(0); CARD_COUNT];
    let mut index = 1;
    while index < CARD_COUNT {
        deck[index] = Card::build(index as CardIndex);
        index += 1;
    }
    deck
}

pub fn card(index: CardIndex) -> Result<Card> {
    CARDS
        .get(usize::from(index))
        .copied()
        .ok_or(GameError::InvalidCardIndex(index))
}
