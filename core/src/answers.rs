use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Sums the place values of every card answered with "yes".
///
/// Answer `i` is about card `i`. Total over all inputs: no answers gives `0`,
/// all answers gives [`MAX_NUMBER`].
pub const fn decode(answers: &[bool; CARD_COUNT]) -> Number {
    let mut number = 0;
    let mut index = 0;
    while index < CARD_COUNT {
        if answers[index] {
            number += place_value(index as CardIndex);
        }
        index += 1;
    }
    number
}

/// The six answers of a round, stored in card order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerSheet([bool; CARD_COUNT]);

impl AnswerSheet {
    pub const fn new(answers: [bool; CARD_COUNT]) -> Self {
        Self(answers)
    }

    /// The answers an honest player thinking of `number` would give.
    pub fn for_number(number: Number) -> Result<Self> {
        if !in_range(number) {
            return Err(GameError::NumberOutOfRange(number));
        }
        Ok(Self(CARDS.map(|card| card.contains(number))))
    }

    pub const fn decode(&self) -> Number {
        decode(&self.0)
    }

    pub fn get(&self, index: CardIndex) -> Result<bool> {
        self.0
            .get(usize::from(index))
            .copied()
            .ok_or(GameError::InvalidCardIndex(index))
    }

    pub const fn as_array(&self) -> &[bool; CARD_COUNT] {
        &self.0
    }

    /// Cards answered with "yes", in card order.
    pub fn yes_cards(&self) -> impl Iterator<Item = Card> {
        CARDS
            .into_iter()
            .zip(self.0)
            .filter(|&(_, found)| found)
            .map(|(card, _)| card)
    }
}

impl From<[bool; CARD_COUNT]> for AnswerSheet {
    fn from(answers: [bool; CARD_COUNT]) -> Self {
        Self(answers)
    }
}

impl From<AnswerSheet> for [bool; CARD_COUNT] {
    fn from(sheet: AnswerSheet) -> Self {
        sheet.0
    }
}

fn parse_answer(position: usize, found: char) -> Result<bool> {
    match found {
        '1' | 'y' | 'Y' => Ok(true),
        '0' | 'n' | 'N' => Ok(false),
        _ => Err(GameError::InvalidAnswer { position, found }),
    }
}

impl FromStr for AnswerSheet {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let found = s.chars().count();
        if found != CARD_COUNT {
            return Err(GameError::WrongAnswerCount { found });
        }

        let mut answers = [false; CARD_COUNT];
        for (position, (slot, c)) in answers.iter_mut().zip(s.chars()).enumerate() {
            *slot = parse_answer(position, c)?;
        }
        Ok(Self(answers))
    }
}

/// Writes the answers as `1`/`0` in card order, e.g. `101000` for 5.
impl fmt::Display for AnswerSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for found in self.0 {
            f.write_str(if found { "1" } else { "0" })?;
        }
        Ok(())
    }
}
