use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Ready,
    Asking,
    Finished,
}

impl RoundState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Ready
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    NextCard(Card),
    Guessed(Number),
}

impl AnswerOutcome {
    pub const fn guess(self) -> Option<Number> {
        match self {
            Self::NextCard(_) => None,
            Self::Guessed(number) => Some(number),
        }
    }
}

/// One pass through the deck, collecting an answer per card.
///
/// Cards may be shown in any order, answers are always filed under the card
/// they belong to, so the final guess only depends on what was answered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoundRecord", into = "RoundRecord")]
pub struct Round {
    order: Deck,
    answers: [Option<bool>; CARD_COUNT],
    answered: u8,
}

impl Round {
    pub fn new(config: RoundConfig) -> Self {
        Self::with_order(config.order.deal())
    }

    fn with_order(order: Deck) -> Self {
        Self {
            order,
            answers: [None; CARD_COUNT],
            answered: 0,
        }
    }

    pub fn state(&self) -> RoundState {
        match usize::from(self.answered) {
            0 => RoundState::Ready,
            CARD_COUNT => RoundState::Finished,
            _ => RoundState::Asking,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    /// Cards in the order they are shown.
    pub fn order(&self) -> &Deck {
        &self.order
    }

    /// `(answered, total)`, for "Card 3 of 6" style progress.
    pub fn progress(&self) -> (usize, usize) {
        (usize::from(self.answered), CARD_COUNT)
    }

    pub fn current_card(&self) -> Option<Card> {
        self.order.get(usize::from(self.answered)).copied()
    }

    /// Records whether the player's number is on the current card.
    pub fn answer(&mut self, found: bool) -> Result<AnswerOutcome> {
        let card = self.current_card().ok_or(GameError::RoundFinished)?;

        self.answers[usize::from(card.index())] = Some(found);
        self.answered += 1;
        log::debug!(
            "card {} answered {}",
            card.index(),
            if found { "yes" } else { "no" }
        );

        if let Some(next) = self.current_card() {
            return Ok(AnswerOutcome::NextCard(next));
        }

        let sheet = self.answer_sheet().ok_or(GameError::RoundFinished)?;
        let guess = sheet.decode();
        log::debug!("answers {sheet} decode to {guess}");
        Ok(AnswerOutcome::Guessed(guess))
    }

    /// All answers in card order, once every card has been answered.
    pub fn answer_sheet(&self) -> Option<AnswerSheet> {
        let mut sheet = [false; CARD_COUNT];
        for (slot, answer) in sheet.iter_mut().zip(self.answers) {
            *slot = answer?;
        }
        Some(AnswerSheet::new(sheet))
    }

    pub fn guess(&self) -> Option<Number> {
        self.answer_sheet().map(|sheet| sheet.decode())
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new(RoundConfig::default())
    }
}

/// Serialized form of a [`Round`]: cards in showing order and the answers given
/// so far, in the same order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct RoundRecord {
    order: Deck,
    answers: Vec<bool>,
}

impl From<Round> for RoundRecord {
    fn from(round: Round) -> Self {
        let answers = round.order[..usize::from(round.answered)]
            .iter()
            .filter_map(|card| round.answers[usize::from(card.index())])
            .collect();
        Self {
            order: round.order,
            answers,
        }
    }
}

impl TryFrom<RoundRecord> for Round {
    type Error = GameError;

    fn try_from(record: RoundRecord) -> Result<Self> {
        let mut seen = [false; CARD_COUNT];
        for card in record.order {
            let slot = &mut seen[usize::from(card.index())];
            if *slot {
                return Err(GameError::DuplicateCard(card.index()));
            }
            *slot = true;
        }

        let mut round = Self::with_order(record.order);
        for found in record.answers {
            round.answer(found)?;
        }
        Ok(round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(config: RoundConfig, number: Number) -> Round {
        let mut round = Round::new(config);
        while let Some(card) = round.current_card() {
            round.answer(card.contains(number)).unwrap();
        }
        round
    }

    #[test]
    fn fresh_round_is_ready_on_first_card() {
        let round = Round::default();

        assert_eq!(round.state(), RoundState::Ready);
        assert_eq!(round.current_card(), Some(CARDS[0]));
        assert_eq!(round.progress(), (0, 6));
        assert_eq!(round.answer_sheet(), None);
        assert_eq!(round.guess(), None);
    }

    #[test]
    fn answering_walks_through_all_cards() {
        let mut round = Round::default();

        let outcome = round.answer(true).unwrap();
        assert_eq!(outcome, AnswerOutcome::NextCard(CARDS[1]));
        assert_eq!(round.state(), RoundState::Asking);
        assert_eq!(round.progress(), (1, 6));

        for _ in 0..4 {
            assert!(round.answer(false).unwrap().guess().is_none());
        }
        let outcome = round.answer(true).unwrap();

        assert_eq!(outcome, AnswerOutcome::Guessed(33));
        assert_eq!(round.state(), RoundState::Finished);
        assert!(round.is_finished());
        assert_eq!(round.current_card(), None);
        assert_eq!(round.guess(), Some(33));
    }

    #[test]
    fn finished_round_rejects_more_answers() {
        let mut round = play(RoundConfig::default(), 7);

        assert_eq!(round.answer(true), Err(GameError::RoundFinished));
        assert_eq!(round.guess(), Some(7));
    }

    #[test]
    fn all_no_answers_guess_zero() {
        let mut round = Round::default();
        for _ in 0..CARD_COUNT {
            round.answer(false).unwrap();
        }
        assert_eq!(round.guess(), Some(0));
    }

    #[test]
    fn every_number_is_guessed_in_order() {
        for number in MIN_NUMBER..=MAX_NUMBER {
            assert_eq!(play(RoundConfig::default(), number).guess(), Some(number));
        }
    }

    #[test]
    fn shuffled_order_is_a_permutation_and_keeps_guess() {
        let config = RoundConfig::shuffled(0xC0FFEE);
        let round = Round::new(config);

        let mut seen = [false; CARD_COUNT];
        for card in round.order() {
            seen[usize::from(card.index())] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(Round::new(config).order(), round.order());

        for number in [1, 22, 41, 63] {
            assert_eq!(play(config, number).guess(), Some(number));
        }
    }

    #[test]
    fn round_survives_serde() {
        let mut round = Round::new(RoundConfig::shuffled(7));
        round.answer(true).unwrap();
        round.answer(false).unwrap();

        let json = serde_json::to_string(&round).unwrap();
        let restored: Round = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, round);
        assert_eq!(restored.progress(), (2, 6));
    }

    #[test]
    fn deserializing_rejects_bad_rounds() {
        let repeated = r#"{"order":[0,0,2,3,4,5],"answers":[]}"#;
        assert!(serde_json::from_str::<Round>(repeated).is_err());

        let too_many = r#"{"order":[0,1,2,3,4,5],"answers":[true,true,true,true,true,true,true]}"#;
        assert!(serde_json::from_str::<Round>(too_many).is_err());

        let finished = r#"{"order":[5,4,3,2,1,0],"answers":[true,false,false,false,false,true]}"#;
        let round: Round = serde_json::from_str(finished).unwrap();
        assert_eq!(round.guess(), Some(33));
    }
}
