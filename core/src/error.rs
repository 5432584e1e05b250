use thiserror::Error;

use crate::{CardIndex, Number};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No card at index {0}")]
    InvalidCardIndex(CardIndex),
    #[error("Number {0} is outside 1..=63")]
    NumberOutOfRange(Number),
    #[error("Expected 6 answers, got {found}")]
    WrongAnswerCount { found: usize },
    #[error("Answer {position} is {found:?}, expected one of 1/0/y/n")]
    InvalidAnswer { position: usize, found: char },
    #[error("Card {0} appears twice in one round")]
    DuplicateCard(CardIndex),
    #[error("Round already finished, no more answers are accepted")]
    RoundFinished,
}

pub type Result<T> = core::result::Result<T, GameError>;
