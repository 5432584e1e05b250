//! Card tables and decoder for the "guess the number" trick.
//!
//! Six cards each show the numbers in `1..=63` that have one particular bit
//! set. A player who says which cards carry their number has spelled it out in
//! binary, and [`decode`] reads it back.

#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use answers::*;
pub use card::*;
pub use error::*;
pub use round::*;
pub use types::*;

mod answers;
mod card;
mod error;
mod round;
mod types;

/// Order in which a round shows the cards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardOrder {
    /// Lowest bit first.
    #[default]
    Sequential,
    /// Seeded shuffle, so the same seed always deals the same order.
    Shuffled { seed: u64 },
}

impl CardOrder {
    pub fn deal(self) -> Deck {
        use rand::prelude::*;

        let mut order = CARDS;
        if let Self::Shuffled { seed } = self {
            let mut rng = SmallRng::seed_from_u64(seed);
            order.shuffle(&mut rng);
            log::trace!(
                "seed {seed} dealt cards {:?}",
                order.map(|card| card.index())
            );
        }
        order
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub order: CardOrder,
}

impl RoundConfig {
    pub const fn new(order: CardOrder) -> Self {
        Self { order }
    }

    pub const fn shuffled(seed: u64) -> Self {
        Self::new(CardOrder::Shuffled { seed })
    }
}
