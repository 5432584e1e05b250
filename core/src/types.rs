/// A number the player may think of, also the decoder's output.
pub type Number = u8;

/// Bit position of a card, doubling as its position in the deck.
pub type CardIndex = u8;

/// Number of cards in the deck, one per bit.
pub const CARD_COUNT: usize = 6;

pub const MIN_NUMBER: Number = 1;

pub const MAX_NUMBER: Number = (1 << CARD_COUNT) - 1;

/// Value contributed to the guess by a "yes" on card `index`.
pub const fn place_value(index: CardIndex) -> Number {
    1 << index
}

pub const fn in_range(number: Number) -> bool {
    number >= MIN_NUMBER && number <= MAX_NUMBER
}
