use mindcards_core::*;

/// Numbers per row, same as the printed cards.
pub(crate) const DEFAULT_COLUMNS: u8 = 8;

const CELL_WIDTH: usize = 2;
const GAP: &str = "  ";

pub(crate) fn card_title(card: Card) -> String {
    format!("Card {}", usize::from(card.index()) + 1)
}

/// Draws the numbers of a card as a boxed grid, `columns` per row.
pub(crate) fn card_grid(card: Card, columns: usize) -> String {
    let columns = columns.clamp(1, card.len().max(1));
    let numbers: Vec<Number> = card.numbers().collect();
    let width = columns * CELL_WIDTH + (columns - 1) * GAP.len();
    let border = format!("+{}+\n", "-".repeat(width + 2));

    let mut grid = border.clone();
    for row in numbers.chunks(columns) {
        let cells: Vec<String> = row
            .iter()
            .map(|number| format!("{number:>width$}", width = CELL_WIDTH))
            .collect();
        grid.push_str(&format!("| {:<width$} |\n", cells.join(GAP)));
    }
    grid.push_str(&border);
    grid
}

/// Spells out the sum behind a guess, e.g. `1 + 4 + 32 = 37`.
pub(crate) fn breakdown(sheet: &AnswerSheet) -> String {
    let terms: Vec<String> = sheet
        .yes_cards()
        .map(|card| card.place_value().to_string())
        .collect();
    if terms.is_empty() {
        return "no cards = 0".to_string();
    }
    format!("{} = {}", terms.join(" + "), sheet.decode())
}

pub(crate) fn explanation(sheet: &AnswerSheet) -> String {
    let mut text = String::new();
    for card in CARDS {
        let found = sheet.get(card.index()).unwrap_or_default();
        text.push_str(&format!(
            "{:<7} worth {:>2}: {}\n",
            card_title(card),
            card.place_value(),
            if found { "yes" } else { "no" }
        ));
    }
    text.push_str(&format!(
        "Answers {sheet} read as binary (card 1 lowest)\n{}\n",
        breakdown(sheet)
    ));
    text
}
