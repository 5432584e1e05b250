use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use mindcards_core::*;

fn bench_decode(c: &mut Criterion) {
    let sheets: Vec<[bool; CARD_COUNT]> = (MIN_NUMBER..=MAX_NUMBER)
        .filter_map(|number| AnswerSheet::for_number(number).ok())
        .map(Into::into)
        .collect();

    c.bench_function("decode_all_numbers", |b| {
        b.iter(|| {
            sheets
                .iter()
                .map(|answers| u32::from(decode(black_box(answers))))
                .sum::<u32>()
        })
    });

    c.bench_function("generate_cards", |b| b.iter(|| black_box(generate_cards())));

    c.bench_function("play_shuffled_round", |b| {
        b.iter(|| {
            let mut round = Round::new(RoundConfig::shuffled(black_box(42)));
            while let Some(card) = round.current_card() {
                if round.answer(card.contains(black_box(37))).is_err() {
                    break;
                }
            }
            round.guess()
        })
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
