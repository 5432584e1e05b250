use anyhow::{Context, Result, bail};
use mindcards_core::*;
use std::io::{BufRead, Write};
use std::time::Duration;

use crate::render;

const INSTRUCTIONS: &str = "\
How to play
  1. Think of a number between 1 and 63.
  2. Six cards will be shown one after another.
  3. For each card, tell me if your number is on it.
  4. At the end, I'll guess your number!
";

#[derive(Clone, Debug)]
pub(crate) struct Settings {
    pub config: RoundConfig,
    /// Draw a fresh shuffle seed for every round after the first.
    pub reseed: bool,
    pub columns: usize,
    pub reveal_delay: Duration,
}

impl Settings {
    fn round_config(&self, round: usize) -> RoundConfig {
        match self.config.order {
            CardOrder::Shuffled { .. } if self.reseed && round > 0 => {
                let seed = rand::random();
                log::debug!("round {} seed: {seed}", round + 1);
                RoundConfig::shuffled(seed)
            }
            _ => self.config,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Reply {
    Yes,
    No,
    Quit,
}

pub(crate) fn parse_reply(line: &str) -> Option<Reply> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "1" => Some(Reply::Yes),
        "n" | "no" | "0" => Some(Reply::No),
        "q" | "quit" | "exit" => Some(Reply::Quit),
        _ => None,
    }
}

/// Prompts until the player gives a recognised reply. `None` means the input
/// ended first.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<Reply>> {
    let mut line = String::new();
    loop {
        write!(output, "{prompt} ")?;
        output.flush().context("Could not flush prompt")?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Could not read answer")?;
        if read == 0 {
            return Ok(None);
        }

        match parse_reply(&line) {
            Some(reply) => return Ok(Some(reply)),
            None => {
                log::debug!("unrecognised reply {:?}", line.trim());
                writeln!(output, "Please answer y or n.")?;
            }
        }
    }
}

/// Plays rounds over `input`/`output` until the player declines another one,
/// quits, or the input ends after a finished round. Returns the guess of every
/// completed round.
pub(crate) fn play<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    settings: &Settings,
) -> Result<Vec<Number>> {
    writeln!(output, "{}", INSTRUCTIONS)?;

    let mut guesses = Vec::new();
    loop {
        let config = settings.round_config(guesses.len());
        let Some(guess) = play_round(&mut input, &mut output, config, settings)? else {
            break;
        };
        guesses.push(guess);

        writeln!(output)?;
        match ask(&mut input, &mut output, "Play again? [y/n]")? {
            Some(Reply::Yes) => writeln!(output)?,
            Some(Reply::No | Reply::Quit) | None => break,
        }
    }

    log::info!("Session over after {} rounds", guesses.len());
    Ok(guesses)
}

/// One round from the first card to the reveal. `None` when the player quits.
fn play_round<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: RoundConfig,
    settings: &Settings,
) -> Result<Option<Number>> {
    let mut round = Round::new(config);

    while let Some(card) = round.current_card() {
        let (answered, total) = round.progress();
        writeln!(output, "Card {} of {}", answered + 1, total)?;
        write!(output, "{}", render::card_grid(card, settings.columns))?;

        let found = match ask(input, output, "Is your number on this card? [y/n/q]")? {
            Some(Reply::Yes) => true,
            Some(Reply::No) => false,
            Some(Reply::Quit) => {
                log::info!("Player quit after {answered} cards");
                return Ok(None);
            }
            None => bail!("Input ended after {answered} of {total} cards"),
        };
        writeln!(output)?;

        if let AnswerOutcome::Guessed(guess) = round.answer(found)? {
            if !settings.reveal_delay.is_zero() {
                std::thread::sleep(settings.reveal_delay);
            }
            reveal(output, &round, guess)?;
            return Ok(Some(guess));
        }
    }

    bail!("Round ended without a guess")
}

fn reveal<W: Write>(output: &mut W, round: &Round, guess: Number) -> Result<()> {
    if guess == 0 {
        writeln!(
            output,
            "Your number wasn't on any card, so it can't be between 1 and 63."
        )?;
        return Ok(());
    }

    writeln!(output, "Your number is {guess}!")?;
    if let Some(sheet) = round.answer_sheet() {
        writeln!(output, "{}", render::breakdown(&sheet))?;
    }
    writeln!(
        output,
        "How did I do it? Each card represents a binary digit.\n\
         Your answers created a binary number that decoded to your choice!"
    )?;
    Ok(())
}
