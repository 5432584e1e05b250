use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mindcards_core::*;
use std::io::{self, Write};
use std::time::Duration;

mod play;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Think of a number from 1 to 63 and let six cards find it", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer six cards and have your number guessed (the default)
    Play(PlayArgs),
    /// Print all six cards
    Cards {
        /// Numbers per row
        #[arg(short, long, default_value_t = render::DEFAULT_COLUMNS, value_parser = clap::value_parser!(u8).range(1..))]
        columns: u8,

        /// Print the cards as a JSON array instead
        #[arg(long)]
        json: bool,
    },
    /// Decode an answer string such as 110100 (card 1 first)
    Decode { answers: AnswerSheet },
    /// Show which cards carry a number and how it adds up
    Explain {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=63))]
        number: Number,
    },
}

#[derive(clap::Args, Debug)]
struct PlayArgs {
    /// Show the cards in a random order
    #[arg(short, long)]
    shuffle: bool,

    /// Force a seed for --shuffle instead of random
    #[arg(long, requires = "shuffle")]
    seed: Option<u64>,

    /// Numbers per row
    #[arg(short, long, default_value_t = render::DEFAULT_COLUMNS, value_parser = clap::value_parser!(u8).range(1..))]
    columns: u8,

    /// Pause before revealing the number, in milliseconds
    #[arg(long, default_value_t = 50)]
    reveal_delay_ms: u64,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            shuffle: false,
            seed: None,
            columns: render::DEFAULT_COLUMNS,
            reveal_delay_ms: 50,
        }
    }
}

impl PlayArgs {
    fn settings(&self) -> play::Settings {
        let order = if self.shuffle {
            let seed = self.seed.unwrap_or_else(rand::random);
            log::debug!("seed: {seed}");
            CardOrder::Shuffled { seed }
        } else {
            CardOrder::Sequential
        };
        play::Settings {
            config: RoundConfig::new(order),
            reseed: self.shuffle && self.seed.is_none(),
            columns: usize::from(self.columns),
            reveal_delay: Duration::from_millis(self.reveal_delay_ms),
        }
    }
}

fn print_cards<W: Write>(mut out: W, columns: u8, json: bool) -> Result<()> {
    if json {
        let tables = CARDS.map(|card| card.numbers().collect::<Vec<_>>());
        let text = serde_json::to_string_pretty(&tables).context("Could not serialize cards")?;
        writeln!(out, "{text}")?;
        return Ok(());
    }

    for card in CARDS {
        writeln!(out, "{}", render::card_title(card))?;
        write!(out, "{}", render::card_grid(card, usize::from(columns)))?;
        writeln!(out)?;
    }
    Ok(())
}

fn print_decode<W: Write>(mut out: W, answers: &AnswerSheet) -> Result<()> {
    writeln!(out, "{}", answers.decode())?;
    writeln!(out, "{}", render::breakdown(answers))?;
    Ok(())
}

fn print_explain<W: Write>(mut out: W, number: Number) -> Result<()> {
    let sheet =
        AnswerSheet::for_number(number).with_context(|| format!("Cannot explain {number}"))?;
    write!(out, "{}", render::explanation(&sheet))?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("{args:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or_else(|| Command::Play(PlayArgs::default())) {
        Command::Play(play_args) => {
            let stdin = io::stdin();
            play::play(stdin.lock(), &mut out, &play_args.settings())?;
        }
        Command::Cards { columns, json } => print_cards(&mut out, columns, json)?,
        Command::Decode { answers } => print_decode(&mut out, &answers)?,
        Command::Explain { number } => print_explain(&mut out, number)?,
    }

    out.flush().context("Could not flush stdout")?;
    Ok(())
}
