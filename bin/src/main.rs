use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rs_words_solver::*;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Narrows down the possible answers of a Wordle-style game from the results of your guesses.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// Number of letters in each word. If not given, the length of the first word is used.
    #[clap(short = 'l', long)]
    word_length: Option<usize>,

    /// Reads one letter as another, given as `from=to` (e.g. `ё=е`). May be repeated.
    #[clap(long = "fold", parse(try_from_str = parse_fold))]
    folds: Vec<(char, char)>,

    /// The maximum number of possible words to print after each guess.
    #[clap(long, default_value_t = 200)]
    max_shown: usize,

    /// The number of possible words to print on each line.
    #[clap(long, default_value_t = 10)]
    per_line: usize,

    /// What to do with the word list. Defaults to an interactive game.
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest words and narrow down the word list from the results of a game you are playing.
    Interactive,
    /// Run a single game with the given word.
    Single { word: String },
    /// Run a single game with a random word from the words file.
    Random,
    /// Benchmark the solver against every word in the given words file.
    Benchmark,
}

struct DisplayOptions {
    max_shown: usize,
    per_line: usize,
}

fn parse_fold(rule: &str) -> Result<(char, char), String> {
    let invalid = || format!("expected a rule like 'ё=е', found '{}'", rule);
    let (from, to) = rule.split_once('=').ok_or_else(invalid)?;
    match (from.chars().exactly_one(), to.chars().exactly_one()) {
        (Ok(from), Ok(to)) => Ok((from, to)),
        _ => Err(invalid()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let start_time = Instant::now();
    let args = Args::parse();

    let normalizer = args
        .folds
        .iter()
        .fold(Normalizer::new(), |normalizer, (from, to)| {
            normalizer.with_fold(*from, *to)
        });
    let words_reader = io::BufReader::new(
        File::open(&args.words_file)
            .with_context(|| format!("could not open words file {}", args.words_file))?,
    );
    let word_bank = WordBank::from_reader(words_reader, &normalizer, args.word_length)
        .with_context(|| format!("could not load words from {}", args.words_file))?;
    info!(
        "Loaded {} words of {} letters from {}",
        word_bank.len(),
        word_bank.word_length(),
        args.words_file
    );
    println!("Loaded words: {}\n", word_bank.len());

    let display = DisplayOptions {
        max_shown: args.max_shown,
        per_line: args.per_line.max(1),
    };
    match args.command.unwrap_or(Command::Interactive) {
        Command::Interactive => play_interactive_game(&word_bank, &display)?,
        Command::Single { word } => {
            let word = normalizer
                .normalize(&word)
                .context("the word to guess must not be empty")?;
            play_single_game(&word, &word_bank)?
        }
        Command::Random => {
            let word = word_bank
                .words()
                .choose(&mut rand::thread_rng())
                .context("the word list is empty")?;
            println!("Chose the word \"{}\".", word);
            play_single_game(word, &word_bank)?
        }
        Command::Benchmark => run_benchmark(&word_bank)?,
    }

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn run_benchmark(word_bank: &WordBank) -> Result<()> {
    let mut num_guesses_per_game: Vec<u32> = Vec::new();
    for word in word_bank.words() {
        match play_game(word, 128, word_bank)? {
            GameResult::Success(guesses) => num_guesses_per_game.push(guesses.len() as u32),
            _ => bail!("could not solve \"{}\"", word),
        }
    }
    println!("Solved {} words. Results:", word_bank.len());

    let mut num_games_per_round: HashMap<u32, u32> = HashMap::new();
    for num_guesses in num_guesses_per_game.iter() {
        *(num_games_per_round.entry(*num_guesses).or_insert(0)) += 1;
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    for (num_round, num_games) in num_games_per_round.iter().sorted() {
        println!("|{}|{}|", num_round, num_games);
    }

    let average: f64 = num_guesses_per_game.iter().sum::<u32>() as f64
        / num_guesses_per_game.len() as f64;
    let std_dev: f64 = (num_guesses_per_game
        .iter()
        .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
        .sum::<f64>()
        / num_guesses_per_game.len() as f64)
        .sqrt();

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        average, std_dev
    );
    Ok(())
}

fn play_single_game(word: &Word, word_bank: &WordBank) -> Result<()> {
    match play_game(word, 128, word_bank)? {
        GameResult::Success(guesses) => {
            println!("Solved it! It took me {} guesses.", guesses.len());
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::Failure(guesses) => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                guesses.len()
            );
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::UnknownWord => bail!("\"{}\" is not in the word list", word),
    }
    Ok(())
}

fn play_interactive_game(word_bank: &WordBank, display: &DisplayOptions) -> Result<()> {
    let word_length = word_bank.word_length();
    let mut session = Session::new(word_bank);
    let mut lines = io::stdin().lock().lines();
    let mut current_guess: Option<Word> = None;

    loop {
        let move_number = session.round() + 1;
        match (&current_guess, session.best_guess()) {
            (Some(_), _) => prompt(&format!(
                "{}. Enter the game's response, {} symbols: '+' - correct letter, '-' - wrong letter,\n   \
                 '.' - misplaced letter. Response (empty to exit): ",
                move_number, word_length
            ))?,
            (None, Some(best_guess)) if move_number == 1 => prompt(&format!(
                "{}. Enter your first word (recommended: \"{}\"): ",
                move_number, best_guess
            ))?,
            (None, _) => prompt(&format!(
                "{}. Enter your next word (same here and in the game): ",
                move_number
            ))?,
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = line.trim();
        if input.is_empty() {
            break;
        }

        let guess = match current_guess.take() {
            Some(guess) => guess,
            None => {
                match word_bank.parse_word(input) {
                    Ok(word) if word_bank.contains(&word) => current_guess = Some(word),
                    Ok(word) => {
                        debug!("Rejected unknown word {:?}", word);
                        println!("Unknown word \"{}\"\n", word);
                    }
                    Err(_) => println!("Wrong input length\n"),
                }
                continue;
            }
        };
        if input.chars().count() != word_length {
            println!("Wrong input length\n");
            current_guess = Some(guess);
            continue;
        }

        let submitted = input
            .parse::<Verdict>()
            .and_then(|verdict| session.submit(&guess, &verdict));
        if let Err(err) = submitted {
            warn!("Rejected response {:?} for {}: {}", input, guess, err);
            println!("Wrong response: {}\n", err);
            current_guess = Some(guess);
            continue;
        }

        let candidates = session.candidates();
        debug!(
            "{} possible words remain after round {}",
            candidates.len(),
            session.round()
        );
        match candidates.as_slice() {
            [] => {
                println!("\nNo possible words found :( Sorry...\n");
                break;
            }
            [word] => {
                println!("\nFOUND! Your word: [{}]\n", word);
                break;
            }
            _ => {
                println!("\n{}. Possible words:", session.round() + 1);
                print_words(&candidates, display);
                println!();
            }
        }
    }
    Ok(())
}

fn prompt(message: &str) -> io::Result<()> {
    print!("{}", message);
    io::stdout().flush()
}

fn print_words(words: &[Word], display: &DisplayOptions) {
    let shown = &words[..words.len().min(display.max_shown)];
    for line in shown.chunks(display.per_line) {
        println!("  {}", line.iter().join(", "));
    }
    println!("({} total, {} shown)", words.len(), shown.len());
}
