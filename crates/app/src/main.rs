use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use quiz_core::model::{DEFAULT_QUESTION_COUNT, QuizSettings, ShortfallPolicy};
use services::{Clock, QuizService, QuizView, Randomness};
use storage::repository::{QuestionBankRepository, Storage};
use tracing::{info, warn};

mod answers;
mod logging;
mod report;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCount { raw: String },
    InvalidSeed { raw: String },
    EmptyPath { flag: &'static str },
    MissingAnswers,
    MissingSeed,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCount { raw } => write!(f, "invalid --count value: {raw}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::EmptyPath { flag } => write!(f, "{flag} cannot be empty"),
            ArgsError::MissingAnswers => write!(f, "score requires --answers <path>"),
            ArgsError::MissingSeed => {
                write!(f, "score requires --seed so the same quiz can be rebuilt")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- check  [--bank <path>]");
    eprintln!("  cargo run -p app -- sample [--bank <path>] [--count <n>] [--seed <n>]");
    eprintln!("  cargo run -p app -- score  --answers <path> --seed <n>");
    eprintln!("                             [--bank <path>] [--count <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --bank data/preguntas.json");
    eprintln!("  --count {DEFAULT_QUESTION_COUNT}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BANK_PATH, QUIZ_QUESTION_COUNT, QUIZ_SEED, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Check,
    Sample,
    Score,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "check" => Some(Self::Check),
            "sample" => Some(Self::Sample),
            "score" => Some(Self::Score),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
struct Args {
    bank: PathBuf,
    count: u32,
    seed: Option<u64>,
    answers: Option<PathBuf>,
}

/// Parse an environment value, warning when it is set but unusable.
fn parse_env<T: FromStr>(name: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = name, value = %raw, "ignoring unparsable environment value");
            None
        }
    }
}

fn env_value<T: FromStr>(name: &str) -> Option<T> {
    parse_env(name, std::env::var(name).ok())
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut bank = std::env::var("QUIZ_BANK_PATH")
            .map_or_else(|_| PathBuf::from("data/preguntas.json"), PathBuf::from);
        let mut count = env_value::<u32>("QUIZ_QUESTION_COUNT").unwrap_or(DEFAULT_QUESTION_COUNT);
        let mut seed = env_value::<u64>("QUIZ_SEED");
        let mut answers = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => {
                    let value = require_value(args, "--bank")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyPath { flag: "--bank" });
                    }
                    bank = PathBuf::from(value);
                }
                "--count" => {
                    let value = require_value(args, "--count")?;
                    count = value
                        .parse::<u32>()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or(ArgsError::InvalidCount { raw: value.clone() })?;
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    seed = Some(
                        value
                            .parse::<u64>()
                            .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?,
                    );
                }
                "--answers" => {
                    let value = require_value(args, "--answers")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyPath { flag: "--answers" });
                    }
                    answers = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            bank,
            count,
            seed,
            answers,
        })
    }

    fn randomness(&self) -> Randomness {
        self.seed.map_or_else(Randomness::entropy, Randomness::seeded)
    }
}

async fn read_answers(path: &Path) -> Result<HashMap<String, String>, Box<dyn std::error::Error>> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("info");

    let mut argv = std::env::args().skip(1);

    let cmd = match argv.next() {
        None => {
            print_usage();
            return Ok(());
        }
        Some(first) if first == "--help" || first == "-h" => {
            print_usage();
            return Ok(());
        }
        Some(first) => Command::from_arg(&first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let storage = Storage::json_file(&parsed.bank);
    let settings = QuizSettings::new(parsed.count, ShortfallPolicy::Redistribute)?;
    let service = QuizService::new(Clock::system(), storage.banks.clone())
        .with_settings(settings)
        .with_randomness(parsed.randomness());

    match cmd {
        Command::Check => {
            let bank = storage.banks.load_bank().await?;
            for line in report::bank_lines(bank.len(), &bank.category_counts()) {
                println!("{line}");
            }
            Ok(())
        }
        Command::Sample => {
            let session = service.start_quiz().await?;
            let view = QuizView::from_session(&session);
            println!("{}", serde_json::to_string_pretty(&view)?);
            Ok(())
        }
        Command::Score => {
            let answers_path = parsed.answers.as_ref().ok_or(ArgsError::MissingAnswers)?;
            if parsed.seed.is_none() {
                return Err(ArgsError::MissingSeed.into());
            }

            let raw = read_answers(answers_path).await?;
            let mut session = service.start_quiz().await?;
            let answers = answers::resolve(raw, session.questions())?;
            for (id, option) in answers {
                session = service.answer(&session, id, option)?;
            }
            let done = service.submit(&session)?;

            let (Some(result), Some(review)) = (done.result(), done.review()) else {
                return Err("quiz was not finalized".into());
            };
            info!(session = %done.id(), "printing results");
            for line in report::result_lines(result, &review) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_parses_when_valid() {
        assert_eq!(parse_env::<u64>("QUIZ_SEED", Some("42".into())), Some(42));
        assert_eq!(parse_env::<u32>("QUIZ_QUESTION_COUNT", Some(" 10 ".into())), Some(10));
    }

    #[test]
    fn unparsable_env_value_falls_back() {
        assert_eq!(parse_env::<u64>("QUIZ_SEED", Some("4x2".into())), None);
        assert_eq!(parse_env::<u32>("QUIZ_QUESTION_COUNT", Some("-3".into())), None);
    }

    #[test]
    fn unset_env_value_is_none() {
        assert_eq!(parse_env::<u64>("QUIZ_SEED", None), None);
    }

    #[test]
    fn command_names() {
        assert_eq!(Command::from_arg("check"), Some(Command::Check));
        assert_eq!(Command::from_arg("score"), Some(Command::Score));
        assert_eq!(Command::from_arg("grade"), None);
    }
}
