use clap::Parser;
use crossterm::tty::IsTty;
use kanadrill::{
    config::{Config, ConfigStore, FileConfigStore},
    quiz::{QuizCatalog, QuizKind},
    runtime::{LineEventSource, Runner},
    sampling::{AdaptiveSelector, ItemSelector, UniformSelector},
    session::QuizSession,
    ui::{self, Style},
};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
    str::FromStr,
    sync::Arc,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// terminal flashcard drill for kana and kanji
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A flashcard drill for hiragana, katakana and kanji that shows the symbols you keep missing more often than the ones you already know."
)]
pub struct Cli {
    /// quiz to take, as shown by --list (snake_case ids work too)
    #[clap(short = 'q', long, value_parser = QuizKind::from_str)]
    quiz: Option<QuizKind>,

    /// stop after this many answered questions
    #[clap(short = 'n', long)]
    number_of_questions: Option<usize>,

    /// draw symbols uniformly instead of favouring the ones you miss
    #[clap(long)]
    uniform: bool,

    /// favour the symbols you miss, even if uniform draws were saved
    #[clap(long, conflicts_with = "uniform")]
    adaptive: bool,

    /// number of wrong options offered when answering with a symbol
    #[clap(long)]
    distractors: Option<usize>,

    /// seed the random generator for a reproducible run
    #[clap(long)]
    seed: Option<u64>,

    /// read and write preferences at this path instead of the default location
    #[clap(long)]
    config: Option<PathBuf>,

    /// remember the quiz options given on this command line
    #[clap(long)]
    save_config: bool,

    /// list the available quizzes and exit
    #[clap(long)]
    list: bool,

    /// disable colored output
    #[clap(long)]
    no_color: bool,
}

impl Cli {
    /// Command-line options layered over the stored preferences
    fn merge_into(&self, config: Config) -> Config {
        Config {
            quiz: self.quiz.unwrap_or(config.quiz),
            number_of_questions: self.number_of_questions.or(config.number_of_questions),
            uniform: !self.adaptive && (self.uniform || config.uniform),
            distractors: self.distractors.unwrap_or(config.distractors),
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("KANADRILL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();

    let catalog = Arc::new(QuizCatalog::load()?);

    if cli.list {
        let mut kinds = Vec::new();
        for kind in QuizKind::ALL {
            kinds.push((kind, catalog.deck(kind)?.len()));
        }
        print!("{}", ui::render_quiz_list(&kinds));
        return Ok(());
    }

    let store = match cli.config {
        Some(ref path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let config = cli.merge_into(store.load());
    if cli.save_config {
        store.save(&config)?;
        info!(path = %store.path().display(), "saved config");
    }

    let selector: Box<dyn ItemSelector> = if config.uniform {
        Box::new(UniformSelector)
    } else {
        Box::new(AdaptiveSelector)
    };

    let mut rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(StdRng::from_entropy()),
    };

    let stdout = io::stdout();
    let style = if !cli.no_color && stdout.is_tty() {
        Style::colored()
    } else {
        Style::plain()
    };

    let mut session = QuizSession::new(catalog).with_distractors(config.distractors);
    session.select_quiz(config.quiz)?;

    let mut out = stdout.lock();
    writeln!(
        out,
        "{} ({} symbols). Commands: :stats, :restart, :quit",
        config.quiz.title(),
        session.candidates().len()
    )?;

    let mut runner = Runner::new(LineEventSource::new(io::stdin().lock()))
        .with_question_limit(config.number_of_questions)
        .with_style(style);
    runner.run(&mut session, selector.as_ref(), rng.as_mut(), &mut out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["kanadrill"]);

        assert_eq!(cli.quiz, None);
        assert_eq!(cli.number_of_questions, None);
        assert!(!cli.uniform);
        assert!(!cli.adaptive);
        assert_eq!(cli.distractors, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.save_config);
        assert!(!cli.list);
    }

    #[test]
    fn test_cli_quiz() {
        let cli = Cli::parse_from(["kanadrill", "-q", "kanji"]);
        assert_eq!(cli.quiz, Some(QuizKind::Kanji));

        let cli = Cli::parse_from(["kanadrill", "--quiz", "romaji-to-katakana"]);
        assert_eq!(cli.quiz, Some(QuizKind::RomajiToKatakana));

        assert!(Cli::try_parse_from(["kanadrill", "--quiz", "cyrillic"]).is_err());
    }

    #[test]
    fn test_cli_quiz_accepts_snake_case() {
        let cli = Cli::parse_from(["kanadrill", "-q", "hiragana_to_romaji"]);
        assert_eq!(cli.quiz, Some(QuizKind::HiraganaToRomaji));

        let cli = Cli::parse_from(["kanadrill", "--quiz", "Romaji_To_Hiragana_Full"]);
        assert_eq!(cli.quiz, Some(QuizKind::RomajiToHiraganaFull));
    }

    #[test]
    fn test_cli_number_of_questions() {
        let cli = Cli::parse_from(["kanadrill", "-n", "25"]);
        assert_eq!(cli.number_of_questions, Some(25));

        let cli = Cli::parse_from(["kanadrill", "--number-of-questions", "50"]);
        assert_eq!(cli.number_of_questions, Some(50));
    }

    #[test]
    fn test_cli_seed_and_distractors() {
        let cli = Cli::parse_from(["kanadrill", "--seed", "42", "--distractors", "5"]);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.distractors, Some(5));
    }

    #[test]
    fn test_cli_overrides_config() {
        let stored = Config {
            quiz: QuizKind::Kanji,
            number_of_questions: Some(10),
            uniform: false,
            distractors: 2,
        };

        let cli = Cli::parse_from(["kanadrill", "-q", "katakana-to-romaji", "--uniform"]);
        let merged = cli.merge_into(stored.clone());
        assert_eq!(merged.quiz, QuizKind::KatakanaToRomaji);
        assert_eq!(merged.number_of_questions, Some(10));
        assert!(merged.uniform);
        assert_eq!(merged.distractors, 2);

        let cli = Cli::parse_from(["kanadrill"]);
        assert_eq!(cli.merge_into(stored.clone()), stored);
    }

    #[test]
    fn test_cli_adaptive_overrides_saved_uniform() {
        let stored = Config {
            uniform: true,
            ..Config::default()
        };

        let cli = Cli::parse_from(["kanadrill", "--adaptive"]);
        assert!(!cli.merge_into(stored.clone()).uniform);

        let cli = Cli::parse_from(["kanadrill"]);
        assert!(cli.merge_into(stored).uniform);

        assert!(Cli::try_parse_from(["kanadrill", "--adaptive", "--uniform"]).is_err());
    }
}
