use super::deck::DeckId;
use crate::error::QuizError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::Display;

/// What the learner has to type (or pick) to answer a question
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnswerKind {
    /// Meaning of a kanji, matched loosely
    Meaning,
    /// Latin transcription, matched exactly
    Romaji,
    /// The symbol itself, picked from a set of choices
    Symbol,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum QuizKind {
    Kanji,
    HiraganaToRomaji,
    RomajiToHiragana,
    DakutenToRomaji,
    RomajiToDakuten,
    HiraganaFullToRomaji,
    RomajiToHiraganaFull,
    KatakanaToRomaji,
    RomajiToKatakana,
}

impl QuizKind {
    pub const ALL: [QuizKind; 9] = [
        QuizKind::Kanji,
        QuizKind::HiraganaToRomaji,
        QuizKind::RomajiToHiragana,
        QuizKind::DakutenToRomaji,
        QuizKind::RomajiToDakuten,
        QuizKind::HiraganaFullToRomaji,
        QuizKind::RomajiToHiraganaFull,
        QuizKind::KatakanaToRomaji,
        QuizKind::RomajiToKatakana,
    ];

    pub fn deck_id(&self) -> DeckId {
        match self {
            QuizKind::Kanji => DeckId::Kanji,
            QuizKind::HiraganaToRomaji | QuizKind::RomajiToHiragana => DeckId::Hiragana,
            QuizKind::DakutenToRomaji | QuizKind::RomajiToDakuten => DeckId::HiraganaDakuten,
            QuizKind::HiraganaFullToRomaji | QuizKind::RomajiToHiraganaFull => {
                DeckId::HiraganaFull
            }
            QuizKind::KatakanaToRomaji | QuizKind::RomajiToKatakana => DeckId::Katakana,
        }
    }

    pub fn answer_kind(&self) -> AnswerKind {
        match self {
            QuizKind::Kanji => AnswerKind::Meaning,
            QuizKind::HiraganaToRomaji
            | QuizKind::DakutenToRomaji
            | QuizKind::HiraganaFullToRomaji
            | QuizKind::KatakanaToRomaji => AnswerKind::Romaji,
            QuizKind::RomajiToHiragana
            | QuizKind::RomajiToDakuten
            | QuizKind::RomajiToHiraganaFull
            | QuizKind::RomajiToKatakana => AnswerKind::Symbol,
        }
    }

    /// Whether the question shows the symbol (otherwise it shows the romaji)
    pub fn shows_symbol(&self) -> bool {
        self.answer_kind() != AnswerKind::Symbol
    }

    pub fn title(&self) -> &'static str {
        match self {
            QuizKind::Kanji => "Kanji → meaning",
            QuizKind::HiraganaToRomaji => "Hiragana → romaji",
            QuizKind::RomajiToHiragana => "Romaji → hiragana",
            QuizKind::DakutenToRomaji => "Dakuten/handakuten → romaji",
            QuizKind::RomajiToDakuten => "Romaji → dakuten/handakuten",
            QuizKind::HiraganaFullToRomaji => "Full hiragana → romaji",
            QuizKind::RomajiToHiraganaFull => "Romaji → full hiragana",
            QuizKind::KatakanaToRomaji => "Katakana → romaji",
            QuizKind::RomajiToKatakana => "Romaji → katakana",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self.answer_kind() {
            AnswerKind::Meaning => "What does this kanji mean?",
            AnswerKind::Romaji => "How is this symbol read? Type it in romaji:",
            AnswerKind::Symbol => "Which symbol has this reading? Type or pick it:",
        }
    }
}

/// Accepts the kebab-case names shown by `--list` as well as snake_case ids,
/// ignoring case and surrounding whitespace.
impl FromStr for QuizKind {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-");
        <QuizKind as ValueEnum>::from_str(&wanted, true)
            .map_err(|_| QuizError::UnknownQuizKind(s.to_string()))
    }
}
