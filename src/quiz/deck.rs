use crate::error::{QuizError, Result};
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;

static DECK_DIR: Dir = include_dir!("src/data");

/// One flashcard: a symbol and what the learner is expected to know about it
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Card {
    pub symbol: String,
    pub romaji: String,
    #[serde(default)]
    pub meaning: Option<String>,
    #[serde(default)]
    pub reading: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Deck {
    pub name: String,
    pub items: Vec<Card>,
}

/// The symbol inventories the quizzes draw from
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DeckId {
    Kanji,
    Hiragana,
    HiraganaDakuten,
    HiraganaFull,
    Katakana,
}

impl DeckId {
    pub const ALL: [DeckId; 5] = [
        DeckId::Kanji,
        DeckId::Hiragana,
        DeckId::HiraganaDakuten,
        DeckId::HiraganaFull,
        DeckId::Katakana,
    ];
}

impl Deck {
    pub fn load(id: DeckId) -> Result<Self> {
        match id {
            DeckId::Kanji => read_deck_from_file("kanji"),
            DeckId::Hiragana => read_deck_from_file("hiragana"),
            DeckId::HiraganaDakuten => read_deck_from_file("hiragana_dakuten"),
            DeckId::Katakana => read_deck_from_file("katakana"),
            DeckId::HiraganaFull => {
                let mut full = read_deck_from_file("hiragana")?;
                let dakuten = read_deck_from_file("hiragana_dakuten")?;
                full.name = "Hiragana (full)".to_string();
                full.items.extend(dakuten.items);
                Ok(full)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn card(&self, symbol: &str) -> Option<&Card> {
        self.items.iter().find(|card| card.symbol == symbol)
    }

    /// Symbols in file order
    pub fn symbols(&self) -> Vec<String> {
        self.items.iter().map(|card| card.symbol.clone()).collect()
    }
}

fn read_deck_from_file(stem: &str) -> Result<Deck> {
    let file_name = format!("{stem}.json");
    let file = DECK_DIR
        .get_file(&file_name)
        .ok_or_else(|| QuizError::Deck {
            name: stem.to_string(),
            reason: "file not embedded".to_string(),
        })?;

    let contents = file.contents_utf8().ok_or_else(|| QuizError::Deck {
        name: stem.to_string(),
        reason: "file is not valid UTF-8".to_string(),
    })?;

    let deck: Deck = from_str(contents)?;
    if deck.is_empty() {
        return Err(QuizError::Deck {
            name: stem.to_string(),
            reason: "deck has no cards".to_string(),
        });
    }

    Ok(deck)
}
