pub mod answer;
pub mod deck;
pub mod kind;

// Re-export the main types for convenience
pub use answer::{check_answer, choices, expected_answer, normalize};
pub use deck::{Card, Deck, DeckId};
pub use kind::{AnswerKind, QuizKind};

use crate::error::{QuizError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Every deck, loaded once and shared by all sessions
#[derive(Debug, Clone)]
pub struct QuizCatalog {
    decks: HashMap<DeckId, Deck>,
}

impl QuizCatalog {
    pub fn load() -> Result<Self> {
        let mut decks = HashMap::new();
        for id in DeckId::ALL {
            let deck = Deck::load(id)?;
            debug!(deck = ?id, cards = deck.len(), "loaded deck");
            decks.insert(id, deck);
        }
        Ok(Self { decks })
    }

    pub fn deck(&self, kind: QuizKind) -> Result<&Deck> {
        self.decks
            .get(&kind.deck_id())
            .ok_or_else(|| QuizError::Deck {
                name: format!("{:?}", kind.deck_id()),
                reason: "deck not loaded".to_string(),
            })
    }

    /// The ordered symbols a quiz of `kind` samples from
    pub fn candidate_set(&self, kind: QuizKind) -> Result<Vec<String>> {
        Ok(self.deck(kind)?.symbols())
    }
}
