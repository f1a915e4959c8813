use crate::error::{QuizError, Result};
use crate::ledger::PerformanceLedger;
use crate::quiz::{check_answer, choices, AnswerKind, Card, QuizCatalog, QuizKind};
use crate::sampling::{score_weight, ItemSelector};
use rand::RngCore;
use std::sync::Arc;
use tracing::{debug, info};

pub const DEFAULT_DISTRACTORS: usize = 3;

/// A question handed to the learner
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// 1-based position within the session
    pub number: usize,
    pub kind: QuizKind,
    pub card: Card,
    /// Multiple-choice options; empty unless the answer is a symbol
    pub choices: Vec<String>,
}

/// Result of grading one answer
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub kind: QuizKind,
    pub card: Card,
    pub given: String,
    /// Ledger score of the card after this answer
    pub item_score: i64,
    pub correct: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionStats {
    pub correct: usize,
    pub incorrect: usize,
    pub total: usize,
    /// Percentage of correct answers, `None` before the first answer
    pub accuracy: Option<f64>,
}

/// Per-item view of the ledger, used for the weakest-symbols table
#[derive(Debug, Clone, PartialEq)]
pub struct ItemReport {
    pub symbol: String,
    pub score: i64,
    pub weight: f64,
}

/// State of one learner working through one quiz type.
///
/// Each learner owns their own session; nothing in here is shared except the
/// read-only catalog.
#[derive(Debug, Clone)]
pub struct QuizSession {
    catalog: Arc<QuizCatalog>,
    kind: Option<QuizKind>,
    candidates: Vec<String>,
    ledger: PerformanceLedger,
    current: Option<Card>,
    correct: usize,
    total_questions: usize,
    distractors: usize,
}

impl QuizSession {
    pub fn new(catalog: Arc<QuizCatalog>) -> Self {
        Self {
            catalog,
            kind: None,
            candidates: Vec::new(),
            ledger: PerformanceLedger::new(),
            current: None,
            correct: 0,
            total_questions: 0,
            distractors: DEFAULT_DISTRACTORS,
        }
    }

    pub fn with_distractors(mut self, distractors: usize) -> Self {
        self.distractors = distractors;
        self
    }

    /// Switch to `kind`, starting over with an empty ledger.
    pub fn select_quiz(&mut self, kind: QuizKind) -> Result<()> {
        self.candidates = self.catalog.candidate_set(kind)?;
        self.kind = Some(kind);
        self.reset_progress();
        info!(quiz = %kind, candidates = self.candidates.len(), "quiz selected");
        Ok(())
    }

    /// Start the current quiz over, forgetting all answers.
    pub fn restart(&mut self) {
        self.reset_progress();
        info!("session restarted");
    }

    fn reset_progress(&mut self) {
        self.ledger.clear();
        self.current = None;
        self.correct = 0;
        self.total_questions = 0;
    }

    pub fn kind(&self) -> Option<QuizKind> {
        self.kind
    }

    pub fn ledger(&self) -> &PerformanceLedger {
        &self.ledger
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn is_awaiting_answer(&self) -> bool {
        self.current.is_some()
    }

    /// Draw the next card. Asking again before answering replaces the
    /// pending question without touching the ledger.
    pub fn next_question(
        &mut self,
        selector: &dyn ItemSelector,
        rng: &mut dyn RngCore,
    ) -> Result<Question> {
        let kind = self.kind.ok_or(QuizError::NoActiveQuiz)?;
        let deck = self.catalog.deck(kind)?;

        let symbol = selector.select(&self.candidates, &self.ledger, rng)?;
        let card = deck.card(symbol).cloned().ok_or_else(|| QuizError::Deck {
            name: deck.name.clone(),
            reason: format!("symbol '{symbol}' missing from deck"),
        })?;

        let options = if kind.answer_kind() == AnswerKind::Symbol {
            choices(deck, &card, self.distractors, rng)
        } else {
            Vec::new()
        };

        debug!(symbol = %card.symbol, score = self.ledger.score(&card.symbol), "question asked");
        self.current = Some(card.clone());

        Ok(Question {
            number: self.total_questions + 1,
            kind,
            card,
            choices: options,
        })
    }

    /// Grade `input` against the pending question and record it.
    pub fn submit_answer(&mut self, input: &str) -> Result<AnswerOutcome> {
        let kind = self.kind.ok_or(QuizError::NoActiveQuiz)?;
        let card = self.current.take().ok_or(QuizError::NotAwaitingAnswer)?;

        let is_correct = check_answer(kind.answer_kind(), &card, input);
        self.ledger.record_answer(&card.symbol, is_correct);
        self.total_questions += 1;
        if is_correct {
            self.correct += 1;
        }

        let item_score = self.ledger.score(&card.symbol);
        debug!(symbol = %card.symbol, is_correct, item_score, "answer graded");

        Ok(AnswerOutcome {
            is_correct,
            kind,
            card,
            given: input.trim().to_string(),
            item_score,
            correct: self.correct,
            total: self.total_questions,
        })
    }

    pub fn stats(&self) -> SessionStats {
        let accuracy = match self.total_questions {
            0 => None,
            total => Some(self.correct as f64 / total as f64 * 100.0),
        };
        SessionStats {
            correct: self.correct,
            incorrect: self.total_questions - self.correct,
            total: self.total_questions,
            accuracy,
        }
    }

    /// The `count` candidates most likely to be drawn next, heaviest first.
    pub fn weakest(&self, count: usize) -> Vec<ItemReport> {
        let mut reports: Vec<ItemReport> = self
            .candidates
            .iter()
            .map(|symbol| {
                let score = self.ledger.score(symbol);
                ItemReport {
                    symbol: symbol.clone(),
                    score,
                    weight: score_weight(score),
                }
            })
            .collect();

        reports.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        reports.truncate(count);
        reports
    }
}
