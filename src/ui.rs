pub mod item_stats;

use crossterm::style::{style as styled, Color, Stylize};

use crate::quiz::{expected_answer, AnswerKind, QuizKind};
use crate::session::{AnswerOutcome, Question, SessionStats};

/// Rendering options for terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }

    pub(crate) fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            styled(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub(crate) fn bold(&self, text: &str) -> String {
        if self.color {
            styled(text).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Text shown when a new question is asked
pub fn render_question(question: &Question, stats: &SessionStats, style: Style) -> String {
    let mut out = format!(
        "Question {} ({})\nScore: {}/{}\n\n",
        question.number,
        question.kind.title(),
        stats.correct,
        stats.total
    );

    if question.kind.shows_symbol() {
        let symbol = style.bold(&question.card.symbol);
        out.push_str(&format!("Symbol: {symbol}\n\n"));
    } else {
        let romaji = style.bold(&question.card.romaji);
        out.push_str(&format!("Reading: {romaji}\n\n"));
    }

    out.push_str(question.kind.prompt());
    out.push('\n');

    if !question.choices.is_empty() {
        let choices: Vec<String> = question
            .choices
            .iter()
            .enumerate()
            .map(|(i, symbol)| format!("[{}] {}", i + 1, symbol))
            .collect();
        out.push_str(&choices.join("   "));
        out.push('\n');
    }

    out
}

/// Turn "2" into the second choice when the question offered choices
pub fn resolve_choice(question: &Question, input: &str) -> String {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if n >= 1 && n <= question.choices.len() => question.choices[n - 1].clone(),
        _ => trimmed.to_string(),
    }
}

/// Feedback after an answer, including the card details
pub fn render_outcome(outcome: &AnswerOutcome, style: Style) -> String {
    let mut out = if outcome.is_correct {
        style.paint("Correct!", Color::Green)
    } else {
        style.paint("Wrong!", Color::Red)
    };
    out.push_str("\n\n");

    let card = &outcome.card;
    out.push_str(&format!("Symbol: {}\n", card.symbol));
    match outcome.kind.answer_kind() {
        AnswerKind::Meaning => {
            if let Some(ref meaning) = card.meaning {
                out.push_str(&format!("Meaning: {meaning}\n"));
            }
            match card.reading {
                Some(ref reading) => {
                    out.push_str(&format!("Reading: {} ({})\n", reading, card.romaji))
                }
                None => out.push_str(&format!("Reading: {}\n", card.romaji)),
            }
        }
        AnswerKind::Romaji | AnswerKind::Symbol => {
            out.push_str(&format!("Romaji: {}\n", card.romaji));
        }
    }

    if !outcome.is_correct {
        out.push_str(&format!(
            "Correct answer: {}\n",
            expected_answer(outcome.kind.answer_kind(), card)
        ));
        out.push_str(&format!("Your answer: {}\n", outcome.given));
    }

    let (correct, total) = (outcome.correct, outcome.total);
    out.push_str(&format!("\nYour score: {correct}/{total}\n"));
    out
}

/// Running totals for the session
pub fn render_stats(stats: &SessionStats) -> String {
    match stats.accuracy {
        None => "No answers yet. Start the quiz!\n".to_string(),
        Some(accuracy) => format!(
            "Your stats:\n\nCorrect answers: {}\nWrong answers: {}\nTotal questions: {}\nAccuracy: {:.1}%\n",
            stats.correct, stats.incorrect, stats.total, accuracy
        ),
    }
}

/// One line per quiz kind with its id and deck size
pub fn render_quiz_list(kinds: &[(QuizKind, usize)]) -> String {
    kinds
        .iter()
        .map(|(kind, size)| {
            let id = kind.to_string();
            format!("{id:<26} {} ({size} symbols)\n", kind.title())
        })
        .collect()
}
