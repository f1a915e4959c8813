use super::deck::{Card, Deck};
use super::kind::AnswerKind;
use rand::seq::SliceRandom;
use rand::Rng;

/// Canonical form of learner input: trimmed and lowercased
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// The answer shown to the learner when they get a card wrong
pub fn expected_answer(kind: AnswerKind, card: &Card) -> &str {
    match kind {
        AnswerKind::Meaning => card.meaning.as_deref().unwrap_or(&card.romaji),
        AnswerKind::Romaji => &card.romaji,
        AnswerKind::Symbol => &card.symbol,
    }
}

/// Decide whether `input` answers `card` correctly.
///
/// Meanings match when either string contains the other, so "gold" is accepted
/// for "gold, metal". Romaji and symbols must match exactly. Blank input never
/// counts as correct.
pub fn check_answer(kind: AnswerKind, card: &Card, input: &str) -> bool {
    let answer = normalize(input);
    if answer.is_empty() {
        return false;
    }

    let expected = normalize(expected_answer(kind, card));
    match kind {
        AnswerKind::Meaning => expected.contains(&answer) || answer.contains(&expected),
        AnswerKind::Romaji | AnswerKind::Symbol => answer == expected,
    }
}

/// Multiple-choice options for a symbol question: the target plus up to
/// `distractors` other symbols from the same deck, shuffled.
///
/// Symbols sharing the target's romaji are never offered. The bundled kana
/// decks romanize every symbol differently (ぢ is `di`, づ is `du`), so this only
/// matters for decks that reuse a reading.
pub fn choices<R: Rng + ?Sized>(
    deck: &Deck,
    target: &Card,
    distractors: usize,
    rng: &mut R,
) -> Vec<String> {
    let pool: Vec<&Card> = deck
        .items
        .iter()
        .filter(|card| card.symbol != target.symbol && card.romaji != target.romaji)
        .collect();

    let mut options: Vec<String> = pool
        .choose_multiple(rng, distractors)
        .map(|card| card.symbol.clone())
        .collect();
    options.push(target.symbol.clone());
    options.shuffle(rng);
    options
}
