use std::sync::mpsc;
use std::sync::Arc;

use kanadrill::quiz::{AnswerKind, QuizCatalog, QuizKind};
use kanadrill::runtime::{QuizEvent, Runner, TestEventSource};
use kanadrill::sampling::{AdaptiveSelector, UniformSelector};
use kanadrill::session::QuizSession;
use kanadrill::ui::Style;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Headless runs of the quiz loop without a terminal, fed through TestEventSource.

fn new_session(kind: QuizKind) -> QuizSession {
    let catalog = Arc::new(QuizCatalog::load().unwrap());
    let mut session = QuizSession::new(catalog);
    session.select_quiz(kind).unwrap();
    session
}

#[test]
fn headless_run_stops_at_question_limit() {
    let mut session = new_session(QuizKind::Kanji);
    let (tx, rx) = mpsc::channel();
    for _ in 0..5 {
        tx.send(QuizEvent::Answer("???".to_string())).unwrap();
    }

    let mut runner = Runner::new(TestEventSource::new(rx)).with_question_limit(Some(3));
    let mut rng = StdRng::seed_from_u64(1);
    let mut out = Vec::new();

    let stats = runner
        .run(&mut session, &AdaptiveSelector, &mut rng, &mut out)
        .unwrap();

    assert_eq!(stats.total, 3);
    assert_eq!(stats.correct, 0);
    assert_eq!(stats.accuracy, Some(0.0));

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Wrong!").count(), 3);
    assert!(text.contains("Question 3 (Kanji → meaning)"));
    assert!(!text.contains("Question 4"));
    assert!(text.contains("Total questions: 3"));

    // Two answers were never consumed
    assert_eq!(runner.step(), QuizEvent::Answer("???".to_string()));
}

#[test]
fn headless_run_ends_when_input_runs_out() {
    let mut session = new_session(QuizKind::HiraganaToRomaji);
    let (tx, rx) = mpsc::channel();
    tx.send(QuizEvent::Answer("nope".to_string())).unwrap();
    drop(tx);

    let mut runner = Runner::new(TestEventSource::new(rx));
    let mut rng = StdRng::seed_from_u64(2);
    let mut out = Vec::new();

    let stats = runner
        .run(&mut session, &AdaptiveSelector, &mut rng, &mut out)
        .unwrap();

    assert_eq!(stats.total, 1);
    assert_eq!(session.ledger().len(), 1);
    // The question left pending at quit is not graded
    assert!(session.is_awaiting_answer());
}

#[test]
fn headless_stats_and_restart_commands() {
    let mut session = new_session(QuizKind::KatakanaToRomaji);
    let (tx, rx) = mpsc::channel();
    tx.send(QuizEvent::Answer("wrong".to_string())).unwrap();
    tx.send(QuizEvent::Stats).unwrap();
    tx.send(QuizEvent::Restart).unwrap();
    tx.send(QuizEvent::Quit).unwrap();

    let mut runner = Runner::new(TestEventSource::new(rx)).with_style(Style::plain());
    let mut rng = StdRng::seed_from_u64(3);
    let mut out = Vec::new();

    let stats = runner
        .run(&mut session, &UniformSelector, &mut rng, &mut out)
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Wrong answers: 1"));
    assert!(text.contains("Symbol  Score  Weight"));
    assert!(text.contains("Starting over."));

    // Restart wiped the ledger before quitting
    assert_eq!(stats.total, 0);
    assert!(session.ledger().is_empty());
    assert!(text.ends_with("No answers yet. Start the quiz!\n"));
}

#[test]
fn headless_numbered_choice_answers_symbol_quiz() {
    let mut session = new_session(QuizKind::RomajiToHiragana);
    let mut rng = StdRng::seed_from_u64(4);

    // Drive the session directly, picking the right option by its number
    for _ in 0..10 {
        let question = session.next_question(&AdaptiveSelector, &mut rng).unwrap();
        assert_eq!(question.kind.answer_kind(), AnswerKind::Symbol);
        let position = question
            .choices
            .iter()
            .position(|s| *s == question.card.symbol)
            .unwrap();

        let answer = kanadrill::ui::resolve_choice(&question, &(position + 1).to_string());
        assert!(session.submit_answer(&answer).unwrap().is_correct);
    }

    assert_eq!(session.stats().correct, 10);
}

#[test]
fn headless_missed_symbol_comes_back_more_often() {
    let mut session = new_session(QuizKind::HiraganaToRomaji);
    let mut rng = StdRng::seed_from_u64(5);

    // Miss the first card a few times, answer everything else correctly
    let target = session
        .next_question(&AdaptiveSelector, &mut rng)
        .unwrap()
        .card
        .symbol;
    session.submit_answer("").unwrap();

    let mut target_seen = 0;
    for _ in 0..400 {
        let question = session.next_question(&AdaptiveSelector, &mut rng).unwrap();
        if question.card.symbol == target {
            target_seen += 1;
            session.submit_answer("").unwrap();
        } else {
            let romaji = question.card.romaji.clone();
            session.submit_answer(&romaji).unwrap();
        }
    }

    // Uniform sampling would show it about 400 / 46 ≈ 9 times
    assert!(
        target_seen > 20,
        "missed symbol was only asked {target_seen} times"
    );
    assert!(session.ledger().score(&target) < 0);
}
