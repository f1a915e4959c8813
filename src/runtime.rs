use std::io::{BufRead, Write};
use std::sync::mpsc::Receiver;

use rand::RngCore;
use tracing::{debug, warn};

use crate::error::Result;
use crate::sampling::ItemSelector;
use crate::session::{QuizSession, SessionStats};
use crate::ui::{self, item_stats, Style};

/// Number of rows in the weakest-symbols table shown by `:stats`
const WEAKEST_ROWS: usize = 5;

/// Unified event type consumed by the quiz runner
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizEvent {
    Answer(String),
    Stats,
    Restart,
    Quit,
}

impl QuizEvent {
    /// Interpret one line of learner input
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":stats" | ":s" => QuizEvent::Stats,
            ":restart" | ":r" => QuizEvent::Restart,
            ":quit" | ":q" => QuizEvent::Quit,
            _ => QuizEvent::Answer(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
        }
    }
}

/// Source of learner input
pub trait QuizEventSource {
    /// Block until the next event; end of input reads as `Quit`.
    fn next_event(&mut self) -> QuizEvent;
}

/// Production event source reading one line at a time
pub struct LineEventSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineEventSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> QuizEventSource for LineEventSource<R> {
    fn next_event(&mut self) -> QuizEvent {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => QuizEvent::Quit,
            // Undecodable input is graded like any other wrong answer
            Ok(_) => QuizEvent::parse(&String::from_utf8_lossy(&line)),
            Err(err) => {
                warn!(error = %err, "failed to read input");
                QuizEvent::Quit
            }
        }
    }
}

/// Test event source for headless runs
pub struct TestEventSource {
    rx: Receiver<QuizEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<QuizEvent>) -> Self {
        Self { rx }
    }
}

impl QuizEventSource for TestEventSource {
    fn next_event(&mut self) -> QuizEvent {
        self.rx.recv().unwrap_or(QuizEvent::Quit)
    }
}

/// Runner that asks questions and feeds answers back into a session
pub struct Runner<E: QuizEventSource> {
    event_source: E,
    question_limit: Option<usize>,
    style: Style,
}

impl<E: QuizEventSource> Runner<E> {
    pub fn new(event_source: E) -> Self {
        Self {
            event_source,
            question_limit: None,
            style: Style::plain(),
        }
    }

    /// Stop after `limit` answered questions
    pub fn with_question_limit(mut self, limit: Option<usize>) -> Self {
        self.question_limit = limit;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Blocks until the next learner event
    pub fn step(&mut self) -> QuizEvent {
        self.event_source.next_event()
    }

    fn limit_reached(&self, stats: &SessionStats) -> bool {
        self.question_limit
            .map(|limit| stats.total >= limit)
            .unwrap_or(false)
    }

    /// Drive `session` until the learner quits or the question limit is hit.
    pub fn run<W: Write>(
        &mut self,
        session: &mut QuizSession,
        selector: &dyn ItemSelector,
        rng: &mut dyn RngCore,
        out: &mut W,
    ) -> Result<SessionStats> {
        'questions: while !self.limit_reached(&session.stats()) {
            let question = session.next_question(selector, rng)?;
            write!(
                out,
                "\n{}",
                ui::render_question(&question, &session.stats(), self.style)
            )?;
            out.flush()?;

            loop {
                match self.step() {
                    QuizEvent::Answer(text) => {
                        let answer = ui::resolve_choice(&question, &text);
                        let outcome = session.submit_answer(&answer)?;
                        write!(out, "\n{}", ui::render_outcome(&outcome, self.style))?;
                        continue 'questions;
                    }
                    QuizEvent::Stats => {
                        write!(out, "\n{}", ui::render_stats(&session.stats()))?;
                        write!(
                            out,
                            "\n{}",
                            item_stats::render_weakest(&session.weakest(WEAKEST_ROWS), self.style)
                        )?;
                        out.flush()?;
                    }
                    QuizEvent::Restart => {
                        session.restart();
                        writeln!(out, "\nStarting over.")?;
                        continue 'questions;
                    }
                    QuizEvent::Quit => {
                        debug!("learner quit");
                        break 'questions;
                    }
                }
            }
        }

        let stats = session.stats();
        write!(out, "\n{}", ui::render_stats(&stats))?;
        out.flush()?;
        Ok(stats)
    }
}
