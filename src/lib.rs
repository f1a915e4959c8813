// Library surface for the binary, headless integration tests and reuse.
pub mod config;
pub mod error;
pub mod ledger;
pub mod quiz;
pub mod runtime;
pub mod sampling;
pub mod session;
pub mod ui;

pub use error::{QuizError, Result};
pub use ledger::{record_answer, PerformanceLedger};
pub use sampling::draw_next_item;
