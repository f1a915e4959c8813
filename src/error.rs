use std::io;

/// Errors raised by the quiz core and its surroundings.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("cannot draw an item from an empty candidate set")]
    EmptyCandidateSet,

    #[error("invalid sampling weights ({0})")]
    Weights(#[from] rand::distributions::WeightedError),

    #[error("no quiz type has been selected")]
    NoActiveQuiz,

    #[error("no question is waiting for an answer")]
    NotAwaitingAnswer,

    #[error("unknown quiz type '{0}'")]
    UnknownQuizKind(String),

    #[error("deck '{name}' could not be loaded: {reason}")]
    Deck { name: String, reason: String },

    #[error("IO error ({0})")]
    Io(#[from] io::Error),

    #[error("could not parse JSON ({0})")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
