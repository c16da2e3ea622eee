use crate::quiz::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while generating a quiz question.
///
/// Evaluation errors inside the generator are never surfaced; they only
/// cause the candidate expression to be discarded and regenerated.
pub enum QuizError {
    /// No synthesized expression produced a whole-number answer within the
    /// attempt budget.
    AttemptsExhausted {
        /// The requested difficulty tier.
        difficulty: Difficulty,
        /// How many expressions were tried before giving up.
        attempts:   usize,
    },
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AttemptsExhausted { difficulty, attempts } => write!(f,
                                                                       "No {difficulty} question with a whole-number answer was found after {attempts} attempts."),
        }
    }
}

impl std::error::Error for QuizError {}
