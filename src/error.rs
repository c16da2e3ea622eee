/// Evaluation errors.
///
/// Defines the single error kind raised for every failure mode of the
/// tokenizer and evaluator: lexical mistakes, malformed token sequences,
/// parenthesis problems, division by zero, and incomplete reductions.
pub mod evaluation_error;
/// Quiz generation errors.
///
/// Contains the error raised when the question generator exhausts its
/// synthesis attempts without finding a usable expression.
pub mod quiz_error;

pub use evaluation_error::EvaluationError;
pub use quiz_error::QuizError;
