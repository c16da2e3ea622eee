/// Randomized expression synthesis.
///
/// Builds candidate expressions for each difficulty tier from an injected
/// random-number source, along with the pick/shuffle/range helpers the
/// generator shares.
mod expression;
/// Question assembly.
///
/// Evaluates synthesized expressions, retries until one has a
/// whole-number answer, and packages it with distractor options and the
/// full worked step trace.
pub mod generator;

pub use generator::{Difficulty, MAX_ATTEMPTS, QuizQuestion, generate_question};
