use std::collections::BTreeSet;

use ordered_float::OrderedFloat;

use crate::{
    error::QuizError,
    evaluate,
    quiz::expression::{build_expression, random_int, shuffle},
    step::Step,
    util::num::{format_number, is_integer},
};

/// How many expressions are synthesized before the generator gives up.
pub const MAX_ATTEMPTS: usize = 50;

/// How many wrong options accompany the answer.
const DISTRACTOR_COUNT: usize = 3;
/// Largest distance between a distractor and the answer.
const DISTRACTOR_SPREAD: i64 = 6;

/// Difficulty tiers for generated questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Three small operands, no grouping.
    Easy,
    /// Two parenthesized pairs.
    Medium,
    /// Grouping plus an exponent.
    Hard,
    /// Nested groups, exponents, and a mixed multiplicative group.
    Insane,
}

impl Difficulty {
    /// All tiers, in ascending order of difficulty.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Insane];
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Insane => "insane",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "insane" => Ok(Self::Insane),
            other => Err(format!("Unknown difficulty '{other}'. Expected easy, medium, hard, or \
                                  insane.")),
        }
    }
}

/// One generated practice question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    /// The expression to put to the player.
    pub expression: String,
    /// The correct answer; always a whole number, always exactly equal to
    /// evaluating `expression`.
    pub answer:     f64,
    /// Four pairwise-distinct choices including the answer, in shuffled
    /// order.
    pub options:    Vec<f64>,
    /// The full worked step trace for the expression.
    pub steps:      Vec<Step>,
    /// The tier this question was generated for.
    pub difficulty: Difficulty,
}

/// Generates one practice question at the given difficulty.
///
/// Synthesizes candidate expressions and keeps the first one that
/// evaluates cleanly to a whole number. Evaluation errors (for example a
/// synthesized division by zero) are never surfaced; they just trigger
/// another attempt. All randomness comes from `rng`, which must yield
/// values in `[0, 1)`; supplying a deterministic source reproduces the
/// exact same question.
///
/// # Errors
/// Returns [`QuizError::AttemptsExhausted`] if no usable expression is
/// found within [`MAX_ATTEMPTS`] tries.
///
/// # Example
/// ```
/// use bodmas::{evaluate, quiz::{Difficulty, generate_question}};
///
/// let mut state = 7_u64;
/// let mut rng = move || {
///     state ^= state << 13;
///     state ^= state >> 7;
///     state ^= state << 17;
///     (state >> 11) as f64 / (1_u64 << 53) as f64
/// };
///
/// let question = generate_question(Difficulty::Easy, &mut rng).unwrap();
/// assert_eq!(question.answer, evaluate(&question.expression).unwrap().value);
/// assert!(question.options.contains(&question.answer));
/// ```
pub fn generate_question(difficulty: Difficulty,
                         rng: &mut impl FnMut() -> f64)
                         -> Result<QuizQuestion, QuizError> {
    for _ in 0..MAX_ATTEMPTS {
        let expression = build_expression(difficulty, rng);
        let Ok(evaluation) = evaluate(&expression) else {
            continue;
        };
        if !is_integer(evaluation.value) {
            continue;
        }

        let mut options = Vec::with_capacity(DISTRACTOR_COUNT + 1);
        options.push(evaluation.value);
        options.extend(build_distractors(evaluation.value, rng));
        shuffle(&mut options, rng);

        return Ok(QuizQuestion { expression,
                                 answer: evaluation.value,
                                 options,
                                 steps: evaluation.steps,
                                 difficulty });
    }

    Err(QuizError::AttemptsExhausted { difficulty,
                                       attempts: MAX_ATTEMPTS, })
}

/// Builds the wrong options: distinct non-zero offsets from the answer,
/// deduplicated through an ordered set so generation stays deterministic
/// for a given random source.
#[allow(clippy::cast_precision_loss)]
fn build_distractors(answer: f64, rng: &mut impl FnMut() -> f64) -> Vec<f64> {
    let mut distractors: BTreeSet<OrderedFloat<f64>> = BTreeSet::new();

    while distractors.len() < DISTRACTOR_COUNT {
        let offset = random_int(-DISTRACTOR_SPREAD, DISTRACTOR_SPREAD, rng);
        if offset == 0 {
            continue;
        }
        distractors.insert(OrderedFloat(format_number(answer + offset as f64)));
    }

    distractors.into_iter().map(OrderedFloat::into_inner).collect()
}
