use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::binary::{
            resolve_addition_subtraction, resolve_exponents, resolve_multiplication_division,
        },
        evaluator::grouping::resolve_grouping,
        lexer::Token,
    },
    step::{Step, StepScope},
};

/// Result type used by the evaluator.
///
/// All reduction functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Mints step identifiers in evaluation order.
///
/// One counter is threaded through the whole evaluation, including
/// recursive group reductions, so every step in the tree gets a distinct
/// id and identical inputs always produce identical traces.
#[derive(Debug, Default)]
pub(crate) struct StepIds {
    next: usize,
}

impl StepIds {
    /// Returns the next unused step id.
    pub(crate) fn mint(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// The outcome of reducing one token stream: its numeric value and the
/// steps recorded at that lexical level.
#[derive(Debug)]
pub(crate) struct Reduction {
    /// The value the stream reduced to.
    pub(crate) value: f64,
    /// The steps recorded while reducing it, in evaluation order.
    pub(crate) steps: Vec<Step>,
}

/// Reduces an owned token stream to a single number.
///
/// Runs the four precedence passes in order over a private mutable
/// buffer: grouping, exponents, multiplication/division, and
/// addition/subtraction. Each pass repeatedly locates the next reducible
/// site, splices the reduced range into a single number token, and
/// appends a step. There is no backtracking; after the four passes the
/// buffer must hold exactly one number.
///
/// # Parameters
/// - `tokens`: The token stream to reduce. Ownership is taken; the caller
///   keeps no alias.
/// - `scope`: Whether this stream is the outermost expression or the
///   interior of a parenthesized group.
/// - `depth`: Count of open parentheses enclosing this stream in the
///   original expression.
/// - `ids`: The shared step id counter.
///
/// # Returns
/// The final value together with the steps recorded at this level.
pub(crate) fn reduce(mut tokens: Vec<Token>,
                     scope: StepScope,
                     depth: usize,
                     ids: &mut StepIds)
                     -> EvalResult<Reduction> {
    let mut steps = Vec::new();

    resolve_grouping(&mut tokens, &mut steps, scope, depth, ids)?;
    resolve_exponents(&mut tokens, &mut steps, scope, depth, ids)?;
    resolve_multiplication_division(&mut tokens, &mut steps, scope, depth, ids)?;
    resolve_addition_subtraction(&mut tokens, &mut steps, scope, depth, ids)?;

    match tokens.as_slice() {
        [Token::Number(value)] => Ok(Reduction { value: *value,
                                                 steps }),
        _ => Err(EvaluationError::IncompleteReduction),
    }
}

/// Replaces the inclusive token range `start..=end` with a single number
/// token holding `value`.
pub(super) fn collapse(tokens: &mut Vec<Token>, start: usize, end: usize, value: f64) {
    tokens.drain(start..=end);
    tokens.insert(start, Token::Number(value));
}
