//! # bodmas
//!
//! bodmas is an order-of-operations calculator written in Rust.
//! It tokenizes and evaluates arithmetic expressions one precedence rule
//! at a time, emitting a structured, replayable trace of every reduction
//! it performs, including reductions inside nested parentheses, and can
//! generate practice questions built on that evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::core::{Reduction, StepIds, reduce},
        lexer::tokenize,
    },
    step::{EvaluationResult, StepScope},
};

/// Maps rule tags onto regional mnemonic labels and display colors.
///
/// BODMAS, BIRDMAS, and PEMDAS are different names for the same
/// precedence ordering; this module is the pure lookup table between the
/// evaluator's rule tags and those presentation labels.
///
/// # Responsibilities
/// - Defines the `OrderConvention` enum and its label table.
/// - Provides the fixed per-rule display palette.
/// - Stays entirely outside the evaluator's contract.
pub mod convention;
/// Provides unified error types for evaluation and quiz generation.
///
/// This module defines all errors that can be raised while tokenizing or
/// evaluating an expression, or while generating a quiz question. It
/// standardizes error reporting with messages written to be shown
/// directly to the end user.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator, quiz).
/// - Carries the offending character, literal, or operator for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates tokenization and step-traced evaluation.
///
/// This module ties together the lexer and the four-pass reducer to turn
/// raw expression text into a final value plus a hierarchical trace of
/// every reduction performed along the way.
///
/// # Responsibilities
/// - Coordinates the lexer and the precedence passes.
/// - Produces the step tree consumed by presentation layers.
/// - Propagates evaluation errors without partial results.
pub mod interpreter;
/// Generates practice questions from synthesized expressions.
///
/// This module builds random expressions per difficulty tier, evaluates
/// them with the step-traced evaluator, and packages whole-number results
/// as multiple-choice questions. All randomness is injected, so tests can
/// supply a deterministic source.
///
/// # Responsibilities
/// - Synthesizes expressions for the easy/medium/hard/insane tiers.
/// - Retries until an expression evaluates to a whole number.
/// - Assembles distinct answer options and the worked step trace.
pub mod quiz;
/// Defines the evaluation trace data model.
///
/// This module declares the `Step` record and related types that describe
/// how a value was derived: which rule fired, where, at what nesting
/// depth, and what the whole expression looked like before and after.
///
/// # Responsibilities
/// - Defines `OrderRule`, `StepScope`, `Step`, and `EvaluationResult`.
/// - Models grouping steps as owners of their interior's trace.
/// - Keeps steps immutable once produced.
pub mod step;
/// General numeric utilities.
///
/// This module provides the canonical rounding routine shared by the
/// evaluator and the quiz generator, so every number is rounded and
/// rendered the same way everywhere.
///
/// # Responsibilities
/// - Rounds results to the fixed 6-decimal tolerance.
/// - Coerces integral values to whole-number form.
pub mod util;

/// Evaluates an arithmetic expression and returns its value together with
/// the full ordered trace of reductions that produced it.
///
/// The expression may use numbers, `^ * / + -`, and parentheses, with
/// insignificant whitespace and unary minus on numeric literals. The
/// trace is hierarchical: each parenthesized group contributes one
/// grouping step that owns its interior's steps as children. Evaluation
/// is deterministic: identical input yields an identical result, step ids
/// included, and leaves no shared state behind.
///
/// # Errors
/// Returns an [`EvaluationError`] for empty input, lexical errors,
/// mismatched or empty parentheses, operators missing operands, division
/// by zero, or a stream that does not reduce to a single number.
///
/// # Examples
/// ```
/// use bodmas::{evaluate, step::OrderRule};
///
/// let result = evaluate("2 + 2 * 4").unwrap();
/// assert_eq!(result.value, 10.0);
/// assert_eq!(result.steps.len(), 2);
/// assert_eq!(result.steps[0].rule, OrderRule::MultiplicationDivision);
///
/// // Errors abort the whole evaluation.
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<EvaluationResult, EvaluationError> {
    if expression.trim().is_empty() {
        return Err(EvaluationError::EmptyExpression);
    }

    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        return Err(EvaluationError::EmptyExpression);
    }

    let mut ids = StepIds::default();
    let Reduction { value, steps } = reduce(tokens, StepScope::Global, 0, &mut ids)?;

    Ok(EvaluationResult { value, steps })
}
