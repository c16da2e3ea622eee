use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::core::{EvalResult, StepIds, collapse},
        evaluator::describe::operator_description,
        lexer::{Operator, Token, render_tokens},
    },
    step::{OrderRule, Step, StepScope},
    util::num::format_number,
};

/// Resolves every `^` in the stream, rightmost first.
///
/// Reducing the rightmost exponent first makes the operator associate to
/// the right, so `2 ^ 3 ^ 2` evaluates as `2 ^ (3 ^ 2)`.
pub(super) fn resolve_exponents(tokens: &mut Vec<Token>,
                                steps: &mut Vec<Step>,
                                scope: StepScope,
                                depth: usize,
                                ids: &mut StepIds)
                                -> EvalResult<()> {
    while let Some((index, operator)) = rightmost_operator(tokens, OrderRule::Exponents) {
        reduce_operator_at(tokens, index, operator, steps, scope, depth, ids)?;
    }

    Ok(())
}

/// Resolves every `*` and `/` in the stream, leftmost first.
pub(super) fn resolve_multiplication_division(tokens: &mut Vec<Token>,
                                              steps: &mut Vec<Step>,
                                              scope: StepScope,
                                              depth: usize,
                                              ids: &mut StepIds)
                                              -> EvalResult<()> {
    while let Some((index, operator)) =
        leftmost_operator(tokens, OrderRule::MultiplicationDivision)
    {
        reduce_operator_at(tokens, index, operator, steps, scope, depth, ids)?;
    }

    Ok(())
}

/// Resolves every `+` and `-` in the stream, leftmost first.
pub(super) fn resolve_addition_subtraction(tokens: &mut Vec<Token>,
                                           steps: &mut Vec<Step>,
                                           scope: StepScope,
                                           depth: usize,
                                           ids: &mut StepIds)
                                           -> EvalResult<()> {
    while let Some((index, operator)) = leftmost_operator(tokens, OrderRule::AdditionSubtraction) {
        reduce_operator_at(tokens, index, operator, steps, scope, depth, ids)?;
    }

    Ok(())
}

/// Finds the first operator of the given tier, scanning left to right.
fn leftmost_operator(tokens: &[Token], rule: OrderRule) -> Option<(usize, Operator)> {
    operators_in(tokens, rule).next()
}

/// Finds the last operator of the given tier, scanning left to right.
fn rightmost_operator(tokens: &[Token], rule: OrderRule) -> Option<(usize, Operator)> {
    operators_in(tokens, rule).last()
}

fn operators_in(tokens: &[Token],
                rule: OrderRule)
                -> impl Iterator<Item = (usize, Operator)> + '_ {
    tokens.iter().enumerate().filter_map(move |(index, token)| match token {
                                             Token::Operator(op) if op.rule() == rule => {
                                                 Some((index, *op))
                                             },
                                             _ => None,
                                         })
}

/// Combines the numeric neighbors of the operator at `index`, splices the
/// triple into a single number token, and records the step.
///
/// # Errors
/// - [`EvaluationError::MissingOperands`] if either side of the operator
///   is not a number token.
/// - [`EvaluationError::DivisionByZero`] for division by exactly zero.
fn reduce_operator_at(tokens: &mut Vec<Token>,
                      index: usize,
                      operator: Operator,
                      steps: &mut Vec<Step>,
                      scope: StepScope,
                      depth: usize,
                      ids: &mut StepIds)
                      -> EvalResult<()> {
    let left = match index.checked_sub(1).and_then(|i| tokens.get(i)) {
        Some(Token::Number(value)) => *value,
        _ => return Err(EvaluationError::MissingOperands { operator }),
    };
    let right = match tokens.get(index + 1) {
        Some(Token::Number(value)) => *value,
        _ => return Err(EvaluationError::MissingOperands { operator }),
    };

    let before = render_tokens(tokens);
    let operation = render_tokens(&tokens[index - 1..=index + 1]);
    let result = compute(left, operator, right)?;

    collapse(tokens, index - 1, index + 1, result);
    let after = render_tokens(tokens);

    steps.push(Step { id: ids.mint(),
                      rule: operator.rule(),
                      scope,
                      depth,
                      before,
                      after,
                      operation,
                      result,
                      description: operator_description(operator, scope),
                      operator: Some(operator),
                      children: Vec::new(), });

    Ok(())
}

/// Applies one binary operation and canonicalizes the result.
///
/// # Errors
/// Returns [`EvaluationError::DivisionByZero`] when dividing by exactly
/// zero.
fn compute(left: f64, operator: Operator, right: f64) -> EvalResult<f64> {
    let value = match operator {
        Operator::Caret => left.powf(right),
        Operator::Star => left * right,
        Operator::Slash => {
            if right == 0.0 {
                return Err(EvaluationError::DivisionByZero);
            }
            left / right
        },
        Operator::Plus => left + right,
        Operator::Minus => left - right,
    };

    Ok(format_number(value))
}
