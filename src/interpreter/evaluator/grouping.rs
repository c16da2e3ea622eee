use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::core::{EvalResult, Reduction, StepIds, collapse, reduce},
        evaluator::describe::grouping_description,
        lexer::{Paren, Token, render_tokens},
    },
    step::{OrderRule, Step, StepScope},
};

/// Resolves every parenthesized group in the stream, innermost first.
///
/// Repeatedly locates the first close parenthesis and scans backward to
/// its matching open parenthesis. Because the first close parenthesis
/// always terminates an innermost group, the isolated interior is
/// paren-free and can be handed to [`reduce`] directly. The group
/// (parentheses included) is then spliced into a single number token and
/// one grouping step is recorded, owning the interior's full trace as
/// children with their snapshots rewritten into outer context.
///
/// # Errors
/// - [`EvaluationError::MismatchedParentheses`] if a close parenthesis has
///   no matching open parenthesis, or parens remain after the pass.
/// - [`EvaluationError::EmptyParentheses`] if a group has nothing inside.
/// - Any error produced while reducing a group's interior.
pub(super) fn resolve_grouping(tokens: &mut Vec<Token>,
                               steps: &mut Vec<Step>,
                               scope: StepScope,
                               base_depth: usize,
                               ids: &mut StepIds)
                               -> EvalResult<()> {
    while let Some(close) = tokens.iter()
                                  .position(|token| matches!(token, Token::Paren(Paren::Close)))
    {
        let open = tokens[..close].iter()
                                  .rposition(|token| matches!(token, Token::Paren(Paren::Open)))
                                  .ok_or(EvaluationError::MismatchedParentheses)?;

        let interior: Vec<Token> = tokens[open + 1..close].to_vec();
        if interior.is_empty() {
            return Err(EvaluationError::EmptyParentheses);
        }

        let nesting = nesting_depth(tokens, open, base_depth);
        let inner = reduce(interior, StepScope::Group, nesting, ids)?;

        let before = render_tokens(tokens);
        let operation = render_tokens(&tokens[open..=close]);
        let prefix = render_tokens(&tokens[..=open]);
        let suffix = render_tokens(&tokens[close..]);

        collapse(tokens, open, close, inner.value);
        let after = render_tokens(tokens);

        let step_scope = if nesting > 1 || scope == StepScope::Group {
            StepScope::Group
        } else {
            StepScope::Global
        };

        let Reduction { value, steps: interior_steps } = inner;
        steps.push(Step { id: ids.mint(),
                          rule: OrderRule::Grouping,
                          scope: step_scope,
                          depth: nesting,
                          before,
                          after,
                          operation,
                          result: value,
                          description: grouping_description(step_scope),
                          operator: None,
                          children: embed_children(interior_steps, &prefix, &suffix), });
    }

    if tokens.iter().any(|token| matches!(token, Token::Paren(_))) {
        return Err(EvaluationError::MismatchedParentheses);
    }

    Ok(())
}

/// Computes the nesting depth of the group opened at `open`: the caller's
/// base depth plus the net parenthesis count up to and including the open
/// parenthesis.
fn nesting_depth(tokens: &[Token], open: usize, base_depth: usize) -> usize {
    let mut depth = base_depth;

    for token in &tokens[..=open] {
        match token {
            Token::Paren(Paren::Open) => depth += 1,
            Token::Paren(Paren::Close) => depth = depth.saturating_sub(1),
            _ => {},
        }
    }

    depth
}

/// Rewrites interior step snapshots so a reader always sees the whole
/// expression: the un-reduced tokens up to and including the open
/// parenthesis are prepended, and the close parenthesis plus the trailing
/// tokens are appended.
fn embed_children(steps: Vec<Step>, prefix: &str, suffix: &str) -> Vec<Step> {
    steps.into_iter()
         .map(|step| {
             let before = format!("{prefix} {} {suffix}", step.before);
             let after = format!("{prefix} {} {suffix}", step.after);
             Step { before,
                    after,
                    ..step }
         })
         .collect()
}
