use bodmas::{
    error::EvaluationError,
    evaluate,
    interpreter::lexer::{Operator, tokenize},
    step::{EvaluationResult, OrderRule, Step, StepScope},
};

fn eval(expression: &str) -> EvaluationResult {
    evaluate(expression).unwrap_or_else(|e| panic!("'{expression}' failed to evaluate: {e}"))
}

fn eval_err(expression: &str) -> EvaluationError {
    match evaluate(expression) {
        Ok(result) => panic!("'{expression}' evaluated to {} but was expected to fail",
                             result.value),
        Err(e) => e,
    }
}

#[test]
fn multiplication_before_addition() {
    let result = eval("2 + 2 * 4");

    assert_eq!(result.value, 10.0);
    assert_eq!(result.steps.len(), 2);

    assert_eq!(result.steps[0].rule, OrderRule::MultiplicationDivision);
    assert_eq!(result.steps[0].operation, "2 * 4");
    assert_eq!(result.steps[0].after, "2 + 8");
    assert_eq!(result.steps[0].scope, StepScope::Global);
    assert_eq!(result.steps[0].operator, Some(Operator::Star));

    assert_eq!(result.steps[1].rule, OrderRule::AdditionSubtraction);
    assert_eq!(result.steps[1].after, "10");
}

#[test]
fn brackets_and_orders() {
    let result = eval("(8 - 2) ^ 2");

    assert_eq!(result.value, 36.0);

    let grouping = result.steps
                         .iter()
                         .find(|step| step.rule == OrderRule::Grouping)
                         .expect("no grouping step recorded");
    assert_eq!(grouping.operation, "( 8 - 2 )");
    assert_eq!(grouping.result, 6.0);

    let orders = result.steps
                       .iter()
                       .find(|step| step.rule == OrderRule::Exponents)
                       .expect("no exponent step recorded");
    assert_eq!(orders.after, "36");
    assert_eq!(orders.operator, Some(Operator::Caret));
}

#[test]
fn bracket_work_is_owned_by_the_grouping_step() {
    let result = eval("12 / (2 + 1) + 3");

    assert_eq!(result.value, 7.0);
    assert_eq!(result.steps.len(), 3);

    let grouping = &result.steps[0];
    assert_eq!(grouping.rule, OrderRule::Grouping);
    assert_eq!(grouping.before, "12 / ( 2 + 1 ) + 3");
    assert_eq!(grouping.after, "12 / 3 + 3");
    assert_eq!(grouping.scope, StepScope::Global);
    assert_eq!(grouping.depth, 1);
    assert_eq!(grouping.operator, None);
    assert_eq!(grouping.children.len(), 1);

    // The child snapshot shows the whole outer expression, not just the
    // group interior.
    let addition = &grouping.children[0];
    assert_eq!(addition.rule, OrderRule::AdditionSubtraction);
    assert_eq!(addition.before, "12 / ( 2 + 1 ) + 3");
    assert_eq!(addition.after, "12 / ( 3 ) + 3");
    assert_eq!(addition.scope, StepScope::Group);
    assert_eq!(addition.operator, Some(Operator::Plus));

    assert_eq!(result.steps[1].rule, OrderRule::MultiplicationDivision);
    assert_eq!(result.steps[1].before, "12 / 3 + 3");
    assert_eq!(result.steps[1].after, "4 + 3");
    assert_eq!(result.steps[1].operator, Some(Operator::Slash));

    assert_eq!(result.steps[2].rule, OrderRule::AdditionSubtraction);
    assert_eq!(result.steps[2].after, "7");
    assert_eq!(result.steps[2].scope, StepScope::Global);
}

#[test]
fn nested_brackets_carry_their_depth() {
    let result = eval("2 * (3 + (4 - 1))");

    assert_eq!(result.value, 12.0);

    let grouping: Vec<&Step> = result.steps
                                     .iter()
                                     .filter(|step| step.rule == OrderRule::Grouping)
                                     .collect();
    assert_eq!(grouping.len(), 2);
    assert_eq!(grouping[0].depth, 2);
    assert_eq!(grouping[1].depth, 1);
    assert!(grouping[0].depth > grouping[1].depth);

    // Innermost group first.
    assert!(grouping[0].before.contains("( 4 - 1 )"));
    assert!(grouping[0].after.contains("( 3 + 3 )"));
    assert_eq!(grouping[0].scope, StepScope::Group);
    assert_eq!(grouping[0].children.len(), 1);
    assert!(grouping[0].children[0].before.contains("( 4 - 1 )"));
    assert!(grouping[0].children[0].after.contains("( 3 )"));
    assert_eq!(grouping[0].children[0].scope, StepScope::Group);
    assert_eq!(grouping[0].children[0].operator, Some(Operator::Minus));

    assert!(grouping[1].before.contains("( 3 + 3 )"));
    assert!(grouping[1].after.contains("2 * 6"));
    assert_eq!(grouping[1].scope, StepScope::Global);
    assert_eq!(grouping[1].children.len(), 1);
    assert!(grouping[1].children[0].after.contains("( 6 )"));
    assert_eq!(grouping[1].children[0].operator, Some(Operator::Plus));
}

#[test]
fn exponents_associate_to_the_right() {
    let result = eval("2 ^ 3 ^ 2");

    assert_eq!(result.value, 512.0);
    assert_eq!(result.steps.len(), 2);
    assert_eq!(result.steps[0].operation, "3 ^ 2");
    assert_eq!(result.steps[0].result, 9.0);
    assert_eq!(result.steps[1].operation, "2 ^ 9");
}

#[test]
fn unary_minus_signs_literals() {
    assert_eq!(eval("-5 + 3").value, -2.0);
    assert_eq!(eval("2 * -3").value, -6.0);
    assert_eq!(eval("(-4 + 1) * 2").value, -6.0);
    assert_eq!(eval("10 - -5").value, 15.0);
}

#[test]
fn results_are_rounded_to_tolerance() {
    assert_eq!(eval("0.1 + 0.2").value, 0.3);
    assert_eq!(eval("3 / 2").value, 1.5);

    // Integral results render without a fractional part.
    let result = eval("2.5 * 2");
    assert_eq!(result.value, 5.0);
    assert_eq!(result.steps[0].after, "5");
}

#[test]
fn evaluation_is_deterministic() {
    let first = eval("(2 + 3) * (4 - 1) ^ 2");
    let second = eval("(2 + 3) * (4 - 1) ^ 2");

    assert_eq!(first, second);
}

#[test]
fn step_ids_are_unique_across_the_tree() {
    fn collect_ids(steps: &[Step], ids: &mut Vec<usize>) {
        for step in steps {
            ids.push(step.id);
            collect_ids(&step.children, ids);
        }
    }

    let result = eval("(2 + 3) * (4 - (1 + 1)) ^ 2");
    let mut ids = Vec::new();
    collect_ids(&result.steps, &mut ids);

    let recorded = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), recorded);
}

#[test]
fn snapshots_always_retokenize() {
    fn assert_snapshots_lex(steps: &[Step]) {
        for step in steps {
            assert!(tokenize(&step.before).is_ok(),
                    "before snapshot failed to tokenize: {}",
                    step.before);
            assert!(tokenize(&step.after).is_ok(),
                    "after snapshot failed to tokenize: {}",
                    step.after);
            assert_snapshots_lex(&step.children);
        }
    }

    for expression in ["2 + 2 * 4",
                       "12 / (2 + 1) + 3",
                       "2 * (3 + (4 - 1))",
                       "(8 - 2) ^ 2",
                       "-2.5 * (1.5 + 0.5)"]
    {
        assert_snapshots_lex(&eval(expression).steps);
    }
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(eval_err(""), EvaluationError::EmptyExpression);
    assert_eq!(eval_err("   "), EvaluationError::EmptyExpression);
}

#[test]
fn lexical_errors_are_rejected() {
    assert_eq!(eval_err("2 + x"),
               EvaluationError::UnexpectedCharacter { found: 'x' });
    assert_eq!(eval_err("1.2.3 + 1"),
               EvaluationError::InvalidNumber { literal: "1.2.3".to_string() });
}

#[test]
fn parenthesis_errors_are_rejected() {
    assert_eq!(eval_err("((2+3)"), EvaluationError::MismatchedParentheses);
    assert_eq!(eval_err("2+3)"), EvaluationError::MismatchedParentheses);
    assert_eq!(eval_err("(2+3"), EvaluationError::MismatchedParentheses);
    assert_eq!(eval_err("()"), EvaluationError::EmptyParentheses);
}

#[test]
fn malformed_sequences_are_rejected() {
    assert_eq!(eval_err("2 + * 3"),
               EvaluationError::MissingOperands { operator: Operator::Star });
    assert_eq!(eval_err("2 +"),
               EvaluationError::MissingOperands { operator: Operator::Plus });
    assert_eq!(eval_err("-(2 + 3)"),
               EvaluationError::MissingOperands { operator: Operator::Minus });
}

#[test]
fn division_by_zero_is_rejected() {
    assert_eq!(eval_err("5 / 0"), EvaluationError::DivisionByZero);
    assert_eq!(eval_err("1 / (3 - 3)"), EvaluationError::DivisionByZero);
}

#[test]
fn implicit_multiplication_is_rejected() {
    assert_eq!(eval_err("2 (3 + 4)"), EvaluationError::IncompleteReduction);
    assert_eq!(eval_err("2(3+4)"), EvaluationError::IncompleteReduction);
}
