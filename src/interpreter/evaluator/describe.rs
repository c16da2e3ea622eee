use crate::{interpreter::lexer::Operator, step::StepScope};

/// Produces the explanation attached to a grouping step.
///
/// Outermost groups and groups resolved inside another group are phrased
/// differently, so the timeline reads naturally when replayed.
pub(super) fn grouping_description(scope: StepScope) -> String {
    match scope {
        StepScope::Global => {
            "Resolve what is inside the parentheses first; grouping outranks every other rule."
                .to_string()
        },
        StepScope::Group => {
            "Resolve the innermost parentheses before the surrounding group can be worked out."
                .to_string()
        },
    }
}

/// Produces the explanation attached to an operator step.
///
/// Names the specific operation and justifies it by citing the
/// higher-precedence categories that are already absent in the current
/// scope.
pub(super) fn operator_description(operator: Operator, scope: StepScope) -> String {
    let operation = operator.name();
    let here = match scope {
        StepScope::Global => "",
        StepScope::Group => " inside this group",
    };

    match operator {
        Operator::Caret => {
            format!("No parentheses are left{here}, so apply the {operation} next; exponents \
                     outrank multiplication, division, addition, and subtraction.")
        },
        Operator::Star | Operator::Slash => {
            format!("With parentheses and exponents out of the way{here}, work through the \
                     {operation} from left to right.")
        },
        Operator::Plus | Operator::Minus => {
            format!("Only addition and subtraction remain{here}, so finish with the {operation} \
                     from left to right.")
        },
    }
}
