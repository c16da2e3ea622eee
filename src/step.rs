use crate::interpreter::lexer::Operator;

/// The four precedence tiers, in the order the evaluator applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderRule {
    /// Parenthesized groups, resolved before anything else.
    Grouping,
    /// `^`, resolved right to left.
    Exponents,
    /// `*` and `/`, resolved left to right at equal priority.
    MultiplicationDivision,
    /// `+` and `-`, resolved left to right at equal priority.
    AdditionSubtraction,
}

/// Where a step happened relative to parenthesized grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepScope {
    /// The step applied at the outermost level of the expression.
    Global,
    /// The step applied inside a parenthesized group.
    Group,
}

/// One recorded reduction.
///
/// A step is a complete snapshot of a single rule application: the whole
/// expression before and after, the sub-expression that was combined, and
/// the value it produced. Grouping steps additionally own the trace of
/// everything that happened inside their parentheses as `children`, with
/// those child snapshots rewritten to show the full outer expression.
/// Steps are immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Identifier unique within one evaluation, minted in evaluation
    /// order across the whole tree.
    pub id:          usize,
    /// The precedence tier that fired.
    pub rule:        OrderRule,
    /// Whether the step applied globally or inside a group.
    pub scope:       StepScope,
    /// How many parentheses enclosed the reduced site. Zero at the
    /// outermost level; a grouping step's depth counts its own pair.
    pub depth:       usize,
    /// The whole expression immediately before this step, in canonical
    /// rendered form.
    pub before:      String,
    /// The whole expression immediately after this step.
    pub after:       String,
    /// The sub-expression this step combined, e.g. `2 * 4` or
    /// `( 2 + 1 )`.
    pub operation:   String,
    /// The value the operation produced, in canonical rounded form.
    pub result:      f64,
    /// A one-sentence explanation of why this rule applied here.
    pub description: String,
    /// The operator that fired; `None` for grouping steps.
    pub operator:    Option<Operator>,
    /// For grouping steps, the interior's trace in evaluation order.
    /// Always empty for operator steps.
    pub children:    Vec<Step>,
}

/// The outcome of a successful evaluation: the final value and the
/// ordered top-level step trace that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    /// The value the expression reduced to.
    pub value: f64,
    /// Top-level steps in evaluation order; grouping steps carry their
    /// interior's steps as children.
    pub steps: Vec<Step>,
}
