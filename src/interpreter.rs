/// The evaluator module reduces token streams by precedence tier.
///
/// The evaluator takes the flat token sequence produced by the lexer,
/// recursively resolves parenthesized groups innermost-first, then folds
/// the remaining stream one precedence tier at a time. Alongside the final
/// value it records one [`crate::step::Step`] for every reduction it
/// performs, so callers can replay exactly how the answer was derived.
///
/// # Responsibilities
/// - Resolves grouping, exponents, multiplication/division, and
///   addition/subtraction in strict descending order.
/// - Records a before/after snapshot, depth, scope, and description for
///   every reduction, nesting group-interior traces under their grouping
///   step.
/// - Reports evaluation errors such as mismatched parentheses, missing
///   operands, and division by zero.
pub mod evaluator;
/// The lexer module tokenizes raw expression text.
///
/// The lexer reads the input string and produces a stream of typed tokens:
/// numeric literals, the five operators, and parentheses. Unary minus is
/// folded into the following numeric literal here, so the evaluator only
/// ever sees binary operators. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, skipping
///   insignificant whitespace.
/// - Distinguishes unary minus from binary subtraction by context.
/// - Reports lexical errors for unrecognized characters and malformed
///   numeric literals.
pub mod lexer;
