/// Operator reduction passes.
///
/// Implements the exponent, multiplication/division, and
/// addition/subtraction passes: locating the next operator for a tier,
/// combining its numeric neighbors, and recording the step.
pub mod binary;
/// The reduction driver.
///
/// Owns the pass ordering (grouping, then exponents, then
/// multiplication/division, then addition/subtraction), the shared
/// token-splicing helper, and the step id counter.
pub mod core;
/// Step description text.
///
/// Produces the rule- and scope-aware sentences attached to every step,
/// explaining why a rule fired at that point.
pub mod describe;
/// Parenthesis resolution.
///
/// Finds innermost groups, recursively reduces their interiors, and
/// records grouping steps that own the interior's trace as children.
pub mod grouping;
