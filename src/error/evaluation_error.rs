use crate::interpreter::lexer::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing or evaluating an
/// expression.
///
/// Every failure aborts the whole evaluation; there is no partial-result
/// mode. The rendered messages are written to be shown directly to the
/// person who typed the expression.
pub enum EvaluationError {
    /// The input was empty or contained only whitespace.
    EmptyExpression,
    /// The input contained a character outside digits, `.`, whitespace,
    /// the five operators, and parentheses.
    UnexpectedCharacter {
        /// The offending character.
        found: char,
    },
    /// A numeric literal did not parse (e.g. `1.2.3`).
    InvalidNumber {
        /// The malformed literal text.
        literal: String,
    },
    /// A close parenthesis had no matching open parenthesis, or
    /// parentheses were left over after grouping resolution.
    MismatchedParentheses,
    /// A parenthesized group had nothing inside it.
    EmptyParentheses,
    /// An operator was missing a numeric operand on one or both sides
    /// (e.g. consecutive operators).
    MissingOperands {
        /// The operator that lacked operands.
        operator: Operator,
    },
    /// The right-hand side of a division was exactly zero.
    DivisionByZero,
    /// The token stream did not reduce to a single number after all four
    /// precedence passes (e.g. implicit multiplication like `2 (3 + 4)`).
    IncompleteReduction,
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Enter an expression to evaluate."),
            Self::UnexpectedCharacter { found } => {
                write!(f, "Unexpected character: '{found}'.")
            },
            Self::InvalidNumber { literal } => {
                write!(f, "Invalid number in expression: '{literal}'.")
            },
            Self::MismatchedParentheses => write!(f, "Mismatched parentheses detected."),
            Self::EmptyParentheses => write!(f, "Empty parentheses are not allowed."),
            Self::MissingOperands { operator } => {
                write!(f, "Operator '{operator}' is missing numeric operands.")
            },
            Self::DivisionByZero => write!(f, "Division by zero is not allowed."),
            Self::IncompleteReduction => {
                write!(f, "Could not fully evaluate the expression.")
            },
        }
    }
}

impl std::error::Error for EvaluationError {}
