use logos::Logos;

use crate::{error::EvaluationError, step::OrderRule, util::num::format_number};

/// A binary operator symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Exponentiation (`^`).
    Caret,
    /// Multiplication (`*`).
    Star,
    /// Division (`/`).
    Slash,
    /// Addition (`+`).
    Plus,
    /// Subtraction (`-`).
    Minus,
}

impl Operator {
    /// Returns the character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Caret => '^',
            Self::Star => '*',
            Self::Slash => '/',
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }

    /// Returns the precedence tier this operator is resolved in.
    #[must_use]
    pub const fn rule(self) -> OrderRule {
        match self {
            Self::Caret => OrderRule::Exponents,
            Self::Star | Self::Slash => OrderRule::MultiplicationDivision,
            Self::Plus | Self::Minus => OrderRule::AdditionSubtraction,
        }
    }

    /// Returns the English name of the operation, used in step
    /// descriptions.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Caret => "exponentiation",
            Self::Star => "multiplication",
            Self::Slash => "division",
            Self::Plus => "addition",
            Self::Minus => "subtraction",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A grouping symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    /// `(`
    Open,
    /// `)`
    Close,
}

/// A lexical token of an arithmetic expression.
///
/// Produced once by [`tokenize`] and never mutated afterwards; the
/// evaluator reduces its own private copy of the token sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal, with any unary minus already folded in.
    Number(f64),
    /// One of the five binary operators.
    Operator(Operator),
    /// An open or close parenthesis.
    Paren(Paren),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", format_number(*value)),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Paren(Paren::Open) => write!(f, "("),
            Self::Paren(Paren::Close) => write!(f, ")"),
        }
    }
}

/// Renders a token sequence as a canonical, re-tokenizable expression
/// string: numbers in rounded form, tokens separated by single spaces.
#[must_use]
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}

/// Raw lexemes recognized by the logos scanner.
///
/// Numeric literals are matched as a maximal run of digits and dots so
/// that a malformed literal like `1.2.3` surfaces as a lexical error over
/// the whole run instead of silently splitting into two numbers.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Lexeme {
    /// Numeric literal such as `42`, `3.14`, or `.5`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `^`
    #[token("^")]
    Caret,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Whitespace is insignificant everywhere.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current lexer slice.
///
/// # Parameters
/// - `lex`: Reference to the logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid number.
/// - `None`: If the slice is malformed (e.g. `1.2.3` or a lone `.`),
///   which logos reports as a lexical error over that slice.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts a raw expression string into a flat token sequence.
///
/// Whitespace is skipped. A `-` is folded into the following numeric
/// literal as its sign when it appears at the start of the stream,
/// immediately after another operator, or immediately after an open
/// parenthesis; everywhere else it is the binary subtraction operator.
///
/// There is no implicit multiplication: `2 (3 + 4)` tokenizes to adjacent
/// number and group tokens and is rejected later by the evaluator.
///
/// # Errors
/// Returns an [`EvaluationError`] when the input contains a character
/// outside digits, `.`, whitespace, `^ * / + -`, and parentheses, or when
/// a numeric literal does not parse.
///
/// # Example
/// ```
/// use bodmas::interpreter::lexer::{Operator, Token, tokenize};
///
/// let tokens = tokenize("-2 + 3").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(-2.0),
///                 Token::Operator(Operator::Plus),
///                 Token::Number(3.0)]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, EvaluationError> {
    let mut lexer = Lexeme::lexer(expression);
    let mut lexemes = Vec::new();

    while let Some(lexeme) = lexer.next() {
        match lexeme {
            Ok(lexeme) => lexemes.push(lexeme),
            Err(()) => {
                let slice = lexer.slice();
                let starts_numeric = slice.starts_with(|c: char| c.is_ascii_digit() || c == '.');

                return Err(if starts_numeric {
                               EvaluationError::InvalidNumber { literal: slice.to_string(), }
                           } else {
                               EvaluationError::UnexpectedCharacter { found: slice.chars()
                                                                                 .next()
                                                                                 .unwrap_or(' '), }
                           });
            },
        }
    }

    let mut tokens = Vec::with_capacity(lexemes.len());
    let mut iter = lexemes.into_iter().peekable();

    while let Some(lexeme) = iter.next() {
        let token = match lexeme {
            Lexeme::Number(value) => Token::Number(value),
            Lexeme::LParen => Token::Paren(Paren::Open),
            Lexeme::RParen => Token::Paren(Paren::Close),
            Lexeme::Minus if signs_a_literal(tokens.last()) => {
                if let Some(Lexeme::Number(value)) = iter.peek().copied() {
                    iter.next();
                    Token::Number(-value)
                } else {
                    Token::Operator(Operator::Minus)
                }
            },
            Lexeme::Minus => Token::Operator(Operator::Minus),
            Lexeme::Caret => Token::Operator(Operator::Caret),
            Lexeme::Star => Token::Operator(Operator::Star),
            Lexeme::Slash => Token::Operator(Operator::Slash),
            Lexeme::Plus => Token::Operator(Operator::Plus),
            Lexeme::Ignored => continue,
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Whether a `-` in this position signs the following numeric literal
/// rather than acting as binary subtraction.
const fn signs_a_literal(previous: Option<&Token>) -> bool {
    matches!(previous,
             None | Some(Token::Operator(_)) | Some(Token::Paren(Paren::Open)))
}
