use tracing::{debug, trace};

use crate::diagnostics::EvalError;

// Nested groups recurse once per `(`; past this much remaining stack the
// recursion continues on a fresh heap-allocated segment.
const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_SEGMENT: usize = 1024 * 1024;

/// Evaluates an arithmetic expression made of decimal numbers, `+ - * /`
/// and parentheses. Every space character is removed before parsing.
pub fn evaluate(text: &str) -> Result<f64, EvalError> {
    Evaluator::new(text).run()
}

/// Recursive-descent evaluator over the space-stripped input.
///
/// The three grammar levels share one cursor that only moves forward:
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := '(' expression ')' | number
/// number     := digit+ ('.' digit+)?
/// ```
pub struct Evaluator {
    input: Vec<char>,
    cursor: usize,
}

impl Evaluator {
    pub fn new(text: &str) -> Self {
        Self {
            input: text.chars().filter(|ch| *ch != ' ').collect(),
            cursor: 0,
        }
    }

    /// The input as the grammar sees it, with spaces removed.
    pub fn input(&self) -> String {
        self.input.iter().collect()
    }

    pub fn run(mut self) -> Result<f64, EvalError> {
        trace!(input = %self.input(), "evaluating expression");
        let outcome = self.parse_expression().and_then(|value| {
            if self.cursor == self.input.len() {
                Ok(value)
            } else {
                Err(EvalError::UnexpectedChar { pos: self.cursor })
            }
        });
        debug!(?outcome, cursor = self.cursor, "evaluation finished");
        outcome
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.cursor).copied()
    }

    fn advance(&mut self) {
        if self.cursor < self.input.len() {
            self.cursor += 1;
        }
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn parse_expression(&mut self) -> Result<f64, EvalError> {
        let mut value = self.parse_term()?;
        loop {
            if self.matches('+') {
                value += self.parse_term()?;
            } else if self.matches('-') {
                value -= self.parse_term()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn parse_term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.parse_factor()?;
        loop {
            if self.matches('*') {
                value *= self.parse_factor()?;
            } else if self.matches('/') {
                let divisor = self.parse_factor()?;
                if divisor == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                value /= divisor;
            } else {
                return Ok(value);
            }
        }
    }

    fn parse_factor(&mut self) -> Result<f64, EvalError> {
        if self.matches('(') {
            let value =
                stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || self.parse_expression())?;
            if !self.matches(')') {
                return Err(EvalError::MissingClosingParen);
            }
            return Ok(value);
        }
        self.parse_number()
    }

    fn parse_number(&mut self) -> Result<f64, EvalError> {
        let start = self.cursor;
        let mut seen_dot = false;
        while let Some(ch) = self.peek() {
            match ch {
                '0'..='9' => self.advance(),
                '.' => {
                    if seen_dot {
                        return Err(EvalError::InvalidNumberFormat);
                    }
                    seen_dot = true;
                    self.advance();
                }
                _ => break,
            }
        }
        if start == self.cursor {
            return Err(EvalError::ExpectedNumber { pos: self.cursor });
        }

        let literal: String = self.input[start..self.cursor].iter().collect();
        let value = literal
            .parse::<f64>()
            .map_err(|source| EvalError::InvalidLiteral {
                literal: literal.clone(),
                source,
            })?;
        // A digit run too long for f64 saturates to infinity instead of failing.
        if value.is_infinite() {
            return Err(EvalError::OutOfRange { literal });
        }
        Ok(value)
    }
}
