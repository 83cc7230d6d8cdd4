use thiserror::Error;

/// Error type for the plotcalc crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A character of the input does not start any token
    #[error("LexError: unexpected character '{character}' at position {position}")]
    LexError {
        /// The offending character
        character: char,
        /// Byte offset of the character in the input
        position: usize,
    },
    /// Structurally invalid token sequence, e.g. unbalanced parentheses
    #[error("SyntaxError: {0}")]
    SyntaxError(String),
    /// The postfix sequence could not be reduced to a single value
    #[error("EvalError: {0}")]
    EvalError(String),
    /// Invalid sampling configuration
    #[error("PlotError: {0}")]
    PlotError(String),
}

impl Error {
    pub(crate) fn mismatched_parentheses() -> Self {
        Self::SyntaxError("mismatched parentheses".into())
    }

    pub(crate) fn stack_underflow() -> Self {
        Self::EvalError("stack underflow".into())
    }

    /// Is this a failure of the expression itself, as opposed to the plot
    /// configuration?
    pub fn is_expression_error(&self) -> bool {
        !matches!(self, Self::PlotError(_))
    }
}
