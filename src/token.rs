use std::f64::consts;
use std::fmt::{self, Display, Formatter};

/// Possible tokens to find in the input string, or in a postfix sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// A named constant: `pi` or `e`
    Constant(Constant),
    /// The free variable `x`
    Variable,
    /// An operator
    Op(Op),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

impl Token {
    /// Check if the token is an operand, i.e. pushes a value on the
    /// evaluation stack
    pub fn is_operand(self) -> bool {
        matches!(self, Self::Number(_) | Self::Constant(_) | Self::Variable)
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Number(value) => write!(fmt, "{}", value),
            Self::Constant(constant) => write!(fmt, "{}", constant),
            Self::Variable => write!(fmt, "x"),
            Self::Op(op) => write!(fmt, "{}", op),
            Self::LParen => write!(fmt, "("),
            Self::RParen => write!(fmt, ")"),
        }
    }
}

/// Named constants of the language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// π
    Pi,
    /// Euler's number
    E,
}

impl Constant {
    /// Get the numeric value of the constant
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => consts::PI,
            Self::E => consts::E,
        }
    }
}

impl Display for Constant {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Pi => write!(fmt, "pi"),
            Self::E => write!(fmt, "e"),
        }
    }
}

/// Allowed operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+`
    Plus,
    /// Binary `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Exp,
    /// Unary minus. Never produced by the lexer, only by the shunting-yard
    /// conversion.
    Neg,
}

impl Op {
    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
            Self::Exp => 3,
            Self::Neg => 4,
        }
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(self) -> bool {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div => true,
            Self::Exp | Self::Neg => false,
        }
    }

    /// Check if the operator is right associative
    pub fn is_right_associative(self) -> bool {
        !self.is_left_associative()
    }
}

impl Display for Op {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let symbol = match *self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "^",
            Self::Neg => "neg",
        };
        fmt.write_str(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::{Constant, Op, Token};
    use test_case::test_case;

    #[test]
    fn precedence_ordering() {
        assert!(Op::Neg.precedence() > Op::Exp.precedence());
        assert!(Op::Exp.precedence() > Op::Mul.precedence());
        assert_eq!(Op::Mul.precedence(), Op::Div.precedence());
        assert!(Op::Div.precedence() > Op::Plus.precedence());
        assert_eq!(Op::Plus.precedence(), Op::Minus.precedence());
    }

    #[test_case(Op::Plus => true)]
    #[test_case(Op::Minus => true)]
    #[test_case(Op::Mul => true)]
    #[test_case(Op::Div => true)]
    #[test_case(Op::Exp => false)]
    #[test_case(Op::Neg => false)]
    fn left_associative(op: Op) -> bool {
        assert_eq!(op.is_left_associative(), !op.is_right_associative());
        op.is_left_associative()
    }

    #[test]
    fn display() {
        let tokens = [
            Token::Number(2.5),
            Token::Constant(Constant::Pi),
            Token::Variable,
            Token::Op(Op::Neg),
            Token::Op(Op::Exp),
            Token::LParen,
        ];
        let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["2.5", "pi", "x", "neg", "^", "("]);
    }

    #[test]
    fn operands() {
        assert!(Token::Number(1.0).is_operand());
        assert!(Token::Constant(Constant::E).is_operand());
        assert!(Token::Variable.is_operand());
        assert!(!Token::Op(Op::Plus).is_operand());
        assert!(!Token::RParen.is_operand());
    }
}
