use crate::error::Error;
use crate::lexer::tokenize;
use crate::rpn::{render, to_rpn};
use crate::token::{Op, Token};
use std::fmt::{self, Display, Formatter};

/// Binding of the free variable `x` for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scope {
    /// Value of `x`
    pub x: f64,
}

impl Scope {
    /// Bind `x` to the given value
    pub fn new(x: f64) -> Self {
        Self { x }
    }
}

impl From<f64> for Scope {
    fn from(x: f64) -> Self {
        Self::new(x)
    }
}

/// Evaluate a single expression from `input`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// lexing, converting or evaluating the expression failed. Numeric
/// anomalies are not errors: division by zero and an unbound `x` give `NaN`.
///
/// # Example
///
/// ```
/// # use plotcalc::{eval, Scope};
/// assert_eq!(eval("45 - 2^3", None), Ok(37.0));
/// assert_eq!(eval("3 * x", Some(Scope::new(-5.0))), Ok(-15.0));
/// assert!(eval("x", None).unwrap().is_nan());
/// ```
pub fn eval(input: &str, scope: Option<Scope>) -> Result<f64, Error> {
    let rpn = to_rpn(&tokenize(input)?)?;
    evaluate(&rpn, scope)
}

/// Evaluate a postfix token sequence with an optional binding for `x`.
///
/// # Example
///
/// ```
/// # use plotcalc::{evaluate, Scope, Token, Op};
/// let rpn = [Token::Variable, Token::Number(2.0), Token::Op(Op::Exp)];
/// assert_eq!(evaluate(&rpn, Some(Scope::new(3.0))), Ok(9.0));
/// ```
pub fn evaluate(rpn: &[Token], scope: Option<Scope>) -> Result<f64, Error> {
    let mut stack: Vec<f64> = Vec::with_capacity(rpn.len());

    for &token in rpn {
        match token {
            Token::Number(value) => stack.push(value),
            Token::Constant(constant) => stack.push(constant.value()),
            Token::Variable => stack.push(scope.map_or(f64::NAN, |scope| scope.x)),
            Token::Op(Op::Neg) => {
                let a = stack.pop().ok_or_else(Error::stack_underflow)?;
                stack.push(-a);
            }
            Token::Op(op) => {
                let b = stack.pop().ok_or_else(Error::stack_underflow)?;
                let a = stack.pop().ok_or_else(Error::stack_underflow)?;
                stack.push(apply(op, a, b));
            }
            Token::LParen | Token::RParen => {
                tracing::trace!(%token, "parenthesis in postfix sequence");
                return Err(Error::EvalError("unknown token".into()));
            }
        }
    }

    match stack.as_slice() {
        &[value] => Ok(value),
        _ => {
            tracing::trace!(depth = stack.len(), "postfix sequence did not reduce to one value");
            Err(Error::EvalError("malformed expression".into()))
        }
    }
}

/// Apply a binary operator
fn apply(op: Op, a: f64, b: f64) -> f64 {
    match op {
        Op::Plus => a + b,
        Op::Minus => a - b,
        Op::Mul => a * b,
        // division by zero is "no value", not an infinity
        Op::Div if b == 0.0 => f64::NAN,
        Op::Div => a / b,
        Op::Exp => libm::pow(a, b),
        Op::Neg => panic!("Internal bug: unary {} applied to two operands", op),
    }
}

/// A parsed mathematical expression, in postfix form.
///
/// Parsing once and evaluating many times avoids lexing the input again for
/// every value of `x`.
///
/// # Examples
/// ```
/// # use plotcalc::{Expr, Scope};
/// let expr = Expr::parse("3 + 5 * 2").unwrap();
/// assert_eq!(expr.eval(None), Ok(13.0));
///
/// let expr = Expr::parse("-2 * x").unwrap();
/// assert_eq!(expr.eval(Some(Scope::new(42.0))), Ok(-84.0));
/// assert_eq!(expr.eval(Some(Scope::new(1.0))), Ok(-2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    rpn: Vec<Token>,
}

impl Expr {
    /// Parse the given mathematical `expression` into an `Expr`.
    ///
    /// The postfix sequence is checked to reduce to exactly one value, so
    /// that an incomplete expression such as `2 +` is rejected here rather
    /// than at evaluation time.
    ///
    /// # Examples
    /// ```
    /// # use plotcalc::Expr;
    /// // A valid expression
    /// assert!(Expr::parse("3 + 5 * 2").is_ok());
    /// // invalid expressions
    /// assert!(Expr::parse("3eff + 5 * 2").is_err());
    /// assert!(Expr::parse("(3 + 5").is_err());
    /// assert!(Expr::parse("3 +").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        let tokens = tokenize(expression)?;
        if tokens.is_empty() {
            return Err(Error::SyntaxError("empty expression".into()));
        }
        let rpn = to_rpn(&tokens)?;
        // The stack shape does not depend on the values, so any binding works
        evaluate(&rpn, None)?;
        Ok(Self { rpn })
    }

    /// Evaluate the expression with an optional binding for `x`.
    pub fn eval(&self, scope: Option<Scope>) -> Result<f64, Error> {
        evaluate(&self.rpn, scope)
    }

    /// Evaluate the expression at `x`.
    pub fn eval_at(&self, x: f64) -> Result<f64, Error> {
        self.eval(Some(Scope::new(x)))
    }

    /// Check if the expression references the variable `x`.
    ///
    /// ```
    /// # use plotcalc::Expr;
    /// assert!(Expr::parse("2 * x + 1").unwrap().uses_variable());
    /// assert!(!Expr::parse("2 * pi").unwrap().uses_variable());
    /// ```
    pub fn uses_variable(&self) -> bool {
        self.rpn.contains(&Token::Variable)
    }

    /// The postfix token sequence
    pub fn rpn(&self) -> &[Token] {
        &self.rpn
    }
}

impl Display for Expr {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(&render(&self.rpn))
    }
}
