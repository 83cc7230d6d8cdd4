use crate::error::Error;
use crate::token::{Op, Token};

/// Convert a sequence of infix `tokens` to reverse polish notation, using the
/// shunting-yard algorithm.
///
/// A `-` is a unary minus when it is the first token, or when the token
/// before it in the input is `(` or another operator. Parentheses are
/// removed from the output.
///
/// # Examples
///
/// ```
/// # use plotcalc::{to_rpn, tokenize, Token, Op};
/// let rpn = to_rpn(&tokenize("1 - -2").unwrap()).unwrap();
/// assert_eq!(rpn, vec![
///     Token::Number(1.0),
///     Token::Number(2.0),
///     Token::Op(Op::Neg),
///     Token::Op(Op::Minus),
/// ]);
/// ```
pub fn to_rpn(tokens: &[Token]) -> Result<Vec<Token>, Error> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators = Vec::new();
    let mut previous: Option<Token> = None;

    'tokens: for &token in tokens {
        match token {
            Token::Number(_) | Token::Constant(_) | Token::Variable => output.push(token),
            Token::Op(op) => {
                let o1 = if op == Op::Minus && is_unary_position(previous) {
                    Op::Neg
                } else {
                    op
                };
                'operators: while let Some(&top) = operators.last() {
                    match top {
                        Token::Op(o2) => {
                            let pop_me =
                                o1.is_left_associative() && o1.precedence() <= o2.precedence();
                            let pop_me = pop_me
                                || o1.is_right_associative() && o1.precedence() < o2.precedence();
                            if pop_me {
                                operators.pop();
                                output.push(top);
                            } else {
                                break 'operators;
                            }
                        }
                        _ => break 'operators,
                    }
                }
                operators.push(Token::Op(o1));
            }
            Token::LParen => operators.push(token),
            Token::RParen => {
                while let Some(top) = operators.pop() {
                    match top {
                        Token::LParen => {
                            previous = Some(token);
                            continue 'tokens;
                        }
                        _ => output.push(top),
                    }
                }
                return Err(Error::mismatched_parentheses());
            }
        }
        previous = Some(token);
    }

    while let Some(top) = operators.pop() {
        match top {
            Token::LParen | Token::RParen => return Err(Error::mismatched_parentheses()),
            _ => output.push(top),
        }
    }

    tracing::debug!(
        tokens = tokens.len(),
        rpn = %render(&output),
        "converted expression to postfix"
    );
    Ok(output)
}

/// Would a `-` following `previous` be a negation?
fn is_unary_position(previous: Option<Token>) -> bool {
    match previous {
        None => true,
        Some(token) => !(token.is_operand() || token == Token::RParen),
    }
}

/// Render a token sequence as space separated text
pub(crate) fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
