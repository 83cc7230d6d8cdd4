use crate::error::Error;
use crate::token::{Op, Token};
use crate::util::{IDENTIFIERS, LONGEST_IDENTIFIER};

/// Split `input` into tokens.
///
/// The whole input must be consumed: any character which does not start a
/// token is reported as an [`Error::LexError`].
///
/// # Examples
///
/// ```
/// # use plotcalc::{tokenize, Token, Op};
/// let tokens = tokenize("2 * x").unwrap();
/// assert_eq!(tokens, vec![Token::Number(2.0), Token::Op(Op::Mul), Token::Variable]);
///
/// assert!(tokenize("2 + a").is_err());
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(input).tokenize()
}

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for `input`
    pub fn new(input: &'a str) -> Lexer<'a> {
        Lexer { input, position: 0 }
    }

    /// Lex the whole remaining input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, Error> {
        let mut output = Vec::new();
        while let Some(token) = self.next_token()? {
            output.push(token);
        }
        Ok(output)
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        self.skip_whitespace();
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(None),
        };

        if c.is_ascii_digit() || (c == '.' && self.peek_nth(1).map_or(false, |c| c.is_ascii_digit())) {
            return self.number().map(Some);
        }

        if let Some(token) = self.identifier() {
            return Ok(Some(token));
        }

        let token = match c {
            '+' => Token::Op(Op::Plus),
            '-' => Token::Op(Op::Minus),
            '*' => Token::Op(Op::Mul),
            '/' => Token::Op(Op::Div),
            '^' => Token::Op(Op::Exp),
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => {
                return Err(Error::LexError {
                    character: other,
                    position: self.position,
                });
            }
        };
        self.position += c.len_utf8();
        Ok(Some(token))
    }

    /// Lex a number with an optional fractional part. A `.` is only part of
    /// the number if a digit follows it.
    fn number(&mut self) -> Result<Token, Error> {
        let start = self.position;
        self.skip_digits();
        if self.peek() == Some('.') && self.peek_nth(1).map_or(false, |c| c.is_ascii_digit()) {
            self.position += 1;
            self.skip_digits();
        }

        let literal = &self.input[start..self.position];
        literal.parse().map(Token::Number).map_err(|_| Error::LexError {
            character: literal.chars().next().unwrap_or('.'),
            position: start,
        })
    }

    /// Longest identifier starting at the current position, if any
    fn identifier(&mut self) -> Option<Token> {
        let rest = &self.input[self.position..];
        for len in (1..=*LONGEST_IDENTIFIER).rev() {
            if let Some(&token) = rest.get(..len).and_then(|name| IDENTIFIERS.get(name)) {
                self.position += len;
                return Some(token);
            }
        }
        return None;
    }

    fn skip_digits(&mut self) {
        while self.peek().map_or(false, |c| c.is_ascii_digit()) {
            self.position += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.position += c.len_utf8();
        }
    }

    fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.input[self.position..].chars().nth(n)
    }
}
