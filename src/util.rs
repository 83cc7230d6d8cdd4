use crate::token::{Constant, Token};
use hashbrown::HashMap;

lazy_static! {
    /// Identifiers recognized by the lexer, and the token each one produces
    pub static ref IDENTIFIERS: HashMap<&'static str, Token> = {
        let mut map = HashMap::<&'static str, Token>::new();
        map.insert("pi", Token::Constant(Constant::Pi));
        map.insert("e", Token::Constant(Constant::E));
        map.insert("x", Token::Variable);
        map.shrink_to_fit();
        map
    };

    /// Length in bytes of the longest identifier
    pub static ref LONGEST_IDENTIFIER: usize =
        IDENTIFIERS.keys().map(|name| name.len()).max().unwrap_or(0);
}
