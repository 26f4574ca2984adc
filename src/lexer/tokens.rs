use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref KEYWORDS: HashMap<&'static str, Token> = {
        let mut map = HashMap::new();
        map.insert("fn", Token::Function);
        map.insert("let", Token::Let);
        map.insert("if", Token::If);
        map.insert("else", Token::Else);
        map.insert("return", Token::Return);
        map.insert("true", Token::True);
        map.insert("false", Token::False);
        map
    };
}

/// Resolves an identifier run to its keyword token, or to `Ident` when the
/// text is not reserved. The match is case-sensitive.
pub fn lookup_ident(text: &str) -> Token {
    match KEYWORDS.get(text) {
        Some(keyword) => keyword.clone(),
        None => Token::Ident(String::from(text)),
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Token {
    Ident(String),
    Int(String),

    Illegal,
    Eof,

    LSquirly,
    RSquirly,
    Lparen,
    Rparen,

    Comma,
    Semicolon,

    Assign,   // =
    Equal,    // ==
    Bang,     // !
    NotEqual, // !=

    Plus,
    Dash,
    Asterisk,
    Slash,
    LessThan,
    GreaterThan,

    // Reserved
    Function,
    Let,
    If,
    Else,
    Return,
    True,
    False,
}

impl Token {
    /// Name of the variant, without payload.
    pub fn name(&self) -> &'static str {
        match self {
            Token::Ident(_) => "Ident",
            Token::Int(_) => "Int",
            Token::Illegal => "Illegal",
            Token::Eof => "Eof",
            Token::LSquirly => "LSquirly",
            Token::RSquirly => "RSquirly",
            Token::Lparen => "Lparen",
            Token::Rparen => "Rparen",
            Token::Comma => "Comma",
            Token::Semicolon => "Semicolon",
            Token::Assign => "Assign",
            Token::Equal => "Equal",
            Token::Bang => "Bang",
            Token::NotEqual => "NotEqual",
            Token::Plus => "Plus",
            Token::Dash => "Dash",
            Token::Asterisk => "Asterisk",
            Token::Slash => "Slash",
            Token::LessThan => "LessThan",
            Token::GreaterThan => "GreaterThan",
            Token::Function => "Function",
            Token::Let => "Let",
            Token::If => "If",
            Token::Else => "Else",
            Token::Return => "Return",
            Token::True => "True",
            Token::False => "False",
        }
    }

    /// Source text the token stands for. `Illegal` has no fixed spelling and
    /// `Eof` has none at all; both return an empty string.
    pub fn literal(&self) -> &str {
        match self {
            Token::Ident(text) | Token::Int(text) => text.as_str(),
            Token::Illegal | Token::Eof => "",
            Token::LSquirly => "{",
            Token::RSquirly => "}",
            Token::Lparen => "(",
            Token::Rparen => ")",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::Assign => "=",
            Token::Equal => "==",
            Token::Bang => "!",
            Token::NotEqual => "!=",
            Token::Plus => "+",
            Token::Dash => "-",
            Token::Asterisk => "*",
            Token::Slash => "/",
            Token::LessThan => "<",
            Token::GreaterThan => ">",
            Token::Function => "fn",
            Token::Let => "let",
            Token::If => "if",
            Token::Else => "else",
            Token::Return => "return",
            Token::True => "true",
            Token::False => "false",
        }
    }

    pub fn is_keyword(&self) -> bool {
        KEYWORDS.values().any(|keyword| keyword == self)
    }

    pub fn is_one_of_many(&self, tokens: &[Token]) -> bool {
        tokens.iter().any(|token| token == self)
    }

    pub fn debug(&self) -> String {
        match self {
            Token::Ident(text) | Token::Int(text) => format!("{} ({})", self.name(), text),
            _ => format!("{} ()", self.name()),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.literal())
    }
}

/// A token together with the byte range it was read from.
#[derive(Debug, Clone)]
pub struct Spanned {
    pub token: Token,
    pub span: Span,
}

impl Spanned {
    pub fn len(&self) -> u32 {
        self.span.end.0.saturating_sub(self.span.start.0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Display for Spanned {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<24} {}..{}",
            self.token.debug(),
            self.span.start.0,
            self.span.end.0
        )
    }
}
