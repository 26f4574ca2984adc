use std::{iter::FusedIterator, rc::Rc};

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::tokens::{lookup_ident, Spanned, Token};

/// Single-pass scanner over borrowed source text.
///
/// `ch` is the character under the cursor and `None` once the input is
/// exhausted. `pos` is its byte offset and `read_pos` the offset of the
/// character after it; both saturate at `source.len()`.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    ch: Option<char>,
    pos: usize,
    read_pos: usize,
    file: Rc<String>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer::with_file(source, None)
    }

    pub fn with_file(source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from("shell")));

        let mut lexer = Lexer {
            source,
            ch: None,
            pos: 0,
            read_pos: 0,
            file: file_name,
            finished: false,
        };
        lexer.advance();

        debug!(file = %lexer.file, bytes = source.len(), "created lexer");
        lexer
    }

    pub fn current(&self) -> Option<char> {
        self.ch
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn at_eof(&self) -> bool {
        self.ch.is_none()
    }

    pub fn peek(&self) -> Option<char> {
        self.source
            .get(self.read_pos..)
            .and_then(|rest| rest.chars().next())
    }

    pub fn advance(&mut self) {
        match self.peek() {
            Some(ch) => {
                self.ch = Some(ch);
                self.pos = self.read_pos;
                self.read_pos += ch.len_utf8();
            }
            None => {
                self.ch = None;
                self.pos = self.source.len();
                self.read_pos = self.source.len();
            }
        }
    }

    /// Moves the cursor onto the character starting at byte `offset`.
    fn seek(&mut self, offset: usize) {
        self.read_pos = offset.min(self.source.len());
        self.advance();
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.advance();
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.next_spanned().token
    }

    pub fn next_spanned(&mut self) -> Spanned {
        self.skip_whitespace();

        let start = self.pos;
        let ch = match self.ch {
            Some(ch) => ch,
            None => return self.emit(Token::Eof, start),
        };

        let token = match ch {
            '{' => Token::LSquirly,
            '}' => Token::RSquirly,
            '(' => Token::Lparen,
            ')' => Token::Rparen,
            ',' => Token::Comma,
            ';' => Token::Semicolon,
            '+' => Token::Plus,
            '*' => Token::Asterisk,
            '-' => Token::Dash,
            '>' => Token::GreaterThan,
            '<' => Token::LessThan,
            '/' => Token::Slash,
            '!' => self.two_char('=', Token::NotEqual, Token::Bang),
            '=' => self.two_char('=', Token::Equal, Token::Assign),
            c if is_ident_char(c) => {
                let (run, end) = take_run(self.source, start, is_ident_char);
                self.seek(end);
                return self.emit(lookup_ident(run), start);
            }
            c if c.is_ascii_digit() => {
                let (run, end) = take_run(self.source, start, |c| c.is_ascii_digit());
                self.seek(end);
                return self.emit(Token::Int(String::from(run)), start);
            }
            _ => Token::Illegal,
        };

        self.advance();
        self.emit(token, start)
    }

    /// Consumes the lookahead character when it is `second`, leaving the
    /// cursor on the last character of the token either way.
    fn two_char(&mut self, second: char, pair: Token, single: Token) -> Token {
        if self.peek() == Some(second) {
            self.advance();
            pair
        } else {
            single
        }
    }

    fn emit(&self, token: Token, start: usize) -> Spanned {
        trace!(token = %token.debug(), start, end = self.pos, "token");
        MK_TOKEN!(token, start, self.pos, self.file)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token == Token::Eof {
            self.finished = true;
        }

        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

pub fn is_ident_char(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Returns the maximal run of characters matching `predicate` starting at
/// byte `start`, and the byte offset just past it.
pub fn take_run(source: &str, start: usize, predicate: impl Fn(char) -> bool) -> (&str, usize) {
    let rest = source.get(start..).unwrap_or("");
    let len = rest
        .char_indices()
        .find(|(_, ch)| !predicate(*ch))
        .map_or(rest.len(), |(index, _)| index);

    (&rest[..len], start + len)
}

#[tracing::instrument(level = "debug", skip_all)]
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(source).collect();
    debug!(count = tokens.len(), "tokenized");
    tokens
}

#[tracing::instrument(level = "debug", skip(source))]
pub fn tokenize_spanned(source: &str, file: Option<String>) -> Vec<Spanned> {
    let mut lexer = Lexer::with_file(source, file);
    let mut tokens = vec![];

    loop {
        let spanned = lexer.next_spanned();
        let done = spanned.token == Token::Eof;
        tokens.push(spanned);

        if done {
            break;
        }
    }

    debug!(count = tokens.len(), "tokenized");
    tokens
}

/// Like [`tokenize_spanned`], but reports the first `Illegal` token as an
/// `UnrecognisedToken` error.
pub fn tokenize_strict(source: &str, file: Option<String>) -> Result<Vec<Spanned>, Error> {
    let tokens = tokenize_spanned(source, file);

    if let Some(illegal) = tokens.iter().find(|spanned| spanned.token == Token::Illegal) {
        // A saturated offset no longer points at the character.
        let token = match illegal.span.end.0 {
            u32::MAX => String::new(),
            end => source
                .get(illegal.span.start.0 as usize..end as usize)
                .unwrap_or("")
                .to_string(),
        };

        return Err(Error::new(
            ErrorImpl::UnrecognisedToken { token },
            illegal.span.start.clone(),
        ));
    }

    Ok(tokens)
}
