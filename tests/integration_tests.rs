//! Integration tests for the public lexer API.
//!
//! These tests drive the crate the way a caller would: build a lexer over a
//! source, pull tokens until end of input, and render diagnostics for the
//! strict path.

use pretty_assertions::assert_eq;
use toy_lexer::{format_error, tokenize, tokenize_spanned, tokenize_strict, Lexer, Token};

const PROGRAM: &str = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;
";

#[test]
fn test_lex_program_via_iterator() {
    let tokens: Vec<Token> = Lexer::new(PROGRAM).collect();

    assert_eq!(tokens.first(), Some(&Token::Let));
    assert_eq!(tokens.last(), Some(&Token::Eof));
    assert_eq!(tokens.len(), 49);
    assert!(!tokens.contains(&Token::Illegal));
}

#[test]
fn test_iterator_and_tokenize_agree() {
    let mut lexer = Lexer::new(PROGRAM);
    let mut pulled = vec![];

    loop {
        let token = lexer.next_token();
        let done = token == Token::Eof;
        pulled.push(token);

        if done {
            break;
        }
    }

    assert_eq!(pulled, tokenize(PROGRAM));
}

#[test]
fn test_operator_line() {
    let tokens = tokenize("!-/*5;\n5 < 10 > 5;");

    assert_eq!(
        tokens,
        vec![
            Token::Bang,
            Token::Dash,
            Token::Slash,
            Token::Asterisk,
            Token::Int("5".to_string()),
            Token::Semicolon,
            Token::Int("5".to_string()),
            Token::LessThan,
            Token::Int("10".to_string()),
            Token::GreaterThan,
            Token::Int("5".to_string()),
            Token::Semicolon,
            Token::Eof,
        ]
    );
}

#[test]
fn test_several_lexers_share_one_source() {
    let source = String::from("let x = 1;");

    let first = Lexer::new(&source);
    let second = Lexer::new(&source);

    assert_eq!(first.collect::<Vec<_>>(), second.collect::<Vec<_>>());
}

#[test]
fn test_spanned_stream_matches_plain_stream() {
    let spanned: Vec<Token> = tokenize_spanned(PROGRAM, Some("program.monkey".to_string()))
        .into_iter()
        .map(|spanned| spanned.token)
        .collect();

    assert_eq!(spanned, tokenize(PROGRAM));
}

#[test]
fn test_strict_error_renders_diagnostic() {
    let source = "let a = 1;\nlet b = a @ 2;\n";
    let error = tokenize_strict(source, Some("bad.monkey".to_string())).unwrap_err();

    assert_eq!(
        format_error(&error, source),
        "Error: UnrecognisedToken (Unrecognised character `@`)\n\
         -> bad.monkey\n  |\n2 | let b = a @ 2;\n  | ----------^\n"
    );
}
