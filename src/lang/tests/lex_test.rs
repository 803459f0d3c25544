use super::super::lex;
use super::super::token::*;

fn number(s: &str) -> Token {
    Token::Number(s.to_string())
}

#[test]
fn test_simple_expression() {
    let v = lex("12.5+3");
    assert_eq!(
        v,
        vec![number("12.5"), Token::Operator(Operator::Plus), number("3")]
    );
}

#[test]
fn test_glyphs() {
    let v = lex("2×3÷4");
    assert_eq!(v[1], Token::Operator(Operator::Multiply));
    assert_eq!(v[3], Token::Operator(Operator::Divide));
}

#[test]
fn test_whitespace_collapses() {
    let v = lex("1 \t 2");
    assert_eq!(v, vec![number("1"), Token::Whitespace(3), number("2")]);
}

#[test]
fn test_second_decimal_starts_new_number() {
    let v = lex("1.2.3");
    assert_eq!(v, vec![number("1.2"), number(".3")]);
}

#[test]
fn test_exponent() {
    assert_eq!(lex("1.5e3"), vec![number("1.5E3")]);
    assert_eq!(lex("1.23456789e+11"), vec![number("1.23456789E+11")]);
    assert_eq!(lex("2E-7"), vec![number("2E-7")]);
    assert_eq!(
        lex("2E3E4"),
        vec![number("2E3"), Token::Unknown("E".to_string()), number("4")]
    );
}

#[test]
fn test_dangling_exponent_marker() {
    assert_eq!(lex("1.5E"), vec![number("1.5E")]);
    assert_eq!(
        lex("1.5E+)"),
        vec![number("1.5E+"), Token::RParen]
    );
}

#[test]
fn test_implicit_multiply() {
    let mul = Token::Operator(Operator::Multiply);
    assert_eq!(
        lex("2(3)"),
        vec![number("2"), mul.clone(), Token::LParen, number("3"), Token::RParen]
    );
    assert_eq!(
        lex("(2)3"),
        vec![Token::LParen, number("2"), Token::RParen, mul.clone(), number("3")]
    );
    assert_eq!(
        lex("(2)(3)"),
        vec![
            Token::LParen,
            number("2"),
            Token::RParen,
            mul,
            Token::LParen,
            number("3"),
            Token::RParen
        ]
    );
}

#[test]
fn test_implicit_multiply_needs_adjacency() {
    assert_eq!(
        lex("2 (3)"),
        vec![
            number("2"),
            Token::Whitespace(1),
            Token::LParen,
            number("3"),
            Token::RParen
        ]
    );
}

#[test]
fn test_unknown() {
    assert_eq!(
        lex("Math Error"),
        vec![
            Token::Unknown("Math".to_string()),
            Token::Whitespace(1),
            Token::Unknown("Error".to_string()),
        ]
    );
    assert_eq!(
        lex("2%3"),
        vec![number("2"), Token::Unknown("%".to_string()), number("3")]
    );
}
