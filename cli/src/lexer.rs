//! Lexer over the command language, used for syntax highlighting and
//! completion in the line editor.
//!
//! This is editor support only: the evaluator does its own whitespace
//! tokenization and is the authority on what a line means.

use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\n\f]+")]
pub enum Token {
    #[token("create")]
    #[token("list")]
    #[token("exit")]
    Command,

    #[token("length")]
    #[token("perimeter")]
    #[token("area")]
    #[token("circumference")]
    #[token("distance")]
    Keyword,

    #[token("point")]
    #[token("circle")]
    #[token("line")]
    #[token("rectangle")]
    #[token("points")]
    #[token("circles")]
    #[token("lines")]
    #[token("rectangles")]
    ShapeType,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    Operator,

    #[regex(r"-?\d*\.?\d+", priority = 3)]
    Number,

    #[regex(r"[A-Za-z0-9_]+")]
    Name,
}

/// Every word the completer should offer.
pub const VOCABULARY: &[&str] = &[
    "create",
    "list",
    "exit",
    "length",
    "perimeter",
    "area",
    "circumference",
    "distance",
    "point",
    "circle",
    "line",
    "rectangle",
    "points",
    "circles",
    "lines",
    "rectangles",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token> {
        Token::lexer(input).map(|t| t.unwrap()).collect()
    }

    #[test]
    fn test_command_line() {
        assert_eq!(
            lex("create circle c1"),
            vec![Token::Command, Token::ShapeType, Token::Name]
        );
    }

    #[test]
    fn test_expression_line() {
        assert_eq!(
            lex("area r1 + distance p1 p2"),
            vec![
                Token::Keyword,
                Token::Name,
                Token::Operator,
                Token::Keyword,
                Token::Name,
                Token::Name,
            ]
        );
    }

    #[test]
    fn test_numbers_beat_names() {
        assert_eq!(lex("3 4"), vec![Token::Number, Token::Number]);
        assert_eq!(lex("-2.5"), vec![Token::Number]);
        assert_eq!(lex(".5"), vec![Token::Number]);
    }

    #[test]
    fn test_lone_minus_is_an_operator() {
        assert_eq!(lex("-"), vec![Token::Operator]);
    }

    #[test]
    fn test_unknown_character_errors() {
        assert!(Token::lexer("(").any(|t| t.is_err()));
    }
}
