//! Tokens of the expression language.
//!
//! An expression is split on whitespace, nothing more: there is no quoting
//! and no escaping. Keyword and operator tokens are classified once into
//! closed enums so the evaluator can match on them exhaustively; everything
//! else is a `Word` (a shape name, or garbage the evaluator will reject).

use core::fmt;
use std::ops::Range;

/// Byte range of a token within the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

/// A derived-quantity keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Length,
    Perimeter,
    Area,
    Circumference,
    Distance,
}

impl Keyword {
    fn parse(text: &str) -> Option<Self> {
        match text {
            "length" => Some(Keyword::Length),
            "perimeter" => Some(Keyword::Perimeter),
            "area" => Some(Keyword::Area),
            "circumference" => Some(Keyword::Circumference),
            "distance" => Some(Keyword::Distance),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Length => "length",
            Keyword::Perimeter => "perimeter",
            Keyword::Area => "area",
            Keyword::Circumference => "circumference",
            Keyword::Distance => "distance",
        }
    }

    /// How many shape-name operands the keyword consumes.
    pub fn operand_count(&self) -> usize {
        match self {
            Keyword::Distance => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An arithmetic operator folding a term into the running result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    fn parse(text: &str) -> Option<Self> {
        match text {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        })
    }
}

/// Classification of a single whitespace-delimited token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword(Keyword),
    Op(BinaryOp),
    Word,
}

impl TokenKind {
    fn classify(text: &str) -> Self {
        if let Some(keyword) = Keyword::parse(text) {
            TokenKind::Keyword(keyword)
        } else if let Some(op) = BinaryOp::parse(text) {
            TokenKind::Op(op)
        } else {
            TokenKind::Word
        }
    }
}

/// A token together with its text and location in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken<'input> {
    pub text: &'input str,
    pub kind: TokenKind,
    pub span: Span,
}

/// Splits `input` on whitespace into classified, spanned tokens.
pub fn tokenize(input: &str) -> impl Iterator<Item = SpannedToken<'_>> {
    input.split_whitespace().map(move |word| {
        // split_whitespace yields subslices of `input`, so the offset is the
        // pointer distance between them.
        let start = word.as_ptr() as usize - input.as_ptr() as usize;
        SpannedToken {
            text: word,
            kind: TokenKind::classify(word),
            span: Span(start..start + word.len()),
        }
    })
}
