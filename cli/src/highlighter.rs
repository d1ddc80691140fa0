use logos::Logos;
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

use crate::lexer::Token;

const DEFAULT_FG: Color = Color::White;

fn color_for(token: Token) -> Color {
    match token {
        Token::Command => Color::Magenta,
        Token::Keyword => Color::Blue,
        Token::ShapeType => Color::Yellow,
        Token::Operator => Color::White,
        Token::Number => Color::Cyan,
        Token::Name => Color::Red,
    }
}

/// Colors command lines as they are typed.
pub struct CommandHighlighter;

impl reedline::Highlighter for CommandHighlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut last_end = 0;

        for (result, span) in Token::lexer(line).spanned() {
            // The lexer skips whitespace; carry it over unstyled.
            if span.start > last_end {
                output.push((Style::new(), line[last_end..span.start].to_string()));
            }

            let fg = match result {
                Ok(token) => color_for(token),
                Err(_) => DEFAULT_FG,
            };
            output.push((Style::new().fg(fg), line[span.clone()].to_string()));
            last_end = span.end;
        }

        if last_end < line.len() {
            output.push((Style::new(), line[last_end..].to_string()));
        }

        output
    }
}
