use super::{token::*, Column};

/// Split one source line into tokens paired with their columns.
/// Comment lines produce no tokens.
pub fn lex(s: &str) -> Vec<(Column, Token)> {
    AsmLexer::lex(s)
}

fn is_asm_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n' || c == ','
}

fn is_comment(s: &str) -> bool {
    s.trim_start().starts_with('#')
}

struct AsmLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    col: usize,
}

impl<'a> AsmLexer<'a> {
    fn lex(s: &str) -> Vec<(Column, Token)> {
        let mut tokens: Vec<(Column, Token)> = vec![];
        if is_comment(s) {
            return tokens;
        }
        let mut lexer = AsmLexer {
            chars: s.chars().peekable(),
            col: 0,
        };
        while let Some(&pk) = lexer.chars.peek() {
            if is_asm_whitespace(pk) {
                lexer.next();
                continue;
            }
            let start = lexer.col;
            let token = if pk == '"' {
                lexer.string()
            } else {
                lexer.word()
            };
            tokens.push((start..lexer.col, token));
        }
        tokens
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.chars.next();
        if ch.is_some() {
            self.col += 1;
        }
        ch
    }

    fn string(&mut self) -> Token {
        let mut s = String::new();
        self.next();
        loop {
            match self.next() {
                Some('"') => return Token::String(s),
                Some(ch) => s.push(ch),
                None => return Token::Unknown(format!("\"{}", s)),
            }
        }
    }

    fn word(&mut self) -> Token {
        let mut s = String::new();
        while let Some(&pk) = self.chars.peek() {
            if is_asm_whitespace(pk) || pk == '"' {
                break;
            }
            s.push(pk);
            self.next();
        }
        if s.len() > 1 && s.ends_with(':') {
            s.pop();
            Token::Label(s)
        } else {
            Token::Word(s)
        }
    }
}

#[cfg(test)]
#[path = "tests/lex_test.rs"]
mod tests;
