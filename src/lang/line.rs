use super::lex::*;
use super::token::*;
use super::{Column, LineNumber};

/// One tokenized line of assembly source.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: usize,
    tokens: Vec<(Column, Token)>,
}

impl Line {
    pub fn new(number: usize, s: &str) -> Line {
        Line {
            number,
            tokens: lex(s),
        }
    }

    pub fn number(&self) -> LineNumber {
        Some(self.number)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[(Column, Token)] {
        &self.tokens
    }

    /// Lines of a whole source text, numbered from one.
    pub fn split(source: &str) -> impl Iterator<Item = Line> + '_ {
        source
            .lines()
            .enumerate()
            .map(|(index, s)| Line::new(index + 1, s))
            .filter(|line| !line.is_empty())
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self.tokens.iter().map(|(_, t)| t.to_string()).collect();
        write!(f, "{}", s.join(" "))
    }
}

#[cfg(test)]
#[path = "tests/line_test.rs"]
mod tests;
