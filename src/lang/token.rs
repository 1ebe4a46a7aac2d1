/// ## Lexical units of one assembly line

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// Text the lexer could not close, such as a string missing its final quote.
    Unknown(String),
    /// Label declaration, `name:`. The colon is not kept.
    Label(String),
    /// Bare word: a mnemonic, a label reference, `nil`, or a number.
    Word(String),
    /// Double-quoted text. The quotes are not kept.
    String(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Label(s) => write!(f, "{}:", s),
            Word(s) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Identifiers are ASCII letters, digits and underscores,
/// not starting with a digit.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
