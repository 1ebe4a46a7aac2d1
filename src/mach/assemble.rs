use super::{Link, Opcode, Program};
use crate::error;
use crate::lang::token::Token;
use crate::lang::{Column, Error, Line, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// Assemble source text into a linked program.
///
/// The first pass records every label at the address of the next
/// instruction and keeps operand tokens unlinked. The second pass
/// resolves each operand to a label address or a literal.
pub fn assemble(source: &str) -> Result<Program> {
    let mut link = Link::new();
    for line in Line::split(source) {
        scan(&mut link, &line)?;
    }
    let (instructions, symbols) = link.link()?;
    Ok(Program::with_symbols(instructions, symbols))
}

fn unterminated(line_number: LineNumber, col: &Column) -> Error {
    error!(CodeError, line_number, ..col; "unterminated string")
}

fn scan(link: &mut Link, line: &Line) -> Result<()> {
    let line_number = line.number();
    let mut tokens = line.tokens().iter().peekable();
    while let Some((col, Token::Label(label))) = tokens.peek() {
        link.insert(label, line_number, col)?;
        tokens.next();
    }
    let (col, token) = match tokens.next() {
        Some(t) => t,
        None => return Ok(()),
    };
    let opcode = match token {
        Token::Word(word) => match Opcode::from_mnemonic(word) {
            Some(opcode) => opcode,
            None => {
                return Err(error!(CodeError, line_number, ..col;
                    format!("unknown instruction '{}'", word)))
            }
        },
        Token::Unknown(_) => return Err(unterminated(line_number, col)),
        Token::Label(_) | Token::String(_) => {
            return Err(error!(CodeError, line_number, ..col;
                format!("expected instruction, found '{}'", token)))
        }
    };
    let operands: Vec<(Column, Token)> = tokens.cloned().collect();
    for (col, token) in &operands {
        match token {
            Token::Label(label) => {
                return Err(error!(CodeError, line_number, ..col;
                    format!("unexpected label declaration '{}:'", label)))
            }
            Token::Unknown(_) => return Err(unterminated(line_number, col)),
            Token::Word(_) | Token::String(_) => {}
        }
    }
    if operands.len() != opcode.arity() {
        return Err(error!(CodeError, line_number, ..col; format!(
            "wrong operand count; {} expects {}, found {}",
            opcode,
            opcode.arity(),
            operands.len()
        )));
    }
    link.push(line_number, opcode, operands);
    Ok(())
}
