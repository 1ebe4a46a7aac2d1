use super::{Address, Instruction, Opcode, Val};
use crate::error;
use crate::lang::token::{is_identifier, Token};
use crate::lang::{Column, Error, LineNumber};
use std::collections::{BTreeMap, HashMap};

type Result<T> = std::result::Result<T, Error>;

/// ## Label table
///
/// Scoped to a single assembly. Instructions are held unlinked until
/// every label is known, then operands are resolved in one pass.

#[derive(Debug, Default)]
pub struct Link {
    symbols: HashMap<String, Address>,
    unlinked: Vec<Unlinked>,
}

#[derive(Debug)]
struct Unlinked {
    line_number: LineNumber,
    opcode: Opcode,
    operands: Vec<(Column, Token)>,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    /// Address the next pushed instruction will receive.
    pub fn next_address(&self) -> Address {
        self.unlinked.len()
    }

    pub fn get(&self, label: &str) -> Option<Address> {
        self.symbols.get(label).copied()
    }

    pub fn insert(&mut self, label: &str, line_number: LineNumber, col: &Column) -> Result<()> {
        if !is_identifier(label) {
            return Err(error!(CodeError, line_number, ..col;
                format!("invalid label '{}'", label)));
        }
        if label == "nil" || Opcode::from_mnemonic(label).is_some() {
            return Err(error!(CodeError, line_number, ..col;
                format!("reserved word '{}' used as label", label)));
        }
        if self.symbols.contains_key(label) {
            return Err(error!(CodeError, line_number, ..col;
                format!("duplicate label '{}'", label)));
        }
        let addr = self.next_address();
        self.symbols.insert(label.to_string(), addr);
        Ok(())
    }

    pub fn push(&mut self, line_number: LineNumber, opcode: Opcode, operands: Vec<(Column, Token)>) {
        self.unlinked.push(Unlinked {
            line_number,
            opcode,
            operands,
        });
    }

    pub fn link(self) -> Result<(Vec<Instruction>, BTreeMap<String, Address>)> {
        let mut instructions = Vec::with_capacity(self.unlinked.len());
        for unlinked in &self.unlinked {
            let mut operands = Vec::with_capacity(unlinked.operands.len());
            for (col, token) in &unlinked.operands {
                operands.push(self.operand(unlinked.line_number, col, token)?);
            }
            instructions.push(Instruction::new(unlinked.opcode, operands));
        }
        Ok((instructions, self.symbols.into_iter().collect()))
    }

    fn operand(&self, line_number: LineNumber, col: &Column, token: &Token) -> Result<Val> {
        match token {
            Token::String(s) => Ok(Val::from(s.as_str())),
            Token::Word(word) => {
                if let Some(addr) = self.get(word) {
                    Ok(Val::from(addr))
                } else if word == "nil" {
                    Ok(Val::Nil)
                } else if let Some(n) = parse_number(word) {
                    Ok(Val::Number(n))
                } else {
                    Err(error!(CodeError, line_number, ..col;
                        format!("undefined label or invalid operand '{}'", word)))
                }
            }
            Token::Label(_) | Token::Unknown(_) => Err(error!(CodeError, line_number, ..col;
                format!("invalid operand '{}'", token))),
        }
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let unsigned = s
        .strip_prefix('-')
        .or_else(|| s.strip_prefix('+'))
        .unwrap_or(s);
    match unsigned.chars().next() {
        Some(ch) if ch.is_ascii_digit() || ch == '.' => s.parse().ok(),
        _ => None,
    }
}
