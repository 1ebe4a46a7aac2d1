use super::assemble::assemble;
use super::{Address, Instruction};
use crate::lang::Error;
use std::collections::BTreeMap;

/// ## Linked program
///
/// Instructions are addressed by index, not byte offset.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    instructions: Vec<Instruction>,
    symbols: BTreeMap<String, Address>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Program {
        Program {
            instructions,
            symbols: BTreeMap::new(),
        }
    }

    pub fn with_symbols(
        instructions: Vec<Instruction>,
        symbols: BTreeMap<String, Address>,
    ) -> Program {
        Program {
            instructions,
            symbols,
        }
    }

    pub fn assemble(source: &str) -> Result<Program, Error> {
        assemble(source)
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, addr: Address) -> Option<&Instruction> {
        self.instructions.get(addr)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn label(&self, name: &str) -> Option<Address> {
        self.symbols.get(name).copied()
    }

    fn labels_at(&self, addr: Address) -> impl Iterator<Item = &String> + '_ {
        self.symbols
            .iter()
            .filter(move |(_, a)| **a == addr)
            .map(|(name, _)| name)
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Program {
        Program::new(instructions)
    }
}

/// Disassembly listing.
impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (addr, instruction) in self.instructions.iter().enumerate() {
            for name in self.labels_at(addr) {
                writeln!(f, "{}:", name)?;
            }
            writeln!(f, "{:04} {}", addr, instruction)?;
        }
        for name in self.labels_at(self.instructions.len()) {
            writeln!(f, "{}:", name)?;
        }
        Ok(())
    }
}
