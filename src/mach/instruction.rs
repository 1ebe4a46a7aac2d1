use super::{Opcode, Val};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// An opcode and its operands. Read-only once assembled; decoding
/// indexes the operands directly so a recursive call may execute the
/// same instruction again safely.
#[derive(Clone, PartialEq)]
pub struct Instruction {
    opcode: Opcode,
    operands: Vec<Val>,
}

impl Instruction {
    pub fn new(opcode: Opcode, operands: Vec<Val>) -> Instruction {
        Instruction { opcode, operands }
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn operands(&self) -> &[Val] {
        &self.operands
    }

    pub fn operand(&self, index: usize) -> Result<&Val> {
        match self.operands.get(index) {
            Some(val) => Ok(val),
            None => Err(error!(CodeError; format!(
                "expected {} operand{} from {}",
                self.opcode.arity(),
                if self.opcode.arity() == 1 { "" } else { "s" },
                self.opcode
            ))),
        }
    }
}

impl From<Opcode> for Instruction {
    fn from(opcode: Opcode) -> Instruction {
        Instruction::new(opcode, vec![])
    }
}

impl std::fmt::Debug for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.opcode)?;
        for val in &self.operands {
            write!(f, " {:?}", val)?;
        }
        Ok(())
    }
}
